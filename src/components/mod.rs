pub mod alert;
pub mod redirect;
pub mod header;
pub mod confirm_modal;
pub mod data_table;
pub mod login_screen;
pub mod change_password_screen;
pub mod public_nomination;
pub mod admin_dashboard;
pub mod promoter_dashboard;
pub mod festival_form;
pub mod listing_view;
pub mod ticket_management;
pub mod ticket_types_view;
pub mod admin_festivals;
pub mod user_management;
pub mod reports_view;
pub mod router;
pub mod app;

pub use alert::{Alert, AlertKind};
pub use app::App;
pub use confirm_modal::ConfirmModal;
pub use redirect::Redirect;
pub use router::Router;
