pub mod validation;
pub mod login_viewmodel;
pub mod password_viewmodel;
pub mod nomination_viewmodel;
pub mod festival_form;
pub mod listing_viewmodel;
pub mod ticket_viewmodel;
pub mod ticket_type_form;
pub mod admin_viewmodel;
pub mod report_viewmodel;

pub use validation::ValidationError;
pub use festival_form::FestivalForm;
pub use listing_viewmodel::{ListingSpec, Table};
pub use ticket_type_form::TicketTypeForm;
pub use report_viewmodel::ReportKind;
