pub mod session_context;
pub mod use_route;
pub mod use_mounted;
pub mod use_flash;
pub mod use_latest_request;
pub mod use_action;

pub use session_context::{use_session, SessionHandle, SessionProvider};
pub use use_route::{current_path, navigate, replace, use_current_path};
pub use use_mounted::{use_mounted, MountedFlag};
pub use use_flash::{use_flash, UseFlashHandle};
pub use use_latest_request::{use_latest_request, LatestRequest, RequestTicket};
pub use use_action::{use_action, ActionRunner};
