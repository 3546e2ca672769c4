// ============================================================================
// STATE MODULE - Sesión reactiva (Rc<RefCell> + notificaciones) y rutas
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod routes;
pub mod route_guard;

pub use reactivity::{ReactiveState, Subscription};
pub use session_state::{Session, SessionState};
pub use routes::{Access, Route};
pub use route_guard::Decision;
