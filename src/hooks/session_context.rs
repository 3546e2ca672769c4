// ============================================================================
// SESSION CONTEXT - Compartir la sesión entre componentes
// ============================================================================
// El provider crea el SessionState UNA vez (desde localStorage) y reenvía
// cada transición a Yew para que todos los consumidores se re-rendericen.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::identity::Identity;
use crate::services::api_client::ApiError;
use crate::services::credential_store::LocalStorageCredentialStore;
use crate::services::token_decoder::DecodeError;
use crate::state::session_state::{Session, SessionState};
use crate::utils::scheduler::Scheduler;

/// Lo que ven los componentes: foto de la sesión + login/logout
#[derive(Clone)]
pub struct SessionHandle {
    state: SessionState,
    session: Session,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state) && self.session == other.session
    }
}

impl SessionHandle {
    pub fn new(state: SessionState) -> Self {
        let session = state.snapshot();
        Self { state, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn credential(&self) -> Option<&str> {
        self.session.credential()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn login(&self, credential: &str) -> Result<Identity, DecodeError> {
        self.state.login(credential)
    }

    pub fn logout(&self) {
        self.state.logout();
    }

    /// Cierra la sesión pasado `delay_ms` y luego ejecuta `then`. La tarea
    /// queda en manos del scheduler, no del componente que la programa.
    pub fn logout_after(&self, scheduler: &dyn Scheduler, delay_ms: u32, then: Box<dyn FnOnce()>) {
        let state = self.state.clone();
        scheduler.after(
            delay_ms,
            Box::new(move || {
                state.logout();
                then();
            }),
        );
    }

    /// Mensaje para un error de un endpoint protegido. Un 401 cierra la
    /// sesión: el token ya no vale para el backend.
    pub fn report_api_error(&self, error: &ApiError, fallback: &str) -> String {
        if error.is_unauthorized() && self.is_authenticated() {
            log::warn!("⚠️ [SESSION] El API rechazó el token, cerrando sesión");
            self.logout();
        }
        error.user_message(fallback)
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provider raíz de la sesión
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_memo((), |_| {
        SessionState::restore(Rc::new(LocalStorageCredentialStore::new()))
    });
    let session = use_state(|| state.snapshot());

    {
        let state = state.clone();
        let setter = session.setter();
        use_effect_with((), move |_| {
            let reader = (*state).clone();
            let subscription = state.subscribe(move || setter.set(reader.snapshot()));
            move || drop(subscription)
        });
    }

    // `session` solo provoca el re-render; la foto se toma del estado
    let handle = SessionHandle::new((*state).clone());

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Sesión actual. Requiere `SessionProvider` en la raíz.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session() fuera de <SessionProvider>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::credential_store::{CredentialStore, MemoryCredentialStore};
    use crate::services::token_decoder::tests::token_with;
    use serde_json::json;
    use std::cell::RefCell;

    /// Guarda las tareas hasta que el test las ejecuta
    #[derive(Default)]
    struct ManualScheduler {
        tasks: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    }

    impl Scheduler for ManualScheduler {
        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.tasks.borrow_mut().push((delay_ms, task));
        }
    }

    impl ManualScheduler {
        fn run_all(&self) {
            let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
            for (_, task) in tasks {
                task();
            }
        }
    }

    fn handle_over(store: &MemoryCredentialStore) -> SessionHandle {
        SessionHandle::new(SessionState::restore(Rc::new(store.clone())))
    }

    #[test]
    fn handles_compare_by_snapshot() {
        let store = MemoryCredentialStore::new();
        let before = handle_over(&store);
        let token = token_with(json!({"sub": "1", "role": "ADMIN"}));
        before.login(&token).unwrap();

        let after = SessionHandle::new(before.state.clone());
        assert!(before != after);
        assert!(after.is_authenticated());
        assert_eq!(after.credential(), Some(token.as_str()));
        assert!(after == SessionHandle::new(before.state.clone()));
    }

    #[test]
    fn unauthorized_api_error_logs_out() {
        let token = token_with(json!({"sub": "1", "role": "PROMOTOR"}));
        let store = MemoryCredentialStore::with_value(&token);
        let handle = handle_over(&store);

        let message = handle.report_api_error(&ApiError::Unauthorized(None), "Error al cargar");
        assert_eq!(message, "Error al cargar");
        assert_eq!(store.read(), None);
        assert!(!handle.state.is_authenticated());
    }

    #[test]
    fn other_api_errors_keep_the_session() {
        let token = token_with(json!({"sub": "1", "role": "PROMOTOR"}));
        let store = MemoryCredentialStore::with_value(&token);
        let handle = handle_over(&store);

        let error = ApiError::Http { status: 403, message: Some("Prohibido".into()) };
        assert_eq!(handle.report_api_error(&error, "x"), "Prohibido");
        assert_eq!(store.read(), Some(token));
    }

    #[test]
    fn delayed_logout_survives_the_screen_that_scheduled_it() {
        let token = token_with(json!({"sub": "7", "role": "PROMOTOR", "pwdChangeRequired": true}));
        let store = MemoryCredentialStore::with_value(&token);
        let state = SessionState::restore(Rc::new(store.clone()));
        let scheduler = ManualScheduler::default();
        let navigated = Rc::new(RefCell::new(false));

        {
            // La pantalla programa el logout y desaparece
            let screen_handle = SessionHandle::new(state.clone());
            let navigated = navigated.clone();
            screen_handle.logout_after(&scheduler, 3000, Box::new(move || *navigated.borrow_mut() = true));
        }
        assert!(state.is_authenticated());
        assert_eq!(scheduler.tasks.borrow()[0].0, 3000);

        scheduler.run_all();
        assert!(!state.is_authenticated());
        assert_eq!(store.read(), None);
        assert!(*navigated.borrow());
    }
}
