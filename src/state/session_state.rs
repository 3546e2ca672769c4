// ============================================================================
// SESSION STATE - Quién está logueado (única fuente de verdad)
// ============================================================================
// Credencial + identidad decodificada. Solo cambia por `login` y `logout`,
// ambas síncronas: los subscribers ven el estado final, nunca uno intermedio.
// ============================================================================

use std::rc::Rc;

use crate::models::identity::Identity;
use crate::services::credential_store::CredentialStore;
use crate::services::token_decoder::{self, DecodeError};
use crate::state::reactivity::{ReactiveState, Subscription};

/// Foto inmutable de la sesión.
/// Invariante: `identity.is_some() == credential.is_some()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    credential: Option<String>,
    identity: Option<Identity>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Sesión a partir de un token; falla si no se puede decodificar
    pub fn from_credential(credential: &str) -> Result<Self, DecodeError> {
        let identity = token_decoder::decode(credential)?;
        Ok(Self {
            credential: Some(credential.to_string()),
            identity: Some(identity),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

/// Contenedor de la sesión de la aplicación: una instancia, muchos lectores
#[derive(Clone)]
pub struct SessionState {
    store: Rc<dyn CredentialStore>,
    state: ReactiveState<Session>,
}

impl SessionState {
    /// Estado inicial a partir del Credential Store. Un token corrupto se
    /// purga para no reintentarlo en cada recarga.
    pub fn restore(store: Rc<dyn CredentialStore>) -> Self {
        let session = match store.read() {
            Some(token) => match Session::from_credential(&token) {
                Ok(session) => {
                    if let Some(identity) = session.identity() {
                        log::info!("💾 [SESSION] Sesión restaurada para {} ({})", identity.display_name, identity.role);
                    }
                    session
                }
                Err(e) => {
                    log::warn!("⚠️ [SESSION] Token guardado inválido, se descarta: {}", e);
                    store.clear();
                    Session::logged_out()
                }
            },
            None => Session::logged_out(),
        };

        Self {
            store,
            state: ReactiveState::new(session),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    /// Persiste el token y lo decodifica. Si no decodifica, la sesión queda
    /// cerrada y el almacén vacío; el error vuelve al formulario de login.
    pub fn login(&self, credential: &str) -> Result<Identity, DecodeError> {
        self.store.write(credential);
        match token_decoder::decode(credential) {
            Ok(identity) => {
                log::info!("✅ [SESSION] Login de {} ({})", identity.display_name, identity.role);
                self.state.set(Session {
                    credential: Some(credential.to_string()),
                    identity: Some(identity.clone()),
                });
                Ok(identity)
            }
            Err(e) => {
                log::error!("❌ [SESSION] Token recibido inválido: {}", e);
                self.store.clear();
                self.state.set(Session::logged_out());
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        self.store.clear();
        self.state.set(Session::logged_out());
        log::info!("👋 [SESSION] Logout");
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity::Role;
    use crate::services::credential_store::MemoryCredentialStore;
    use crate::services::token_decoder::tests::token_with;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    fn admin_token() -> String {
        token_with(json!({"sub": "1", "role": "ADMIN", "userName": "Marta"}))
    }

    fn state_over(store: &MemoryCredentialStore) -> SessionState {
        SessionState::restore(Rc::new(store.clone()))
    }

    #[test]
    fn starts_logged_out_with_empty_store() {
        let store = MemoryCredentialStore::new();
        let state = state_over(&store);
        assert!(!state.is_authenticated());
        assert_eq!(state.snapshot(), Session::logged_out());
    }

    #[test]
    fn restores_a_persisted_credential() {
        let token = admin_token();
        let store = MemoryCredentialStore::with_value(&token);
        let session = state_over(&store).snapshot();

        assert_eq!(session.credential(), Some(token.as_str()));
        assert_eq!(session.identity().map(|i| i.role), Some(Role::Admin));
    }

    #[test]
    fn corrupt_persisted_credential_is_purged_at_startup() {
        let store = MemoryCredentialStore::with_value("esto.no.es-un-jwt");
        let state = state_over(&store);

        assert!(!state.is_authenticated());
        assert_eq!(store.read(), None);
    }

    #[test]
    fn login_persists_exactly_the_credential() {
        let store = MemoryCredentialStore::new();
        let state = state_over(&store);
        let token = admin_token();

        let identity = state.login(&token).unwrap();
        assert_eq!(identity.display_name, "Marta");
        assert_eq!(store.read(), Some(token.clone()));

        // Otra instancia sobre el mismo almacén ve la misma sesión
        assert_eq!(state_over(&store).snapshot(), state.snapshot());
    }

    #[test]
    fn malformed_credentials_leave_session_logged_out_and_store_empty() {
        let not_json = format!("e30.{}.x", "bm8tanNvbg");
        for bad in ["", "abc", "a.b.c", "e30..x", not_json.as_str()] {
            let store = MemoryCredentialStore::new();
            let state = state_over(&store);
            state.login(&admin_token()).unwrap();

            assert!(state.login(bad).is_err(), "se aceptó {:?}", bad);
            assert!(!state.is_authenticated());
            assert!(state.snapshot().identity().is_none());
            assert_eq!(store.read(), None);
        }
    }

    #[test]
    fn login_then_logout_always_ends_logged_out() {
        for token in [admin_token(), "basura".to_string()] {
            let store = MemoryCredentialStore::new();
            let state = state_over(&store);
            let _ = state.login(&token);
            state.logout();

            assert_eq!(state.snapshot(), Session::logged_out());
            assert_eq!(store.read(), None);
        }
    }

    #[test]
    fn expired_credential_is_still_trusted() {
        let store = MemoryCredentialStore::new();
        let state = state_over(&store);
        let expired = token_with(json!({"sub": "3", "role": "PROMOTOR", "exp": 10}));

        assert!(state.login(&expired).is_ok());
        assert!(state.is_authenticated());
    }

    #[test]
    fn each_transition_notifies_with_final_state() {
        let store = MemoryCredentialStore::new();
        let state = state_over(&store);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            let reader = state.clone();
            state.subscribe(move || {
                let session = reader.snapshot();
                // Nunca autenticado sin identidad
                assert_eq!(session.is_authenticated(), session.identity().is_some());
                seen.borrow_mut().push(session.is_authenticated());
            })
        };

        state.login(&admin_token()).unwrap();
        let _ = state.login("roto");
        state.login(&admin_token()).unwrap();
        state.logout();

        assert_eq!(*seen.borrow(), vec![true, false, true, false]);
    }

    #[test]
    fn clones_are_the_same_session() {
        let store = MemoryCredentialStore::new();
        let state = state_over(&store);
        let other = state.clone();
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            other.subscribe(move || hits.set(hits.get() + 1))
        };

        state.login(&admin_token()).unwrap();
        assert!(other.is_authenticated());
        assert!(other.ptr_eq(&state));
        assert_eq!(hits.get(), 1);
    }
}
