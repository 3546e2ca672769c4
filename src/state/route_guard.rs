// ============================================================================
// ROUTE GUARD - ¿Se puede pintar esta ruta con esta sesión?
// ============================================================================
// Función pura de (sesión, path, rol requerido). Rol equivocado y sesión
// ausente terminan igual: en el login.
// ============================================================================

use crate::models::identity::Role;
use crate::state::routes::{Access, Route};
use crate::state::session_state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToForcedPasswordChange,
}

impl Decision {
    /// Ruta a la que hay que ir, si no se permite
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            Decision::Allow => None,
            Decision::RedirectToLogin => Some(Route::Login),
            Decision::RedirectToForcedPasswordChange => Some(Route::ForcedPasswordChange),
        }
    }
}

/// Guard de una ruta protegida
pub fn check(session: &Session, requested_path: &str, required_role: Option<Role>) -> Decision {
    let identity = match session.identity() {
        Some(identity) if session.is_authenticated() => identity,
        _ => return Decision::RedirectToLogin,
    };

    if identity.must_change_password && Route::recognize(requested_path) != Route::ForcedPasswordChange {
        return Decision::RedirectToForcedPasswordChange;
    }

    match required_role {
        Some(role) if identity.role != role => Decision::RedirectToLogin,
        _ => Decision::Allow,
    }
}

/// Decisión completa para cualquier path navegado: rutas desconocidas al
/// login, rutas públicas sin guard salvo el cambio de contraseña pendiente.
pub fn resolve(session: &Session, requested_path: &str) -> Decision {
    match Route::recognize(requested_path).access() {
        None => Decision::RedirectToLogin,
        Some(Access::Public) => match session.identity() {
            Some(identity) if identity.must_change_password => Decision::RedirectToForcedPasswordChange,
            _ => Decision::Allow,
        },
        Some(Access::Authenticated) => check(session, requested_path, None),
        Some(Access::Role(role)) => check(session, requested_path, Some(role)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token_decoder::tests::token_with;
    use serde_json::json;

    fn logged_in(role: &str, must_change: bool) -> Session {
        let token = token_with(json!({
            "sub": "5",
            "role": role,
            "pwdChangeRequired": must_change
        }));
        Session::from_credential(&token).unwrap()
    }

    #[test]
    fn forced_password_change_beats_role_check() {
        let session = logged_in("ADMIN", true);
        assert_eq!(
            check(&session, "/admin/usuarios", Some(Role::Admin)),
            Decision::RedirectToForcedPasswordChange
        );
        assert_eq!(resolve(&session, "/admin/usuarios"), Decision::RedirectToForcedPasswordChange);
    }

    #[test]
    fn forced_password_change_path_itself_is_allowed() {
        let session = logged_in("PROMOTOR", true);
        assert_eq!(check(&session, "/cambiar-password-obligatorio", None), Decision::Allow);
        assert_eq!(resolve(&session, "#/cambiar-password-obligatorio"), Decision::Allow);
    }

    #[test]
    fn logged_out_goes_to_login() {
        let session = Session::logged_out();
        assert_eq!(
            check(&session, "/promotor/dashboard", Some(Role::Promotor)),
            Decision::RedirectToLogin
        );
        assert_eq!(resolve(&session, "/promotor/dashboard"), Decision::RedirectToLogin);
        assert_eq!(resolve(&session, "/cambiar-password-obligatorio"), Decision::RedirectToLogin);
    }

    #[test]
    fn wrong_role_is_indistinguishable_from_logged_out() {
        let session = logged_in("PROMOTOR", false);
        assert_eq!(check(&session, "/admin/dashboard", Some(Role::Admin)), Decision::RedirectToLogin);
        assert_eq!(resolve(&session, "/admin/festivales"), Decision::RedirectToLogin);

        let cajero = logged_in("CAJERO", false);
        assert_eq!(resolve(&cajero, "/promotor/dashboard"), Decision::RedirectToLogin);
    }

    #[test]
    fn matching_role_is_allowed() {
        let session = logged_in("ADMIN", false);
        assert_eq!(check(&session, "/admin/festivales", Some(Role::Admin)), Decision::Allow);
        assert_eq!(resolve(&session, "/admin/festivales"), Decision::Allow);
        assert_eq!(resolve(&session, "/dashboard"), Decision::Allow);
    }

    #[test]
    fn public_nomination_bypasses_the_guard() {
        let path = "/public/nominar-entrada/XYZ123";
        assert_eq!(resolve(&Session::logged_out(), path), Decision::Allow);
        assert_eq!(resolve(&logged_in("PROMOTOR", false), path), Decision::Allow);
        assert_eq!(resolve(&Session::logged_out(), "/login"), Decision::Allow);
    }

    #[test]
    fn pending_password_change_applies_to_public_routes_too() {
        let session = logged_in("PROMOTOR", true);
        assert_eq!(resolve(&session, "/login"), Decision::RedirectToForcedPasswordChange);
        assert_eq!(
            resolve(&session, "/public/nominar-entrada/XYZ123"),
            Decision::RedirectToForcedPasswordChange
        );
    }

    #[test]
    fn unknown_paths_always_redirect_to_login() {
        let sessions = [
            Session::logged_out(),
            logged_in("ADMIN", false),
            logged_in("ADMIN", true),
        ];
        for session in &sessions {
            for path in ["/", "/nada", "/promotor/festivales/3/gestion-entradas"] {
                assert_eq!(resolve(session, path), Decision::RedirectToLogin);
            }
        }
    }

    #[test]
    fn decisions_are_pure() {
        let session = logged_in("PROMOTOR", false);
        let inputs = [
            ("/promotor/dashboard", Some(Role::Promotor)),
            ("/admin/usuarios", Some(Role::Admin)),
            ("/dashboard", None),
        ];
        for (path, role) in inputs {
            let first = check(&session, path, role);
            for _ in 0..3 {
                assert_eq!(check(&session, path, role), first);
                assert_eq!(resolve(&session, path), resolve(&session, path));
            }
        }
    }

    #[test]
    fn redirect_targets() {
        assert_eq!(Decision::Allow.redirect_target(), None);
        assert_eq!(Decision::RedirectToLogin.redirect_target(), Some(Route::Login));
        assert_eq!(
            Decision::RedirectToForcedPasswordChange.redirect_target(),
            Some(Route::ForcedPasswordChange)
        );
    }
}
