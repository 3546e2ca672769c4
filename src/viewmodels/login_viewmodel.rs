// ============================================================================
// LOGIN VIEWMODEL - Validación y mensajes del formulario de login
// ============================================================================

use crate::models::LoginResponse;
use crate::services::api_client::ApiError;
use crate::state::routes::Route;
use crate::viewmodels::validation::ValidationError;

pub const INVALID_CREDENTIALS: &str = "Email o contraseña incorrectos. Por favor, inténtalo de nuevo.";
pub const AUTH_FAILED: &str = "Error de autenticación";
pub const INVALID_TOKEN: &str = "Error de autenticación: respuesta del servidor no válida";

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// 401 = credenciales; cualquier otro fallo usa el `error` del backend
pub fn login_error_message(error: &ApiError) -> String {
    if error.is_unauthorized() {
        INVALID_CREDENTIALS.to_string()
    } else {
        error.user_message(AUTH_FAILED)
    }
}

/// A dónde ir tras un login correcto
pub fn route_after_login(response: &LoginResponse) -> Route {
    if response.cambio_password_requerido {
        Route::ForcedPasswordChange
    } else {
        Route::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(validate_login("", "x"), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("  ", "x"), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("a@b.com", ""), Err(ValidationError::MissingFields));
        assert!(validate_login("a@b.com", "secreto").is_ok());
    }

    #[test]
    fn unauthorized_always_reads_as_bad_credentials() {
        let with_body = ApiError::Unauthorized(Some("Bad credentials".into()));
        assert_eq!(login_error_message(&with_body), INVALID_CREDENTIALS);
        assert_eq!(login_error_message(&ApiError::Unauthorized(None)), INVALID_CREDENTIALS);
    }

    #[test]
    fn other_failures_prefer_backend_message() {
        let locked = ApiError::Http { status: 403, message: Some("Cuenta bloqueada".into()) };
        assert_eq!(login_error_message(&locked), "Cuenta bloqueada");

        let bare = ApiError::Http { status: 500, message: None };
        assert_eq!(login_error_message(&bare), AUTH_FAILED);
    }

    #[test]
    fn pending_password_change_routes_to_forced_change() {
        let pending = LoginResponse { token: "t".into(), cambio_password_requerido: true };
        assert_eq!(route_after_login(&pending), Route::ForcedPasswordChange);

        let done = LoginResponse { token: "t".into(), cambio_password_requerido: false };
        assert_eq!(route_after_login(&done), Route::Dashboard);
    }
}
