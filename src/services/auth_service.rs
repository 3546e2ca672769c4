use crate::models::{ChangePasswordRequest, LoginRequest, LoginResponse};
use crate::services::api_client::{ApiClient, ApiError};

/// POST /auth/login. El 401 llega como `ApiError::Unauthorized`.
pub async fn perform_login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    log::info!("🔐 [AUTH] Login para {}", request.email);
    ApiClient::new().post_json("/auth/login", &request).await
}

/// Cambio de contraseña obligatorio tras el primer login
pub async fn change_password_forced(
    token: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    let request = ChangePasswordRequest {
        new_password: new_password.to_string(),
        confirm_password: confirm_password.to_string(),
    };
    ApiClient::with_token(token)
        .post_discard("/promotor/cambiar-password-obligatorio", &request)
        .await
}
