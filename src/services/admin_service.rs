// ============================================================================
// ADMIN SERVICE - Festivales de la plataforma, usuarios internos e informes
// ============================================================================

use serde::de::DeserializeOwned;

use crate::models::{Festival, FestivalStatus, StatusChangeRequest, User};
use crate::services::api_client::{ApiClient, ApiError};

/// Ruta del listado de festivales del admin, con filtro opcional por estado
pub fn admin_festivals_path(filter: Option<FestivalStatus>) -> String {
    match filter {
        Some(status) => format!("/admin/festivales?estado={}", status.as_str()),
        None => "/admin/festivales".to_string(),
    }
}

pub async fn fetch_admin_festivals(
    token: &str,
    filter: Option<FestivalStatus>,
) -> Result<Vec<Festival>, ApiError> {
    ApiClient::with_token(token)
        .get_json(&admin_festivals_path(filter))
        .await
}

/// BORRADOR -> PUBLICADO
pub async fn confirm_festival(token: &str, id_festival: i64) -> Result<(), ApiError> {
    log::info!("🎪 [ADMIN] Publicando festival {}", id_festival);
    ApiClient::with_token(token)
        .put_empty(&format!("/admin/festivales/{}/confirmar", id_festival))
        .await
}

pub async fn change_festival_status(
    token: &str,
    id_festival: i64,
    status: FestivalStatus,
) -> Result<(), ApiError> {
    log::info!("🎪 [ADMIN] Festival {} -> {}", id_festival, status.as_str());
    ApiClient::with_token(token)
        .put_discard(
            &format!("/admin/festivales/{}/estado", id_festival),
            &StatusChangeRequest::festival(status.as_str()),
        )
        .await
}

pub async fn fetch_users(token: &str, path: &str) -> Result<Vec<User>, ApiError> {
    ApiClient::with_token(token).get_json(path).await
}

pub async fn set_user_active(token: &str, id_usuario: i64, active: bool) -> Result<(), ApiError> {
    log::info!("👤 [ADMIN] Usuario {} activo={}", id_usuario, active);
    ApiClient::with_token(token)
        .put_discard(
            &format!("/admin/usuarios/{}/estado", id_usuario),
            &StatusChangeRequest::active(active),
        )
        .await
}

/// Filas tipadas de un informe o selector
pub async fn fetch_rows<T: DeserializeOwned>(token: &str, path: &str) -> Result<Vec<T>, ApiError> {
    ApiClient::with_token(token).get_json(path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn festival_filter_goes_in_query() {
        assert_eq!(admin_festivals_path(None), "/admin/festivales");
        assert_eq!(
            admin_festivals_path(Some(FestivalStatus::Borrador)),
            "/admin/festivales?estado=BORRADOR"
        );
    }

    #[test]
    fn status_bodies_are_text() {
        assert_eq!(
            serde_json::to_value(StatusChangeRequest::active(false)).unwrap(),
            serde_json::json!({"nuevoEstado": "false"})
        );
        assert_eq!(
            serde_json::to_value(StatusChangeRequest::festival("CANCELADO")).unwrap(),
            serde_json::json!({"nuevoEstado": "CANCELADO"})
        );
    }
}
