use crate::models::{Festival, FestivalPayload};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn fetch_promoter_festivals(token: &str) -> Result<Vec<Festival>, ApiError> {
    ApiClient::with_token(token).get_json("/promotor/festivales").await
}

pub async fn fetch_festival(token: &str, id_festival: i64) -> Result<Festival, ApiError> {
    ApiClient::with_token(token)
        .get_json(&format!("/promotor/festivales/{}", id_festival))
        .await
}

pub async fn create_festival(token: &str, payload: &FestivalPayload) -> Result<Festival, ApiError> {
    log::info!("🎪 [FESTIVAL] Creando festival {}", payload.nombre);
    ApiClient::with_token(token)
        .post_json("/promotor/festivales", payload)
        .await
}

pub async fn update_festival(
    token: &str,
    id_festival: i64,
    payload: &FestivalPayload,
) -> Result<Festival, ApiError> {
    log::info!("🎪 [FESTIVAL] Actualizando festival {}", id_festival);
    ApiClient::with_token(token)
        .put_json(&format!("/promotor/festivales/{}", id_festival), payload)
        .await
}

/// Listado genérico de solo lectura (usuarios, clientes, entradas...)
pub async fn fetch_listing(token: &str, path: &str) -> Result<serde_json::Value, ApiError> {
    ApiClient::with_token(token).get_json(path).await
}
