use crate::models::{NominationRequest, PublicTicket};
use crate::services::api_client::{ApiClient, ApiError};

fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

/// Datos públicos de una entrada por su código QR (sin autenticación)
pub async fn fetch_public_ticket(codigo_qr: &str) -> Result<PublicTicket, ApiError> {
    let path = format!("/public/venta/entrada-qr/{}", encode_segment(codigo_qr));
    ApiClient::new().get_json(&path).await
}

/// Nomina la entrada; el backend devuelve la entrada actualizada
pub async fn nominate_ticket(
    codigo_qr: &str,
    request: &NominationRequest,
) -> Result<PublicTicket, ApiError> {
    let path = format!("/public/venta/nominar/{}", encode_segment(codigo_qr));
    log::info!("🎫 [NOMINATION] Nominando entrada {}", codigo_qr);
    ApiClient::new().post_json(&path, request).await
}
