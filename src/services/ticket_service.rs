// ============================================================================
// TICKET SERVICE - Entradas, pulseras y tipos de entrada del promotor
// ============================================================================

use crate::models::{
    AssociateBraceletRequest, Bracelet, FestivalTicket, NominationRequest, TicketType,
    TicketTypePayload,
};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn fetch_festival_tickets(
    token: &str,
    id_festival: i64,
) -> Result<Vec<FestivalTicket>, ApiError> {
    ApiClient::with_token(token)
        .get_json(&format!("/promotor/festivales/{}/entradas", id_festival))
        .await
}

pub async fn fetch_festival_bracelets(
    token: &str,
    id_festival: i64,
) -> Result<Vec<Bracelet>, ApiError> {
    ApiClient::with_token(token)
        .get_json(&format!("/promotor/festivales/{}/pulseras", id_festival))
        .await
}

/// Nominación hecha por el promotor (a diferencia de la pública, va por id)
pub async fn nominate_festival_ticket(
    token: &str,
    id_entrada: i64,
    request: &NominationRequest,
) -> Result<(), ApiError> {
    log::info!("🎫 [TICKETS] Nominando entrada {}", id_entrada);
    ApiClient::with_token(token)
        .post_discard(&format!("/promotor/entradas/{}/nominar", id_entrada), request)
        .await
}

/// Cancela la entrada; el backend repone el stock del tipo
pub async fn cancel_ticket(token: &str, id_entrada: i64) -> Result<(), ApiError> {
    log::info!("🎫 [TICKETS] Cancelando entrada {}", id_entrada);
    ApiClient::with_token(token)
        .post_empty(&format!("/promotor/entradas/{}/cancelar", id_entrada))
        .await
}

pub async fn associate_bracelet(
    token: &str,
    id_entrada: i64,
    codigo_uid: &str,
) -> Result<(), ApiError> {
    log::info!("📿 [TICKETS] Asociando pulsera {} a entrada {}", codigo_uid, id_entrada);
    let body = AssociateBraceletRequest {
        codigo_uid: codigo_uid.to_string(),
    };
    ApiClient::with_token(token)
        .post_discard(&format!("/promotor/entradas/{}/asociar-pulsera", id_entrada), &body)
        .await
}

pub async fn fetch_ticket_types(token: &str, id_festival: i64) -> Result<Vec<TicketType>, ApiError> {
    ApiClient::with_token(token)
        .get_json(&format!("/promotor/festivales/{}/tipos-entrada", id_festival))
        .await
}

pub async fn create_ticket_type(
    token: &str,
    id_festival: i64,
    payload: &TicketTypePayload,
) -> Result<(), ApiError> {
    log::info!("🎟️ [TICKET_TYPES] Creando tipo {} en festival {}", payload.tipo, id_festival);
    ApiClient::with_token(token)
        .post_discard(&format!("/promotor/festivales/{}/tipos-entrada", id_festival), payload)
        .await
}

pub async fn update_ticket_type(
    token: &str,
    id_tipo_entrada: i64,
    payload: &TicketTypePayload,
) -> Result<(), ApiError> {
    log::info!("🎟️ [TICKET_TYPES] Actualizando tipo {}", id_tipo_entrada);
    ApiClient::with_token(token)
        .put_discard(&format!("/promotor/tipos-entrada/{}", id_tipo_entrada), payload)
        .await
}

pub async fn delete_ticket_type(token: &str, id_tipo_entrada: i64) -> Result<(), ApiError> {
    log::info!("🗑️ [TICKET_TYPES] Eliminando tipo {}", id_tipo_entrada);
    ApiClient::with_token(token)
        .delete(&format!("/promotor/tipos-entrada/{}", id_tipo_entrada))
        .await
}
