// ============================================================================
// TICKET VIEWMODEL - Entradas vendidas y pulseras de un festival
// ============================================================================
// Qué acciones admite cada entrada y los textos de confirmación/resultado.
// ============================================================================

use crate::models::{FestivalTicket, TicketStatus};
use crate::viewmodels::validation::ValidationError;

pub const TICKETS_LOAD_FAILED: &str = "Error al cargar las entradas";
pub const BRACELETS_LOAD_FAILED: &str = "Error al cargar las pulseras";
pub const TICKET_ACTION_FAILED: &str = "No se pudo completar la operación";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketTab {
    Entradas,
    Pulseras,
}

impl TicketTab {
    pub fn label(&self) -> &'static str {
        match self {
            TicketTab::Entradas => "Entradas",
            TicketTab::Pulseras => "Pulseras NFC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    Nominate,
    AssociateBracelet,
    Cancel,
}

impl TicketAction {
    pub fn label(&self) -> &'static str {
        match self {
            TicketAction::Nominate => "Nominar",
            TicketAction::AssociateBracelet => "Asociar pulsera",
            TicketAction::Cancel => "Cancelar",
        }
    }
}

/// Solo las entradas activas admiten acciones; nominar y asociar pulsera
/// desaparecen cuando ya están hechas.
pub fn available_actions(ticket: &FestivalTicket) -> Vec<TicketAction> {
    if ticket.status() != TicketStatus::Activa {
        return Vec::new();
    }
    let mut actions = Vec::with_capacity(3);
    if !ticket.is_nominated() {
        actions.push(TicketAction::Nominate);
    }
    if !ticket.has_bracelet() {
        actions.push(TicketAction::AssociateBracelet);
    }
    actions.push(TicketAction::Cancel);
    actions
}

pub fn validate_bracelet_uid(raw: &str) -> Result<String, ValidationError> {
    let uid = raw.trim();
    if uid.is_empty() {
        return Err(ValidationError::BraceletUidRequired);
    }
    Ok(uid.to_string())
}

pub fn cancel_confirmation(ticket: &FestivalTicket) -> String {
    format!(
        "¿Estás seguro de que quieres cancelar la entrada con código \"{}\"? Esta acción revertirá el stock.",
        ticket.codigo_qr
    )
}

pub fn action_success(action: TicketAction, ticket: &FestivalTicket) -> String {
    match action {
        TicketAction::Nominate => format!("Entrada nominada con éxito! (QR: {})", ticket.codigo_qr),
        TicketAction::AssociateBracelet => {
            format!("Pulsera asociada con éxito a entrada QR {}!", ticket.codigo_qr)
        }
        TicketAction::Cancel => format!("Entrada \"{}\" cancelada con éxito!", ticket.codigo_qr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(estado: &str) -> FestivalTicket {
        FestivalTicket {
            id_entrada: 1,
            codigo_qr: "QR-1".into(),
            estado: estado.into(),
            tipo_entrada_original: Some("General".into()),
            id_compra_entrada: Some(4),
            nombre_asistente: None,
            email_asistente: None,
            codigo_uid_pulsera: None,
        }
    }

    #[test]
    fn fresh_active_ticket_offers_everything() {
        assert_eq!(
            available_actions(&ticket("ACTIVA")),
            vec![TicketAction::Nominate, TicketAction::AssociateBracelet, TicketAction::Cancel]
        );
    }

    #[test]
    fn done_steps_are_hidden() {
        let mut nominated = ticket("ACTIVA");
        nominated.nombre_asistente = Some("Ana".into());
        nominated.codigo_uid_pulsera = Some("04A1".into());
        assert_eq!(available_actions(&nominated), vec![TicketAction::Cancel]);
    }

    #[test]
    fn inactive_tickets_are_read_only() {
        assert!(available_actions(&ticket("USADA")).is_empty());
        assert!(available_actions(&ticket("CANCELADA")).is_empty());
    }

    #[test]
    fn bracelet_uid_is_required() {
        assert_eq!(validate_bracelet_uid("   "), Err(ValidationError::BraceletUidRequired));
        assert_eq!(validate_bracelet_uid(" 04A1B2 ").as_deref(), Ok("04A1B2"));
    }

    #[test]
    fn messages_quote_the_qr() {
        let t = ticket("ACTIVA");
        assert!(cancel_confirmation(&t).contains("\"QR-1\""));
        assert_eq!(action_success(TicketAction::Cancel, &t), "Entrada \"QR-1\" cancelada con éxito!");
    }
}
