// ============================================================================
// NOMINATION VIEWMODEL - Reglas del formulario público de nominación
// ============================================================================

use crate::models::{NominationRequest, PublicTicket, TicketState};
use crate::viewmodels::validation::ValidationError;

pub const TICKET_NOT_FOUND: &str = "No se encontró la entrada";
pub const NOMINATION_FAILED: &str = "Error al nominar la entrada";

/// Mensaje de bloqueo si la entrada no admite nominación
pub fn blocking_reason(ticket: &PublicTicket) -> Option<String> {
    match ticket.state() {
        TicketState::Nominable => None,
        TicketState::AlreadyNominated { name, .. } => {
            Some(format!("Esta entrada ya está nominada a nombre de {}", name))
        }
        TicketState::NotActive(estado) => Some(format!(
            "Esta entrada no se puede nominar (estado: {})",
            estado
        )),
    }
}

/// Valida y normaliza la petición (emails y nombre recortados)
pub fn validate_nomination(
    ticket: &PublicTicket,
    form: &NominationRequest,
) -> Result<NominationRequest, ValidationError> {
    if let Some(reason) = blocking_reason(ticket) {
        return Err(ValidationError::TicketNotNominable(reason));
    }
    validate_attendee(form)
}

/// Datos del asistente: los comparten la nominación pública y la del promotor
pub fn validate_attendee(form: &NominationRequest) -> Result<NominationRequest, ValidationError> {
    let email = form.email_asistente.trim();
    let confirm = form.confirm_email_nominado.trim();
    let name = form.nombre_asistente.trim();

    if email.is_empty() {
        return Err(ValidationError::Required("email"));
    }
    if name.is_empty() {
        return Err(ValidationError::Required("nombre"));
    }
    if !looks_like_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !email.eq_ignore_ascii_case(confirm) {
        return Err(ValidationError::EmailMismatch);
    }

    Ok(NominationRequest {
        email_asistente: email.to_string(),
        confirm_email_nominado: confirm.to_string(),
        nombre_asistente: name.to_string(),
        telefono_asistente: form.telefono_asistente.trim().to_string(),
    })
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_ticket() -> PublicTicket {
        PublicTicket {
            codigo_qr: "XYZ123".into(),
            estado: "ACTIVA".into(),
            nombre_festival: Some("Sonar".into()),
            nombre_asistente: None,
            email_asistente: None,
        }
    }

    fn form(email: &str, confirm: &str, name: &str) -> NominationRequest {
        NominationRequest {
            email_asistente: email.into(),
            confirm_email_nominado: confirm.into(),
            nombre_asistente: name.into(),
            telefono_asistente: String::new(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let request = validate_nomination(
            &active_ticket(),
            &form(" ana@example.com ", "ana@example.com", " Ana "),
        )
        .unwrap();
        assert_eq!(request.email_asistente, "ana@example.com");
        assert_eq!(request.nombre_asistente, "Ana");
    }

    #[test]
    fn required_fields_and_matching_emails() {
        let ticket = active_ticket();
        assert_eq!(
            validate_nomination(&ticket, &form("", "", "Ana")),
            Err(ValidationError::Required("email"))
        );
        assert_eq!(
            validate_nomination(&ticket, &form("ana@example.com", "ana@example.com", "")),
            Err(ValidationError::Required("nombre"))
        );
        assert_eq!(
            validate_nomination(&ticket, &form("ana@example.com", "otra@example.com", "Ana")),
            Err(ValidationError::EmailMismatch)
        );
        assert_eq!(
            validate_nomination(&ticket, &form("ana", "ana", "Ana")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn blocked_tickets_cannot_be_nominated() {
        let mut used = active_ticket();
        used.estado = "USADA".into();
        assert!(matches!(
            validate_nomination(&used, &form("ana@example.com", "ana@example.com", "Ana")),
            Err(ValidationError::TicketNotNominable(_))
        ));

        let mut taken = active_ticket();
        taken.nombre_asistente = Some("Luis".into());
        assert_eq!(
            blocking_reason(&taken).as_deref(),
            Some("Esta entrada ya está nominada a nombre de Luis")
        );
        assert_eq!(blocking_reason(&active_ticket()), None);
    }
}
