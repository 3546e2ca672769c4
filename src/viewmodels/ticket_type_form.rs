// ============================================================================
// TICKET TYPE FORM - Alta/edición de tipos de entrada
// ============================================================================

use crate::models::{TicketType, TicketTypePayload};
use crate::viewmodels::validation::ValidationError;

pub const TICKET_TYPES_LOAD_FAILED: &str = "Error al cargar los tipos de entrada";
pub const TICKET_TYPE_SAVE_FAILED: &str = "Error al guardar el tipo de entrada";
pub const TICKET_TYPE_DELETE_FAILED: &str = "Error al eliminar el tipo de entrada";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketTypeForm {
    /// `Some` cuando se edita un tipo existente
    pub editing: Option<i64>,
    pub tipo: String,
    pub descripcion: String,
    pub precio: String,
    pub stock: String,
    pub requiere_nominacion: bool,
}

impl TicketTypeForm {
    pub fn from_ticket_type(ticket_type: &TicketType) -> Self {
        Self {
            editing: Some(ticket_type.id_tipo_entrada),
            tipo: ticket_type.tipo.clone(),
            descripcion: ticket_type.descripcion.clone().unwrap_or_default(),
            precio: format!("{:.2}", ticket_type.precio),
            stock: ticket_type.stock.to_string(),
            requiere_nominacion: ticket_type.requiere_nominacion,
        }
    }

    /// El id de festival solo viaja al crear
    pub fn to_payload(&self, id_festival: i64) -> Result<TicketTypePayload, ValidationError> {
        let tipo = self.tipo.trim();
        let precio = self.precio.trim().replace(',', ".");
        let stock = self.stock.trim();
        if tipo.is_empty() || precio.is_empty() || stock.is_empty() {
            return Err(ValidationError::TicketTypeIncomplete);
        }

        let precio: f64 = match precio.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => value,
            _ => return Err(ValidationError::InvalidPrice),
        };
        let stock: u32 = stock.parse().map_err(|_| ValidationError::InvalidStock)?;

        Ok(TicketTypePayload {
            tipo: tipo.to_string(),
            descripcion: self.descripcion.trim().to_string(),
            precio: format!("{:.2}", precio),
            stock,
            requiere_nominacion: self.requiere_nominacion,
            id_festival: match self.editing {
                Some(_) => None,
                None => Some(id_festival),
            },
        })
    }
}

pub fn delete_confirmation(ticket_type: &TicketType) -> String {
    format!(
        "¿Estás seguro de que quieres eliminar el tipo de entrada \"{}\"?",
        ticket_type.tipo
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(tipo: &str, precio: &str, stock: &str) -> TicketTypeForm {
        TicketTypeForm {
            tipo: tipo.into(),
            precio: precio.into(),
            stock: stock.into(),
            ..TicketTypeForm::default()
        }
    }

    #[test]
    fn new_type_carries_festival_and_fixed_price() {
        let payload = form(" VIP ", "45,5", "100").to_payload(7).unwrap();
        assert_eq!(payload.tipo, "VIP");
        assert_eq!(payload.precio, "45.50");
        assert_eq!(payload.stock, 100);
        assert_eq!(payload.id_festival, Some(7));
    }

    #[test]
    fn edited_type_omits_festival() {
        let mut edit = form("General", "0", "0");
        edit.editing = Some(3);
        let body = serde_json::to_value(edit.to_payload(7).unwrap()).unwrap();
        assert!(body.get("idFestival").is_none());
        assert_eq!(body["precio"], "0.00");
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(form("", "10", "5").to_payload(1), Err(ValidationError::TicketTypeIncomplete));
        assert_eq!(form("VIP", "-1", "5").to_payload(1), Err(ValidationError::InvalidPrice));
        assert_eq!(form("VIP", "abc", "5").to_payload(1), Err(ValidationError::InvalidPrice));
        assert_eq!(form("VIP", "10", "-2").to_payload(1), Err(ValidationError::InvalidStock));
        assert_eq!(form("VIP", "10", "2.5").to_payload(1), Err(ValidationError::InvalidStock));
    }

    #[test]
    fn editing_prefills_from_backend_row() {
        let ticket_type = TicketType {
            id_tipo_entrada: 3,
            tipo: "VIP".into(),
            descripcion: None,
            precio: 45.5,
            stock: 10,
            requiere_nominacion: true,
        };
        let prefilled = TicketTypeForm::from_ticket_type(&ticket_type);
        assert_eq!(prefilled.editing, Some(3));
        assert_eq!(prefilled.precio, "45.50");
        assert!(delete_confirmation(&ticket_type).contains("\"VIP\""));
    }
}
