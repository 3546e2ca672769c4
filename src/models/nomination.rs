use serde::{Deserialize, Serialize};

/// Entrada tal y como la expone el endpoint público por código QR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTicket {
    pub codigo_qr: String,
    pub estado: String,
    #[serde(default)]
    pub nombre_festival: Option<String>,
    #[serde(default)]
    pub nombre_asistente: Option<String>,
    #[serde(default)]
    pub email_asistente: Option<String>,
}

/// Situación de la entrada respecto a la nominación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketState {
    Nominable,
    AlreadyNominated { name: String, email: Option<String> },
    NotActive(String),
}

impl PublicTicket {
    pub fn state(&self) -> TicketState {
        match self.nombre_asistente.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => TicketState::AlreadyNominated {
                name: name.to_string(),
                email: self.email_asistente.clone(),
            },
            None if self.estado != "ACTIVA" => TicketState::NotActive(self.estado.clone()),
            None => TicketState::Nominable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominationRequest {
    pub email_asistente: String,
    pub confirm_email_nominado: String,
    pub nombre_asistente: String,
    pub telefono_asistente: String,
}
