use serde::{Deserialize, Serialize};

use crate::models::decimal;

/// Estado de una entrada vendida
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketStatus {
    Activa,
    Usada,
    Cancelada,
    Otro(String),
}

impl TicketStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ACTIVA" => TicketStatus::Activa,
            "USADA" => TicketStatus::Usada,
            "CANCELADA" => TicketStatus::Cancelada,
            other => TicketStatus::Otro(other.to_string()),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TicketStatus::Activa => "badge badge-active",
            TicketStatus::Usada => "badge badge-used",
            TicketStatus::Cancelada => "badge badge-cancelled",
            TicketStatus::Otro(_) => "badge",
        }
    }
}

/// Entrada de un festival vista por su promotor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalTicket {
    pub id_entrada: i64,
    pub codigo_qr: String,
    pub estado: String,
    #[serde(default)]
    pub tipo_entrada_original: Option<String>,
    #[serde(default)]
    pub id_compra_entrada: Option<i64>,
    #[serde(default)]
    pub nombre_asistente: Option<String>,
    #[serde(default)]
    pub email_asistente: Option<String>,
    #[serde(default)]
    pub codigo_uid_pulsera: Option<String>,
}

impl FestivalTicket {
    pub fn status(&self) -> TicketStatus {
        TicketStatus::parse(&self.estado)
    }

    pub fn is_nominated(&self) -> bool {
        self.nombre_asistente.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn has_bracelet(&self) -> bool {
        self.codigo_uid_pulsera.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Pulsera NFC (cashless) de un festival
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracelet {
    pub id_pulsera: i64,
    pub codigo_uid: String,
    #[serde(deserialize_with = "decimal::deserialize", default)]
    pub saldo: f64,
    #[serde(default)]
    pub qr_entrada: Option<String>,
    #[serde(default)]
    pub nombre_asistente: Option<String>,
    #[serde(default)]
    pub email_asistente: Option<String>,
    #[serde(default)]
    pub activa: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateBraceletRequest {
    pub codigo_uid: String,
}
