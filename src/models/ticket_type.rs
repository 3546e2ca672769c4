use serde::{Deserialize, Serialize};

use crate::models::decimal;

/// Tipo de entrada (General, VIP...) de un festival
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id_tipo_entrada: i64,
    pub tipo: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub precio: f64,
    pub stock: i64,
    #[serde(default)]
    pub requiere_nominacion: bool,
}

/// Cuerpo de POST/PUT de tipo de entrada. El precio viaja como texto con
/// dos decimales para que el backend lo lea como decimal exacto.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypePayload {
    pub tipo: String,
    pub descripcion: String,
    pub precio: String,
    pub stock: u32,
    pub requiere_nominacion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_festival: Option<i64>,
}
