use serde::Deserialize;

use crate::models::decimal;

/// Fila del informe de compras
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id_compra: i64,
    #[serde(default)]
    pub nombre_comprador: Option<String>,
    #[serde(default)]
    pub email_comprador: Option<String>,
    #[serde(deserialize_with = "decimal::deserialize", default)]
    pub total: f64,
    #[serde(default)]
    pub resumen_entradas: Vec<String>,
    #[serde(default)]
    pub fecha_compra: Option<String>,
}

/// Fila del informe de asistentes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id_asistente: i64,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
}
