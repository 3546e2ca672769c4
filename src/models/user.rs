use serde::{Deserialize, Serialize};

/// Usuario interno (admin, promotor o cajero)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id_usuario: i64,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(default)]
    pub estado: bool,
    #[serde(default)]
    pub cambio_password_requerido: bool,
}

/// `PUT .../estado`. El backend espera el booleano como texto.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    pub nuevo_estado: String,
}

impl StatusChangeRequest {
    pub fn active(active: bool) -> Self {
        Self { nuevo_estado: active.to_string() }
    }

    pub fn festival(status: &str) -> Self {
        Self { nuevo_estado: status.to_string() }
    }
}
