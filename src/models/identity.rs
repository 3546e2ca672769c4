use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rol del usuario tal y como lo emite el backend en el claim `role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Promotor,
    Cajero,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Promotor => "PROMOTOR",
            Role::Cajero => "CAJERO",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload del JWT. Solo los claims que la consola necesita.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub sub: String,
    pub role: Role,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pwd_change_required: Option<bool>,
    #[serde(default)]
    pub exp: Option<f64>,
}

/// Identidad derivada del token. Nunca se persiste por separado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: String,
    pub role: Role,
    pub display_name: String,
    pub must_change_password: bool,
    /// Solo informativo: la consola no expira sesiones por su cuenta
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        let display_name = claims
            .user_name
            .filter(|name| !name.is_empty())
            .or(claims.name.filter(|name| !name.is_empty()))
            .unwrap_or_else(|| claims.sub.clone());
        Self {
            subject_id: claims.sub,
            role: claims.role,
            display_name,
            must_change_password: claims.pwd_change_required.unwrap_or(false),
            expires_at: claims
                .exp
                .and_then(|secs| DateTime::from_timestamp(secs.trunc() as i64, 0)),
        }
    }
}
