use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Festival {
    pub id_festival: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(default)]
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub aforo: Option<u32>,
    #[serde(default)]
    pub imagen_url: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

impl Festival {
    pub fn status(&self) -> FestivalStatus {
        FestivalStatus::parse(self.estado.as_deref().unwrap_or(""))
    }
}

/// Estado de publicación de un festival
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FestivalStatus {
    Publicado,
    Borrador,
    Cancelado,
    Finalizado,
    Desconocido,
}

impl FestivalStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PUBLICADO" => FestivalStatus::Publicado,
            "BORRADOR" => FestivalStatus::Borrador,
            "CANCELADO" => FestivalStatus::Cancelado,
            "FINALIZADO" => FestivalStatus::Finalizado,
            _ => FestivalStatus::Desconocido,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FestivalStatus::Publicado => "PUBLICADO",
            FestivalStatus::Borrador => "BORRADOR",
            FestivalStatus::Cancelado => "CANCELADO",
            FestivalStatus::Finalizado => "FINALIZADO",
            FestivalStatus::Desconocido => "",
        }
    }

    /// Clase CSS del badge de estado
    pub fn badge_class(&self) -> &'static str {
        match self {
            FestivalStatus::Publicado => "badge badge-published",
            FestivalStatus::Borrador => "badge badge-draft",
            FestivalStatus::Cancelado => "badge badge-cancelled",
            FestivalStatus::Finalizado => "badge badge-finished",
            FestivalStatus::Desconocido => "badge",
        }
    }
}

/// Cuerpo de POST/PUT de festival
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalPayload {
    pub nombre: String,
    pub descripcion: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub ubicacion: String,
    pub aforo: Option<u32>,
    pub imagen_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn festival_parses_backend_json() {
        let festival: Festival = serde_json::from_str(
            r#"{"idFestival":7,"nombre":"Sonar","fechaInicio":"2025-06-12","fechaFin":"2025-06-14","estado":"PUBLICADO","aforo":5000}"#,
        )
        .unwrap();
        assert_eq!(festival.id_festival, 7);
        assert_eq!(festival.aforo, Some(5000));
        assert_eq!(festival.ubicacion, None);
        assert_eq!(festival.status(), FestivalStatus::Publicado);
    }

    #[test]
    fn unknown_status_gets_neutral_badge() {
        assert_eq!(FestivalStatus::parse("ARCHIVADO"), FestivalStatus::Desconocido);
        assert_eq!(FestivalStatus::Desconocido.badge_class(), "badge");
        assert_eq!(FestivalStatus::Cancelado.badge_class(), "badge badge-cancelled");
    }
}
