// ============================================================================
// FESTIVAL FORM - Estado editable del formulario crear/editar festival
// ============================================================================

use crate::models::{Festival, FestivalPayload};
use crate::utils::format::parse_date;
use crate::viewmodels::validation::ValidationError;

pub const FESTIVAL_SAVE_FAILED: &str = "Error al guardar el festival";
pub const FESTIVAL_LOAD_FAILED: &str = "Error al cargar el festival";

/// Campos tal y como los teclea el usuario (todo texto)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FestivalForm {
    pub nombre: String,
    pub descripcion: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub ubicacion: String,
    pub aforo: String,
    pub imagen_url: String,
}

impl FestivalForm {
    /// Precarga para edición. Las fechas se recortan a `YYYY-MM-DD` para el input date.
    pub fn from_festival(festival: &Festival) -> Self {
        Self {
            nombre: festival.nombre.clone(),
            descripcion: festival.descripcion.clone().unwrap_or_default(),
            fecha_inicio: date_input_value(&festival.fecha_inicio),
            fecha_fin: date_input_value(&festival.fecha_fin),
            ubicacion: festival.ubicacion.clone().unwrap_or_default(),
            aforo: festival.aforo.map(|a| a.to_string()).unwrap_or_default(),
            imagen_url: festival.imagen_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<FestivalPayload, ValidationError> {
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err(ValidationError::Required("nombre"));
        }
        if self.fecha_inicio.trim().is_empty() {
            return Err(ValidationError::Required("fecha de inicio"));
        }
        if self.fecha_fin.trim().is_empty() {
            return Err(ValidationError::Required("fecha de fin"));
        }

        let inicio = parse_date(&self.fecha_inicio).ok_or(ValidationError::InvalidDate("fecha de inicio"))?;
        let fin = parse_date(&self.fecha_fin).ok_or(ValidationError::InvalidDate("fecha de fin"))?;
        if fin < inicio {
            return Err(ValidationError::EndBeforeStart);
        }

        let aforo = match self.aforo.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(value) if value > 0 => Some(value),
                _ => return Err(ValidationError::InvalidCapacity),
            },
        };

        Ok(FestivalPayload {
            nombre: nombre.to_string(),
            descripcion: self.descripcion.trim().to_string(),
            fecha_inicio: inicio.format("%Y-%m-%d").to_string(),
            fecha_fin: fin.format("%Y-%m-%d").to_string(),
            ubicacion: self.ubicacion.trim().to_string(),
            aforo,
            imagen_url: self.imagen_url.trim().to_string(),
        })
    }
}

fn date_input_value(raw: &str) -> String {
    raw.get(..10).unwrap_or(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FestivalForm {
        FestivalForm {
            nombre: " Sonar ".into(),
            fecha_inicio: "2025-06-12".into(),
            fecha_fin: "2025-06-14".into(),
            aforo: "5000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_builds_payload() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.nombre, "Sonar");
        assert_eq!(payload.aforo, Some(5000));
        assert_eq!(payload.fecha_fin, "2025-06-14");
    }

    #[test]
    fn required_fields() {
        let mut form = filled();
        form.nombre = "  ".into();
        assert_eq!(form.to_payload(), Err(ValidationError::Required("nombre")));

        let mut form = filled();
        form.fecha_fin.clear();
        assert_eq!(form.to_payload(), Err(ValidationError::Required("fecha de fin")));
    }

    #[test]
    fn end_may_equal_but_not_precede_start() {
        let mut form = filled();
        form.fecha_fin = "2025-06-12".into();
        assert!(form.to_payload().is_ok());

        form.fecha_fin = "2025-06-11".into();
        assert_eq!(form.to_payload(), Err(ValidationError::EndBeforeStart));
    }

    #[test]
    fn capacity_must_be_positive_integer_when_present() {
        for bad in ["0", "-5", "12.5", "mucho"] {
            let mut form = filled();
            form.aforo = bad.into();
            assert_eq!(form.to_payload(), Err(ValidationError::InvalidCapacity), "{}", bad);
        }
        let mut form = filled();
        form.aforo.clear();
        assert_eq!(form.to_payload().unwrap().aforo, None);
    }

    #[test]
    fn edit_prefills_from_festival() {
        let festival = Festival {
            id_festival: 3,
            nombre: "Sonar".into(),
            descripcion: None,
            fecha_inicio: "2025-06-12T00:00:00".into(),
            fecha_fin: "2025-06-14".into(),
            ubicacion: Some("Barcelona".into()),
            aforo: Some(100),
            imagen_url: None,
            estado: Some("BORRADOR".into()),
        };
        let form = FestivalForm::from_festival(&festival);
        assert_eq!(form.fecha_inicio, "2025-06-12");
        assert_eq!(form.aforo, "100");
        assert_eq!(form.ubicacion, "Barcelona");
        assert_eq!(form.descripcion, "");
    }
}
