// ============================================================================
// ADMIN VIEWMODEL - Festivales de la plataforma y usuarios internos
// ============================================================================

use crate::models::{Festival, FestivalStatus, Identity, User};

pub const FESTIVALS_LOAD_FAILED: &str = "Error al cargar los festivales";
pub const FESTIVAL_STATUS_FAILED: &str = "Error al cambiar el estado del festival";
pub const USERS_LOAD_FAILED: &str = "Error al cargar los usuarios";
pub const USER_STATUS_FAILED: &str = "Error al cambiar el estado del usuario";
pub const OWN_ACCOUNT_BLOCKED: &str = "No puedes cambiar tu propio estado de administrador.";

/// Opciones del filtro del listado (`None` = todos)
pub const FESTIVAL_FILTERS: [Option<FestivalStatus>; 5] = [
    None,
    Some(FestivalStatus::Borrador),
    Some(FestivalStatus::Publicado),
    Some(FestivalStatus::Cancelado),
    Some(FestivalStatus::Finalizado),
];

pub fn filter_value(filter: Option<FestivalStatus>) -> &'static str {
    filter.map(|status| status.as_str()).unwrap_or("TODOS")
}

pub fn parse_filter(raw: &str) -> Option<FestivalStatus> {
    match FestivalStatus::parse(raw) {
        FestivalStatus::Desconocido => None,
        status => Some(status),
    }
}

/// Cambio de estado que un admin puede aplicar a un festival
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FestivalTransition {
    Publish,
    Cancel,
    Finish,
}

impl FestivalTransition {
    /// BORRADOR: publicar o cancelar. PUBLICADO: cancelar o finalizar.
    pub fn available(status: FestivalStatus) -> Vec<FestivalTransition> {
        match status {
            FestivalStatus::Borrador => vec![FestivalTransition::Publish, FestivalTransition::Cancel],
            FestivalStatus::Publicado => vec![FestivalTransition::Cancel, FestivalTransition::Finish],
            _ => Vec::new(),
        }
    }

    pub fn target(&self) -> FestivalStatus {
        match self {
            FestivalTransition::Publish => FestivalStatus::Publicado,
            FestivalTransition::Cancel => FestivalStatus::Cancelado,
            FestivalTransition::Finish => FestivalStatus::Finalizado,
        }
    }

    pub fn button_label(&self) -> String {
        match self {
            FestivalTransition::Publish => "Publicar".to_string(),
            other => format!("Cambiar a {}", other.target().as_str()),
        }
    }

    pub fn confirmation(&self, festival: &Festival) -> String {
        match self {
            FestivalTransition::Publish => format!(
                "¿Estás seguro de que quieres PUBLICAR el festival \"{}\"?",
                festival.nombre
            ),
            other => format!(
                "¿Estás seguro de que quieres cambiar el estado de \"{}\" a {}?",
                festival.nombre,
                other.target().as_str()
            ),
        }
    }

    pub fn success(&self, festival: &Festival) -> String {
        match self {
            FestivalTransition::Publish => format!("Festival \"{}\" publicado con éxito!", festival.nombre),
            other => format!(
                "Estado de \"{}\" cambiado a {} con éxito!",
                festival.nombre,
                other.target().as_str()
            ),
        }
    }
}

/// Pestañas de la gestión de usuarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTab {
    Promotores,
    Administradores,
    Cajeros,
}

impl UserTab {
    pub const ALL: [UserTab; 3] = [UserTab::Promotores, UserTab::Administradores, UserTab::Cajeros];

    pub fn label(&self) -> &'static str {
        match self {
            UserTab::Promotores => "Promotores",
            UserTab::Administradores => "Administradores",
            UserTab::Cajeros => "Cajeros",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            UserTab::Promotores => "/admin/promotores",
            UserTab::Administradores => "/admin/admins",
            UserTab::Cajeros => "/admin/cajeros",
        }
    }
}

pub fn is_own_account(identity: Option<&Identity>, user: &User) -> bool {
    identity.is_some_and(|identity| identity.subject_id == user.id_usuario.to_string())
}

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Activo"
    } else {
        "Inactivo"
    }
}

/// Confirmación del interruptor activo/inactivo, o el motivo del bloqueo
pub fn toggle_confirmation(identity: Option<&Identity>, user: &User) -> Result<String, &'static str> {
    if is_own_account(identity, user) {
        return Err(OWN_ACCOUNT_BLOCKED);
    }
    let verb = if user.estado { "desactivar" } else { "activar" };
    Ok(format!("¿Estás seguro de que quieres {} a \"{}\"?", verb, user.nombre))
}

pub fn toggle_success(user: &User) -> String {
    format!("Estado de \"{}\" cambiado con éxito!", user.nombre)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn festival(estado: &str) -> Festival {
        Festival {
            id_festival: 1,
            nombre: "Sonar".into(),
            descripcion: None,
            fecha_inicio: "2025-06-12".into(),
            fecha_fin: "2025-06-14".into(),
            ubicacion: None,
            aforo: None,
            imagen_url: None,
            estado: Some(estado.into()),
        }
    }

    fn user(id: i64, estado: bool) -> User {
        User {
            id_usuario: id,
            nombre: "Marta".into(),
            email: "marta@example.com".into(),
            rol: Some("PROMOTOR".into()),
            estado,
            cambio_password_requerido: false,
        }
    }

    fn admin(subject_id: &str) -> Identity {
        Identity {
            subject_id: subject_id.into(),
            role: Role::Admin,
            display_name: "Admin".into(),
            must_change_password: false,
            expires_at: None,
        }
    }

    #[test]
    fn transitions_depend_on_status() {
        assert_eq!(
            FestivalTransition::available(FestivalStatus::Borrador),
            vec![FestivalTransition::Publish, FestivalTransition::Cancel]
        );
        assert_eq!(
            FestivalTransition::available(FestivalStatus::Publicado),
            vec![FestivalTransition::Cancel, FestivalTransition::Finish]
        );
        assert!(FestivalTransition::available(FestivalStatus::Cancelado).is_empty());
        assert!(FestivalTransition::available(FestivalStatus::Finalizado).is_empty());
    }

    #[test]
    fn transition_texts() {
        let draft = festival("BORRADOR");
        assert_eq!(FestivalTransition::Publish.button_label(), "Publicar");
        assert_eq!(FestivalTransition::Finish.button_label(), "Cambiar a FINALIZADO");
        assert_eq!(
            FestivalTransition::Publish.confirmation(&draft),
            "¿Estás seguro de que quieres PUBLICAR el festival \"Sonar\"?"
        );
        assert_eq!(
            FestivalTransition::Cancel.success(&draft),
            "Estado de \"Sonar\" cambiado a CANCELADO con éxito!"
        );
    }

    #[test]
    fn filter_round_trips_through_select_value() {
        for filter in FESTIVAL_FILTERS {
            assert_eq!(parse_filter(filter_value(filter)), filter);
        }
    }

    #[test]
    fn user_tabs_have_their_endpoints() {
        let endpoints: Vec<_> = UserTab::ALL.iter().map(UserTab::endpoint).collect();
        assert_eq!(endpoints, vec!["/admin/promotores", "/admin/admins", "/admin/cajeros"]);
    }

    #[test]
    fn own_account_cannot_be_toggled() {
        let me = admin("5");
        assert_eq!(toggle_confirmation(Some(&me), &user(5, true)), Err(OWN_ACCOUNT_BLOCKED));
        assert_eq!(
            toggle_confirmation(Some(&me), &user(6, true)).as_deref(),
            Ok("¿Estás seguro de que quieres desactivar a \"Marta\"?")
        );
        assert_eq!(
            toggle_confirmation(Some(&me), &user(6, false)).as_deref(),
            Ok("¿Estás seguro de que quieres activar a \"Marta\"?")
        );
    }
}
