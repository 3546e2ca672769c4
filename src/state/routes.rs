// ============================================================================
// ROUTES - Tabla de rutas navegables (hash routing: `#/admin/usuarios`)
// ============================================================================

use crate::models::identity::Role;
use crate::utils::constants::{
    PATH_ADMIN_DASHBOARD, PATH_DASHBOARD, PATH_FORCED_PASSWORD_CHANGE, PATH_LOGIN,
    PATH_PROMOTER_DASHBOARD,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    ForcedPasswordChange,
    PublicNomination { codigo_qr: String },
    /// Redirige al panel del rol
    Dashboard,

    PromoterDashboard,
    FestivalCreate,
    FestivalDetails { id_festival: i64 },
    FestivalEdit { id_festival: i64 },
    FestivalTicketTypes { id_festival: i64 },
    FestivalTicketReport { id_festival: i64 },

    AdminDashboard,
    AdminUsers,
    AdminFestivals,
    AdminClients,
    AdminReports,

    NotFound,
}

/// Quién puede ver una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

impl Route {
    /// Reconoce un path (con o sin `#`, query o `/` final)
    pub fn recognize(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["cambiar-password-obligatorio"] => Route::ForcedPasswordChange,
            ["public", "nominar-entrada", codigo] => Route::PublicNomination {
                codigo_qr: (*codigo).to_string(),
            },
            ["dashboard"] => Route::Dashboard,

            ["promotor", "dashboard"] => Route::PromoterDashboard,
            ["promotor", "festivales", "crear"] => Route::FestivalCreate,
            ["promotor", "festivales", id] => Self::with_id(id, |id_festival| Route::FestivalDetails { id_festival }),
            ["promotor", "festivales", id, "editar"] => Self::with_id(id, |id_festival| Route::FestivalEdit { id_festival }),
            ["promotor", "festivales", id, "tipos-entrada"] => {
                Self::with_id(id, |id_festival| Route::FestivalTicketTypes { id_festival })
            }
            ["promotor", "festivales", id, "reporte-entradas"] => {
                Self::with_id(id, |id_festival| Route::FestivalTicketReport { id_festival })
            }

            ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "usuarios"] => Route::AdminUsers,
            ["admin", "festivales"] => Route::AdminFestivals,
            ["admin", "clientes"] => Route::AdminClients,
            ["admin", "reportes"] => Route::AdminReports,

            _ => Route::NotFound,
        }
    }

    fn with_id(raw: &str, build: impl FnOnce(i64) -> Route) -> Route {
        raw.parse().map(build).unwrap_or(Route::NotFound)
    }

    /// Path canónico (sin `#`)
    pub fn path(&self) -> String {
        match self {
            Route::Login => PATH_LOGIN.to_string(),
            Route::ForcedPasswordChange => PATH_FORCED_PASSWORD_CHANGE.to_string(),
            Route::PublicNomination { codigo_qr } => format!("/public/nominar-entrada/{}", codigo_qr),
            Route::Dashboard => PATH_DASHBOARD.to_string(),
            Route::PromoterDashboard => PATH_PROMOTER_DASHBOARD.to_string(),
            Route::FestivalCreate => "/promotor/festivales/crear".to_string(),
            Route::FestivalDetails { id_festival } => format!("/promotor/festivales/{}", id_festival),
            Route::FestivalEdit { id_festival } => format!("/promotor/festivales/{}/editar", id_festival),
            Route::FestivalTicketTypes { id_festival } => {
                format!("/promotor/festivales/{}/tipos-entrada", id_festival)
            }
            Route::FestivalTicketReport { id_festival } => {
                format!("/promotor/festivales/{}/reporte-entradas", id_festival)
            }
            Route::AdminDashboard => PATH_ADMIN_DASHBOARD.to_string(),
            Route::AdminUsers => "/admin/usuarios".to_string(),
            Route::AdminFestivals => "/admin/festivales".to_string(),
            Route::AdminClients => "/admin/clientes".to_string(),
            Route::AdminReports => "/admin/reportes".to_string(),
            Route::NotFound => PATH_LOGIN.to_string(),
        }
    }

    /// `None` para rutas desconocidas
    pub fn access(&self) -> Option<Access> {
        match self {
            Route::Login | Route::PublicNomination { .. } => Some(Access::Public),
            Route::ForcedPasswordChange | Route::Dashboard => Some(Access::Authenticated),
            Route::PromoterDashboard
            | Route::FestivalCreate
            | Route::FestivalDetails { .. }
            | Route::FestivalEdit { .. }
            | Route::FestivalTicketTypes { .. }
            | Route::FestivalTicketReport { .. } => Some(Access::Role(Role::Promotor)),
            Route::AdminDashboard
            | Route::AdminUsers
            | Route::AdminFestivals
            | Route::AdminClients
            | Route::AdminReports => Some(Access::Role(Role::Admin)),
            Route::NotFound => None,
        }
    }

    /// Destino de `/dashboard` según el rol
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Promotor => Route::PromoterDashboard,
            _ => Route::AdminDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_declared_path() {
        let table = [
            Route::Login,
            Route::ForcedPasswordChange,
            Route::PublicNomination { codigo_qr: "XYZ123".into() },
            Route::Dashboard,
            Route::PromoterDashboard,
            Route::FestivalCreate,
            Route::FestivalDetails { id_festival: 4 },
            Route::FestivalEdit { id_festival: 4 },
            Route::FestivalTicketTypes { id_festival: 4 },
            Route::FestivalTicketReport { id_festival: 4 },
            Route::AdminDashboard,
            Route::AdminUsers,
            Route::AdminFestivals,
            Route::AdminClients,
            Route::AdminReports,
        ];
        for route in table {
            assert_eq!(Route::recognize(&route.path()), route);
        }
    }

    #[test]
    fn tolerates_hash_query_and_trailing_slash() {
        assert_eq!(Route::recognize("#/admin/usuarios"), Route::AdminUsers);
        assert_eq!(Route::recognize("/admin/reportes?reportType=compras"), Route::AdminReports);
        assert_eq!(Route::recognize("/promotor/dashboard/"), Route::PromoterDashboard);
    }

    #[test]
    fn create_is_not_a_festival_id() {
        assert_eq!(Route::recognize("/promotor/festivales/crear"), Route::FestivalCreate);
        assert_eq!(
            Route::recognize("/promotor/festivales/12"),
            Route::FestivalDetails { id_festival: 12 }
        );
    }

    #[test]
    fn unmatched_paths_are_not_found() {
        for path in [
            "",
            "/",
            "/admin",
            "/admin/usuarios/3",
            "/promotor/festivales/abc",
            "/promotor/festivales/3/gestion-entradas",
            "/public/nominar-entrada",
        ] {
            assert_eq!(Route::recognize(path), Route::NotFound, "{}", path);
            assert_eq!(Route::recognize(path).access(), None);
        }
    }

    #[test]
    fn role_scoped_prefixes() {
        assert_eq!(Route::AdminClients.access(), Some(Access::Role(Role::Admin)));
        assert_eq!(Route::FestivalCreate.access(), Some(Access::Role(Role::Promotor)));
        assert_eq!(Route::Dashboard.access(), Some(Access::Authenticated));
        assert_eq!(Route::Login.access(), Some(Access::Public));
        assert_eq!(Route::ForcedPasswordChange.access(), Some(Access::Authenticated));
    }

    #[test]
    fn dashboard_home_per_role() {
        assert_eq!(Route::home_for(Role::Promotor), Route::PromoterDashboard);
        assert_eq!(Route::home_for(Role::Admin), Route::AdminDashboard);
        assert_eq!(Route::home_for(Role::Cajero), Route::AdminDashboard);
    }
}
