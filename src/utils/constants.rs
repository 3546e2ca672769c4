/// Slot de localStorage donde vive el token JWT
pub const STORAGE_KEY_TOKEN: &str = "jwtToken";

pub const PATH_LOGIN: &str = "/login";
pub const PATH_FORCED_PASSWORD_CHANGE: &str = "/cambiar-password-obligatorio";
pub const PATH_DASHBOARD: &str = "/dashboard";
pub const PATH_ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const PATH_PROMOTER_DASHBOARD: &str = "/promotor/dashboard";

/// Longitud mínima de contraseña aceptada en el cambio obligatorio
pub const MIN_PASSWORD_LEN: usize = 8;
