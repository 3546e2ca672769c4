use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub message_dismiss_ms: u32,
    pub password_change_logout_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            message_dismiss_ms: 5000,
            password_change_logout_delay_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            message_dismiss_ms: option_env!("MESSAGE_DISMISS_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.message_dismiss_ms),
            password_change_logout_delay_ms: option_env!("PASSWORD_CHANGE_LOGOUT_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.password_change_logout_delay_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm-logger. En producción solo avisos y errores.
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging && !self.is_production() {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_flag_selects_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);

        config.enable_logging = true;
        config.environment = "production".to_string();
        assert!(config.is_production());
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
