// ============================================================================
// BEATPASS CONSOLE - FRONTEND DE GESTIÓN DE FESTIVALES (RUST + YEW)
// ============================================================================
// - Services: credenciales, decodificación del token y llamadas al API
// - State: sesión reactiva, tabla de rutas y guard
// - Hooks: puente entre el estado y los componentes Yew
// - ViewModels: validación y mensajes de cada formulario
// - Components: pantallas
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod hooks;
pub mod viewmodels;
pub mod components;
pub mod utils;

#[cfg(test)]
#[path = "../build_support/dotenv.rs"]
mod build_dotenv;

use crate::config::CONFIG;

/// Panic hook + logger. Llamar una vez antes de renderizar.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
}
