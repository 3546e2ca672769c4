// ============================================================================
// USE ROUTE - Hash routing sobre window.location
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::routes::Route;
use crate::utils::constants::PATH_LOGIN;

/// Path actual sin `#`. Vacío se trata como `/login`.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .filter(|path| !path.is_empty() && path != "/")
        .unwrap_or_else(|| PATH_LOGIN.to_string())
}

/// Navegación normal (deja entrada en el historial)
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.path()) {
            log::error!("❌ [ROUTER] No se pudo navegar a {}: {:?}", route.path(), e);
        }
    }
}

/// Redirección sin entrada en el historial (como `<Navigate replace />`)
pub fn replace(route: &Route) {
    if let Some(window) = web_sys::window() {
        let target = format!("#{}", route.path());
        if let Err(e) = window.location().replace(&target) {
            log::error!("❌ [ROUTER] No se pudo redirigir a {}: {:?}", route.path(), e);
        }
    }
}

/// Path actual, re-renderiza en cada `hashchange`
#[hook]
pub fn use_current_path() -> String {
    let path = use_state(current_path);

    {
        let setter = path.setter();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                setter.set(current_path());
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(win) = &window {
                if let Err(e) = win.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref()) {
                    log::error!("❌ [ROUTER] No se pudo escuchar hashchange: {:?}", e);
                }
            }

            // El closure vive hasta el cleanup; entonces se desregistra
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
                }
                drop(listener);
            }
        });
    }

    (*path).clone()
}
