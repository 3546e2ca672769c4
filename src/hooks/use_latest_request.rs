// ============================================================================
// USE LATEST REQUEST - Solo aplica la respuesta de la última carga
// ============================================================================
// Yew reutiliza el componente cuando cambia la ruta pero no el tipo de
// pantalla (`/festivales/1` -> `/festivales/2`). Cada carga pide un ticket;
// empezar otra o desmontar invalida los anteriores.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Default)]
pub struct LatestRequest {
    generation: Rc<Cell<u64>>,
}

impl LatestRequest {
    /// Nueva carga: invalida cualquier ticket anterior
    pub fn begin(&self) -> RequestTicket {
        self.invalidate();
        RequestTicket {
            issued: self.generation.get(),
            generation: self.generation.clone(),
        }
    }

    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// Se comprueba después de cada `await`
pub struct RequestTicket {
    issued: u64,
    generation: Rc<Cell<u64>>,
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

#[hook]
pub fn use_latest_request() -> LatestRequest {
    let latest = (*use_memo((), |_| LatestRequest::default())).clone();

    {
        let latest = latest.clone();
        use_effect_with((), move |_| move || latest.invalidate());
    }

    latest
}
