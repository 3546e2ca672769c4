// ============================================================================
// USE FLASH - Mensajes en línea que se auto-ocultan
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, PartialEq)]
pub struct UseFlashHandle {
    pub message: Option<String>,
    pub show: Callback<String>,
    pub clear: Callback<()>,
}

/// Un mensaje que desaparece tras `MESSAGE_DISMISS_MS`. Mostrar uno nuevo
/// cancela el temporizador del anterior.
#[hook]
pub fn use_flash() -> UseFlashHandle {
    let message = use_state(|| None::<String>);
    let timeout = use_mut_ref(|| None::<Timeout>);

    let show = {
        let setter = message.setter();
        let timeout = timeout.clone();
        Callback::from(move |text: String| {
            setter.set(Some(text));
            let setter = setter.clone();
            let pending = Timeout::new(CONFIG.message_dismiss_ms, move || setter.set(None));
            // Soltar el Timeout anterior lo cancela
            *timeout.borrow_mut() = Some(pending);
        })
    };

    let clear = {
        let setter = message.setter();
        let timeout = timeout.clone();
        Callback::from(move |_| {
            timeout.borrow_mut().take();
            setter.set(None);
        })
    };

    UseFlashHandle {
        message: (*message).clone(),
        show,
        clear,
    }
}
