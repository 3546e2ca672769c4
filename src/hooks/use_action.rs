// ============================================================================
// USE ACTION - Acciones de gestión contra el API (cancelar, publicar...)
// ============================================================================
// Pone el token de la sesión, marca `busy`, muestra el resultado y avisa para
// recargar. Un 401 pasa por `report_api_error` y cierra la sesión.
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::hooks::session_context::{use_session, SessionHandle};
use crate::hooks::use_mounted::{use_mounted, MountedFlag};
use crate::hooks::use_route::navigate;
use crate::services::api_client::ApiError;
use crate::state::routes::Route;

#[derive(Clone)]
pub struct ActionRunner {
    session: SessionHandle,
    busy: UseStateHandle<bool>,
    mounted: MountedFlag,
    on_error: Callback<String>,
    on_success: Callback<String>,
    on_done: Callback<()>,
}

impl ActionRunner {
    pub fn is_busy(&self) -> bool {
        *self.busy
    }

    /// `action` recibe el token. Si va bien se muestra `success` y se
    /// emite `on_done`; si no, el mensaje del backend o `fallback`.
    pub fn run<F, Fut>(&self, fallback: &'static str, success: String, action: F)
    where
        F: FnOnce(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let Some(token) = self.session.credential().map(str::to_string) else {
            navigate(&Route::Login);
            return;
        };

        let runner = self.clone();
        runner.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = action(token).await;
            if !runner.mounted.is_mounted() {
                return;
            }
            runner.busy.set(false);
            match result {
                Ok(()) => {
                    log::info!("✅ [ACTION] {}", success);
                    runner.on_success.emit(success);
                    runner.on_done.emit(());
                }
                Err(e) => {
                    log::error!("❌ [ACTION] {}: {}", fallback, e);
                    runner.on_error.emit(runner.session.report_api_error(&e, fallback));
                }
            }
        });
    }
}

#[hook]
pub fn use_action(
    on_error: Callback<String>,
    on_success: Callback<String>,
    on_done: Callback<()>,
) -> ActionRunner {
    let session = use_session();
    let busy = use_state(|| false);
    let mounted = use_mounted();

    ActionRunner {
        session,
        busy,
        mounted,
        on_error,
        on_success,
        on_done,
    }
}
