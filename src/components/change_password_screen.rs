// ============================================================================
// CHANGE PASSWORD SCREEN - Cambio obligatorio tras el primer login
// ============================================================================
// Tras cambiarla se muestra la confirmación y, pasado el retardo
// configurado, se cierra la sesión para entrar con la nueva.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::config::CONFIG;
use crate::hooks::session_context::use_session;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_mounted::use_mounted;
use crate::hooks::use_route::navigate;
use crate::services::auth_service;
use crate::state::routes::Route;
use crate::utils::scheduler::TimeoutScheduler;
use crate::viewmodels::password_viewmodel::{
    validate_password_change, PASSWORD_CHANGED, PASSWORD_CHANGE_FAILED,
};

#[function_component(ChangePasswordScreen)]
pub fn change_password_screen() -> Html {
    let session = use_session();
    let flash = use_flash();
    let mounted = use_mounted();
    let loading = use_state(|| false);
    let done = use_state(|| false);

    let new_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let display_name = session
        .identity()
        .map(|identity| identity.display_name.clone())
        .unwrap_or_default();

    let on_submit = {
        let new_ref = new_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let session = session.clone();
        let show_error = flash.show.clone();
        let loading = loading.clone();
        let done = done.clone();
        let mounted = mounted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(new_input), Some(confirm_input)) = (
                new_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let new_password = new_input.value();
            let confirm_password = confirm_input.value();

            if let Err(e) = validate_password_change(&new_password, &confirm_password) {
                show_error.emit(e.to_string());
                return;
            }
            let Some(token) = session.credential().map(str::to_string) else {
                navigate(&Route::Login);
                return;
            };

            let session = session.clone();
            let show_error = show_error.clone();
            let loading = loading.clone();
            let done = done.clone();
            let mounted = mounted.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    auth_service::change_password_forced(&token, &new_password, &confirm_password).await;
                if !mounted.is_mounted() {
                    return;
                }
                loading.set(false);

                match result {
                    Ok(()) => {
                        log::info!("✅ [AUTH] Contraseña cambiada, cerrando sesión en {} ms", CONFIG.password_change_logout_delay_ms);
                        done.set(true);
                        session.logout_after(
                            &TimeoutScheduler,
                            CONFIG.password_change_logout_delay_ms,
                            Box::new(|| navigate(&Route::Login)),
                        );
                    }
                    Err(e) => show_error.emit(session.report_api_error(&e, PASSWORD_CHANGE_FAILED)),
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Cambio de contraseña obligatorio"}</h1>
                    <p>{format!("Hola, {}. Debes establecer una nueva contraseña para continuar.", display_name)}</p>
                </div>

                <Alert message={flash.message.clone()} />
                if *done {
                    <Alert message={Some(PASSWORD_CHANGED.to_string())} kind={AlertKind::Success} />
                } else {
                    <form class="login-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="new-password">{"Nueva contraseña"}</label>
                            <input type="password" id="new-password" ref={new_ref} required=true />
                        </div>
                        <div class="form-group">
                            <label for="confirm-password">{"Confirmar contraseña"}</label>
                            <input type="password" id="confirm-password" ref={confirm_ref} required=true />
                        </div>
                        <button type="submit" class="btn-login" disabled={*loading}>
                            {if *loading { "Guardando..." } else { "Cambiar contraseña" }}
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
