// ============================================================================
// LOGIN SCREEN - Email + contraseña contra /auth/login
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::alert::Alert;
use crate::hooks::session_context::use_session;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_mounted::use_mounted;
use crate::hooks::use_route::navigate;
use crate::services::auth_service;
use crate::viewmodels::login_viewmodel::{
    login_error_message, route_after_login, validate_login, INVALID_TOKEN,
};

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session();
    let flash = use_flash();
    let mounted = use_mounted();
    let loading = use_state(|| false);

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let session = session.clone();
        let show_error = flash.show.clone();
        let loading = loading.clone();
        let mounted = mounted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();

            if let Err(e) = validate_login(&email, &password) {
                show_error.emit(e.to_string());
                return;
            }

            let session = session.clone();
            let show_error = show_error.clone();
            let loading = loading.clone();
            let mounted = mounted.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let result = auth_service::perform_login(&email, &password).await;
                if !mounted.is_mounted() {
                    return;
                }
                loading.set(false);

                match result {
                    Ok(response) => match session.login(&response.token) {
                        Ok(_) => navigate(&route_after_login(&response)),
                        Err(_) => show_error.emit(INVALID_TOKEN.to_string()),
                    },
                    Err(e) => {
                        log::warn!("⚠️ [AUTH] Login fallido: {}", e);
                        show_error.emit(login_error_message(&e));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"🎟️"}</div>
                    <h1>{"BeatPass"}</h1>
                    <p>{"Panel de administración de festivales"}</p>
                </div>

                <Alert message={flash.message.clone()} />

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="tu@email.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={*loading}>
                        {if *loading { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
