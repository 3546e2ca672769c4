// ============================================================================
// PUBLIC NOMINATION - Nominar una entrada por su código QR (sin login)
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::hooks::use_mounted::use_mounted;
use crate::models::{NominationRequest, PublicTicket};
use crate::services::nomination_service;
use crate::viewmodels::nomination_viewmodel::{
    blocking_reason, validate_nomination, NOMINATION_FAILED, TICKET_NOT_FOUND,
};

#[derive(Properties, PartialEq)]
pub struct PublicNominationProps {
    pub codigo_qr: String,
}

fn on_field(
    form: &UseStateHandle<NominationRequest>,
    apply: fn(&mut NominationRequest, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(PublicNomination)]
pub fn public_nomination(props: &PublicNominationProps) -> Html {
    let ticket = use_state(|| None::<PublicTicket>);
    let loading = use_state(|| true);
    let submitting = use_state(|| false);
    let nominated = use_state(|| None::<String>);
    let form = use_state(NominationRequest::default);
    let flash = use_flash();
    let mounted = use_mounted();
    let latest = use_latest_request();

    // Cargar la entrada al montar y cada vez que cambia el código
    {
        let ticket = ticket.clone();
        let loading = loading.clone();
        let nominated = nominated.clone();
        let form = form.clone();
        let show_error = flash.show.clone();
        use_effect_with(props.codigo_qr.clone(), move |codigo_qr| {
            let codigo_qr = codigo_qr.clone();
            ticket.set(None);
            nominated.set(None);
            form.set(NominationRequest::default());
            loading.set(true);
            let request = latest.begin();
            wasm_bindgen_futures::spawn_local(async move {
                let result = nomination_service::fetch_public_ticket(&codigo_qr).await;
                if !request.is_current() {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        log::info!("🎫 [NOMINATION] Entrada {} en estado {}", loaded.codigo_qr, loaded.estado);
                        ticket.set(Some(loaded));
                    }
                    Err(e) => {
                        log::error!("❌ [NOMINATION] Error cargando entrada {}: {}", codigo_qr, e);
                        show_error.emit(e.user_message(TICKET_NOT_FOUND));
                        ticket.set(None);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_submit = {
        let ticket = ticket.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let nominated = nominated.clone();
        let show_error = flash.show.clone();
        let mounted = mounted.clone();
        let codigo_qr = props.codigo_qr.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(current) = (*ticket).clone() else {
                return;
            };
            let request = match validate_nomination(&current, &form) {
                Ok(request) => request,
                Err(e) => {
                    show_error.emit(e.to_string());
                    return;
                }
            };

            let ticket = ticket.clone();
            let submitting = submitting.clone();
            let nominated = nominated.clone();
            let show_error = show_error.clone();
            let mounted = mounted.clone();
            let codigo_qr = codigo_qr.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let result = nomination_service::nominate_ticket(&codigo_qr, &request).await;
                if !mounted.is_mounted() {
                    return;
                }
                submitting.set(false);
                match result {
                    Ok(updated) => {
                        let name = updated
                            .nombre_asistente
                            .clone()
                            .unwrap_or_else(|| request.nombre_asistente.clone());
                        log::info!("✅ [NOMINATION] Entrada {} nominada", codigo_qr);
                        nominated.set(Some(name));
                        ticket.set(Some(updated));
                    }
                    Err(e) => show_error.emit(e.user_message(NOMINATION_FAILED)),
                }
            });
        })
    };

    let body = if *loading {
        html! { <p class="loading">{"Cargando entrada..."}</p> }
    } else if let Some(name) = (*nominated).clone() {
        html! {
            <Alert
                message={Some(format!("Entrada nominada correctamente a nombre de {}", name))}
                kind={AlertKind::Success}
            />
        }
    } else if let Some(current) = (*ticket).clone() {
        let festival = current.nombre_festival.clone().unwrap_or_default();
        let header = html! {
            <div class="ticket-info">
                <h2>{festival}</h2>
                <p>{format!("Código: {}", current.codigo_qr)}</p>
                <p>{format!("Estado: {}", current.estado)}</p>
            </div>
        };

        match blocking_reason(&current) {
            Some(reason) => html! {
                <>
                    {header}
                    <Alert message={Some(reason)} />
                </>
            },
            None => html! {
                <>
                    {header}
                    <form class="nomination-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="email">{"Email del asistente"}</label>
                            <input type="email" id="email" value={form.email_asistente.clone()}
                                oninput={on_field(&form, |f, v| f.email_asistente = v)} />
                        </div>
                        <div class="form-group">
                            <label for="confirm-email">{"Confirmar email"}</label>
                            <input type="email" id="confirm-email" value={form.confirm_email_nominado.clone()}
                                oninput={on_field(&form, |f, v| f.confirm_email_nominado = v)} />
                        </div>
                        <div class="form-group">
                            <label for="name">{"Nombre completo"}</label>
                            <input type="text" id="name" value={form.nombre_asistente.clone()}
                                oninput={on_field(&form, |f, v| f.nombre_asistente = v)} />
                        </div>
                        <div class="form-group">
                            <label for="phone">{"Teléfono (opcional)"}</label>
                            <input type="tel" id="phone" value={form.telefono_asistente.clone()}
                                oninput={on_field(&form, |f, v| f.telefono_asistente = v)} />
                        </div>
                        <button type="submit" class="btn-primary" disabled={*submitting}>
                            {if *submitting { "Nominando..." } else { "Nominar entrada" }}
                        </button>
                    </form>
                </>
            },
        }
    } else {
        html! {}
    };

    html! {
        <div class="public-nomination">
            <h1>{"Nominación de entrada"}</h1>
            <Alert message={flash.message.clone()} />
            {body}
        </div>
    }
}
