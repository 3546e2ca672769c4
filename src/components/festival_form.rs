// ============================================================================
// FESTIVAL FORM VIEW - Crear (POST) o editar (PUT) un festival
// ============================================================================

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::header::AppHeader;
use crate::hooks::session_context::use_session;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::hooks::use_mounted::use_mounted;
use crate::hooks::use_route::navigate;
use crate::services::festival_service;
use crate::state::routes::Route;
use crate::viewmodels::festival_form::{FestivalForm, FESTIVAL_LOAD_FAILED, FESTIVAL_SAVE_FAILED};

#[derive(Properties, PartialEq)]
pub struct FestivalFormViewProps {
    /// `None` = crear
    #[prop_or_default]
    pub id_festival: Option<i64>,
}

fn on_input(form: &UseStateHandle<FestivalForm>, apply: fn(&mut FestivalForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(FestivalFormView)]
pub fn festival_form_view(props: &FestivalFormViewProps) -> Html {
    let session = use_session();
    let error = use_flash();
    let success = use_flash();
    let mounted = use_mounted();
    let latest = use_latest_request();
    let form = use_state(FestivalForm::default);
    let saving = use_state(|| false);
    let loading = use_state(|| props.id_festival.is_some());

    // Edición: precargar el festival. Crear -> editar, o editar 1 -> editar 2,
    // reutiliza el componente: el formulario se vacía en cada cambio.
    {
        let session = session.clone();
        let form = form.clone();
        let loading = loading.clone();
        let show_error = error.show.clone();
        let token = session.credential().map(str::to_string);
        use_effect_with((props.id_festival, token), move |(id_festival, token)| {
            form.set(FestivalForm::default());
            loading.set(id_festival.is_some());
            let request = latest.begin();

            if let (Some(id_festival), Some(token)) = (*id_festival, token.clone()) {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = festival_service::fetch_festival(&token, id_festival).await;
                    if !request.is_current() {
                        log::debug!("🎪 [FESTIVAL] Respuesta descartada del festival {}", id_festival);
                        return;
                    }
                    match result {
                        Ok(festival) => form.set(FestivalForm::from_festival(&festival)),
                        Err(e) => show_error.emit(session.report_api_error(&e, FESTIVAL_LOAD_FAILED)),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.descripcion = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let session = session.clone();
        let form = form.clone();
        let saving = saving.clone();
        let show_error = error.show.clone();
        let show_success = success.show.clone();
        let id_festival = props.id_festival;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match form.to_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    show_error.emit(e.to_string());
                    return;
                }
            };
            let Some(token) = session.credential().map(str::to_string) else {
                navigate(&Route::Login);
                return;
            };

            let session = session.clone();
            let saving = saving.clone();
            let show_error = show_error.clone();
            let show_success = show_success.clone();
            let mounted = mounted.clone();
            saving.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match id_festival {
                    Some(id) => festival_service::update_festival(&token, id, &payload).await,
                    None => festival_service::create_festival(&token, &payload).await,
                };
                if !mounted.is_mounted() {
                    return;
                }
                saving.set(false);

                match (result, id_festival) {
                    (Ok(created), None) => {
                        log::info!("✅ [FESTIVAL] Festival {} creado", created.id_festival);
                        navigate(&Route::PromoterDashboard);
                    }
                    (Ok(updated), Some(_)) => {
                        log::info!("✅ [FESTIVAL] Festival {} actualizado", updated.id_festival);
                        show_success.emit("Festival actualizado correctamente".to_string());
                    }
                    (Err(e), _) => show_error.emit(session.report_api_error(&e, FESTIVAL_SAVE_FAILED)),
                }
            });
        })
    };

    let title = if props.id_festival.is_some() { "Editar festival" } else { "Crear festival" };

    html! {
        <div class="festival-form-page">
            <AppHeader title={title} />
            <a class="btn-link" href={format!("#{}", Route::PromoterDashboard.path())}>{"← Volver"}</a>
            <Alert message={error.message.clone()} />
            <Alert message={success.message.clone()} kind={AlertKind::Success} />

            if *loading {
                <p class="loading">{"Cargando festival..."}</p>
            } else {
                <form class="festival-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="nombre">{"Nombre *"}</label>
                        <input type="text" id="nombre" value={form.nombre.clone()}
                            oninput={on_input(&form, |f, v| f.nombre = v)} />
                    </div>
                    <div class="form-group">
                        <label for="descripcion">{"Descripción"}</label>
                        <textarea id="descripcion" value={form.descripcion.clone()} oninput={on_description} />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="fecha-inicio">{"Fecha de inicio *"}</label>
                            <input type="date" id="fecha-inicio" value={form.fecha_inicio.clone()}
                                oninput={on_input(&form, |f, v| f.fecha_inicio = v)} />
                        </div>
                        <div class="form-group">
                            <label for="fecha-fin">{"Fecha de fin *"}</label>
                            <input type="date" id="fecha-fin" value={form.fecha_fin.clone()}
                                oninput={on_input(&form, |f, v| f.fecha_fin = v)} />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="ubicacion">{"Ubicación"}</label>
                        <input type="text" id="ubicacion" value={form.ubicacion.clone()}
                            oninput={on_input(&form, |f, v| f.ubicacion = v)} />
                    </div>
                    <div class="form-group">
                        <label for="aforo">{"Aforo"}</label>
                        <input type="number" id="aforo" min="1" value={form.aforo.clone()}
                            oninput={on_input(&form, |f, v| f.aforo = v)} />
                    </div>
                    <div class="form-group">
                        <label for="imagen">{"URL de imagen"}</label>
                        <input type="url" id="imagen" value={form.imagen_url.clone()}
                            oninput={on_input(&form, |f, v| f.imagen_url = v)} />
                    </div>
                    <button type="submit" class="btn-primary" disabled={*saving}>
                        {if *saving { "Guardando..." } else { "Guardar festival" }}
                    </button>
                </form>
            }
        </div>
    }
}
