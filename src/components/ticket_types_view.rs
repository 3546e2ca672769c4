// ============================================================================
// TICKET TYPES VIEW - Alta, edición y borrado de tipos de entrada
// ============================================================================

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::data_table::FestivalHeader;
use crate::components::header::AppHeader;
use crate::hooks::session_context::use_session;
use crate::hooks::use_action::use_action;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::models::decimal::format_euros;
use crate::models::{Festival, TicketType};
use crate::services::{festival_service, ticket_service};
use crate::state::routes::Route;
use crate::viewmodels::festival_form::FESTIVAL_LOAD_FAILED;
use crate::viewmodels::ticket_type_form::{
    delete_confirmation, TicketTypeForm, TICKET_TYPES_LOAD_FAILED, TICKET_TYPE_DELETE_FAILED,
    TICKET_TYPE_SAVE_FAILED,
};

#[derive(Properties, PartialEq)]
pub struct TicketTypesViewProps {
    pub id_festival: i64,
}

fn on_input(form: &UseStateHandle<TicketTypeForm>, apply: fn(&mut TicketTypeForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(TicketTypesView)]
pub fn ticket_types_view(props: &TicketTypesViewProps) -> Html {
    let session = use_session();
    let error = use_flash();
    let success = use_flash();
    let latest = use_latest_request();
    let festival = use_state(|| None::<Festival>);
    let ticket_types = use_state(|| None::<Vec<TicketType>>);
    let form = use_state(TicketTypeForm::default);
    let pending_delete = use_state(|| None::<TicketType>);
    let reload = use_state(|| 0u32);

    let runner = {
        let form = form.clone();
        let reload = reload.clone();
        use_action(
            error.show.clone(),
            success.show.clone(),
            Callback::from(move |_: ()| {
                form.set(TicketTypeForm::default());
                reload.set(*reload + 1);
            }),
        )
    };

    {
        let session = session.clone();
        let festival = festival.clone();
        let ticket_types = ticket_types.clone();
        let form = form.clone();
        let show_error = error.show.clone();
        let token = session.credential().map(str::to_string);
        use_effect_with((props.id_festival, token, *reload), move |(id_festival, token, _)| {
            ticket_types.set(None);
            let request = latest.begin();
            // Un formulario a medias de otro festival no debe sobrevivir
            if (*festival).as_ref().map(|f| f.id_festival) != Some(*id_festival) {
                festival.set(None);
                form.set(TicketTypeForm::default());
            }

            if let Some(token) = token.clone() {
                let id_festival = *id_festival;
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = festival_service::fetch_festival(&token, id_festival).await;
                    if !request.is_current() {
                        return;
                    }
                    match loaded {
                        Ok(loaded) => festival.set(Some(loaded)),
                        Err(e) => show_error.emit(session.report_api_error(&e, FESTIVAL_LOAD_FAILED)),
                    }

                    let loaded = ticket_service::fetch_ticket_types(&token, id_festival).await;
                    if !request.is_current() {
                        return;
                    }
                    match loaded {
                        Ok(loaded) => {
                            log::info!("🎟️ [TICKET_TYPES] Festival {}: {} tipos", id_festival, loaded.len());
                            ticket_types.set(Some(loaded));
                        }
                        Err(e) => {
                            show_error.emit(session.report_api_error(&e, TICKET_TYPES_LOAD_FAILED));
                            ticket_types.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_submit = {
        let form = form.clone();
        let runner = runner.clone();
        let show_error = error.show.clone();
        let id_festival = props.id_festival;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match form.to_payload(id_festival) {
                Ok(payload) => payload,
                Err(e) => {
                    show_error.emit(e.to_string());
                    return;
                }
            };
            match form.editing {
                Some(id_tipo_entrada) => runner.run(
                    TICKET_TYPE_SAVE_FAILED,
                    format!("Tipo de entrada \"{}\" actualizado con éxito!", payload.tipo),
                    move |token| async move {
                        ticket_service::update_ticket_type(&token, id_tipo_entrada, &payload).await
                    },
                ),
                None => runner.run(
                    TICKET_TYPE_SAVE_FAILED,
                    format!("Tipo de entrada \"{}\" creado con éxito!", payload.tipo),
                    move |token| async move {
                        ticket_service::create_ticket_type(&token, id_festival, &payload).await
                    },
                ),
            }
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.descripcion = input.value();
            form.set(next);
        })
    };

    let on_nomination = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.requiere_nominacion = input.checked();
            form.set(next);
        })
    };

    let on_reset = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(TicketTypeForm::default()))
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let runner = runner.clone();
        Callback::from(move |_: ()| {
            let Some(ticket_type) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            let id_tipo_entrada = ticket_type.id_tipo_entrada;
            runner.run(
                TICKET_TYPE_DELETE_FAILED,
                format!("Tipo de entrada \"{}\" eliminado con éxito!", ticket_type.tipo),
                move |token| async move { ticket_service::delete_ticket_type(&token, id_tipo_entrada).await },
            );
        })
    };

    let on_dismiss_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let row = |ticket_type: &TicketType| {
        let on_edit = {
            let form = form.clone();
            let ticket_type = ticket_type.clone();
            Callback::from(move |_: MouseEvent| form.set(TicketTypeForm::from_ticket_type(&ticket_type)))
        };
        let on_delete = {
            let pending_delete = pending_delete.clone();
            let ticket_type = ticket_type.clone();
            Callback::from(move |_: MouseEvent| pending_delete.set(Some(ticket_type.clone())))
        };
        html! {
            <tr>
                <td>{ticket_type.tipo.clone()}</td>
                <td>{ticket_type.descripcion.clone().unwrap_or_default()}</td>
                <td>{format_euros(ticket_type.precio)}</td>
                <td>{ticket_type.stock.to_string()}</td>
                <td>{if ticket_type.requiere_nominacion { "Sí" } else { "No" }}</td>
                <td class="row-actions">
                    <button class="btn-secondary" onclick={on_edit}>{"Editar"}</button>
                    <button class="btn-danger" onclick={on_delete}>{"Eliminar"}</button>
                </td>
            </tr>
        }
    };

    let list = match &*ticket_types {
        None => html! { <p class="loading">{"Cargando tipos de entrada..."}</p> },
        Some(list) if list.is_empty() => html! { <p class="empty">{"Este festival todavía no tiene tipos de entrada."}</p> },
        Some(list) => html! {
            <table class="listing-table">
                <thead>
                    <tr>
                        <th>{"Tipo"}</th>
                        <th>{"Descripción"}</th>
                        <th>{"Precio"}</th>
                        <th>{"Stock"}</th>
                        <th>{"Nominación"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>{ for list.iter().map(row) }</tbody>
            </table>
        },
    };

    let busy = runner.is_busy();
    let editing = form.editing.is_some();

    html! {
        <div class="ticket-types-page">
            <AppHeader title="Tipos de entrada" />
            <a class="btn-link" href={format!("#{}", Route::PromoterDashboard.path())}>{"← Volver"}</a>
            <Alert message={error.message.clone()} />
            <Alert message={success.message.clone()} kind={AlertKind::Success} />
            if let Some(loaded) = (*festival).clone() {
                <FestivalHeader festival={loaded} />
            }

            <form class="ticket-type-form" onsubmit={on_submit}>
                <h3>{if editing { "Editar tipo de entrada" } else { "Nuevo tipo de entrada" }}</h3>
                <div class="form-group">
                    <label for="tipo">{"Tipo *"}</label>
                    <input type="text" id="tipo" value={form.tipo.clone()}
                        oninput={on_input(&form, |f, v| f.tipo = v)} />
                </div>
                <div class="form-group">
                    <label for="descripcion">{"Descripción"}</label>
                    <textarea id="descripcion" value={form.descripcion.clone()} oninput={on_description} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="precio">{"Precio (€) *"}</label>
                        <input type="number" id="precio" min="0" step="0.01" value={form.precio.clone()}
                            oninput={on_input(&form, |f, v| f.precio = v)} />
                    </div>
                    <div class="form-group">
                        <label for="stock">{"Stock *"}</label>
                        <input type="number" id="stock" min="0" step="1" value={form.stock.clone()}
                            oninput={on_input(&form, |f, v| f.stock = v)} />
                    </div>
                </div>
                <div class="form-group checkbox">
                    <input type="checkbox" id="requiere-nominacion" checked={form.requiere_nominacion}
                        onchange={on_nomination} />
                    <label for="requiere-nominacion">{"Requiere nominación"}</label>
                </div>
                <div class="form-actions">
                    if editing {
                        <button type="button" class="btn-secondary" onclick={on_reset}>{"Cancelar edición"}</button>
                    }
                    <button type="submit" class="btn-primary" disabled={busy}>
                        {if editing { "Guardar cambios" } else { "Añadir tipo" }}
                    </button>
                </div>
            </form>

            {list}

            <ConfirmModal
                message={(*pending_delete).as_ref().map(delete_confirmation)}
                confirm_text="Eliminar"
                on_confirm={on_confirm_delete}
                on_cancel={on_dismiss_delete}
            />
        </div>
    }
}
