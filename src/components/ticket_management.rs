// ============================================================================
// TICKET MANAGEMENT - Entradas vendidas y pulseras NFC de un festival
// ============================================================================
// Nominar, asociar pulsera y cancelar entradas activas. Tras cada acción se
// recargan entradas y pulseras.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::data_table::{DataTable, FestivalHeader};
use crate::components::header::AppHeader;
use crate::hooks::session_context::use_session;
use crate::hooks::use_action::{use_action, ActionRunner};
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::models::{Bracelet, Festival, FestivalTicket, NominationRequest};
use crate::services::{festival_service, ticket_service};
use crate::state::routes::Route;
use crate::viewmodels::festival_form::FESTIVAL_LOAD_FAILED;
use crate::viewmodels::nomination_viewmodel::validate_attendee;
use crate::viewmodels::report_viewmodel::bracelets_table;
use crate::viewmodels::ticket_viewmodel::{
    action_success, available_actions, cancel_confirmation, validate_bracelet_uid, TicketAction,
    TicketTab, BRACELETS_LOAD_FAILED, TICKETS_LOAD_FAILED, TICKET_ACTION_FAILED,
};

#[derive(Properties, PartialEq)]
pub struct TicketManagementProps {
    pub id_festival: i64,
}

/// Formulario abierto sobre una entrada
#[derive(Clone, PartialEq)]
enum Panel {
    Closed,
    Nominate { ticket: FestivalTicket, form: NominationRequest },
    Bracelet { ticket: FestivalTicket, uid: String },
}

fn panel_input(panel: &UseStateHandle<Panel>, apply: fn(&mut Panel, String)) -> Callback<InputEvent> {
    let panel = panel.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*panel).clone();
        apply(&mut next, input.value());
        panel.set(next);
    })
}

fn text_or_dash(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
}

fn ticket_row(ticket: &FestivalTicket, on_action: &Callback<(TicketAction, FestivalTicket)>) -> Html {
    let buttons = available_actions(ticket).into_iter().map(|action| {
        let ticket = ticket.clone();
        let class = if action == TicketAction::Cancel { "btn-danger" } else { "btn-secondary" };
        let onclick = on_action.reform(move |_: MouseEvent| (action, ticket.clone()));
        html! { <button {class} {onclick}>{action.label()}</button> }
    });

    html! {
        <tr>
            <td>{ticket.codigo_qr.clone()}</td>
            <td>{text_or_dash(&ticket.tipo_entrada_original)}</td>
            <td><span class={ticket.status().badge_class()}>{ticket.estado.clone()}</span></td>
            <td>{text_or_dash(&ticket.nombre_asistente)}</td>
            <td>{text_or_dash(&ticket.email_asistente)}</td>
            <td>{text_or_dash(&ticket.codigo_uid_pulsera)}</td>
            <td class="row-actions">{ for buttons }</td>
        </tr>
    }
}

fn submit_panel(panel: &Panel, runner: &ActionRunner, show_error: &Callback<String>) {
    match panel.clone() {
        Panel::Nominate { ticket, form } => match validate_attendee(&form) {
            Ok(request) => {
                let id_entrada = ticket.id_entrada;
                runner.run(
                    TICKET_ACTION_FAILED,
                    action_success(TicketAction::Nominate, &ticket),
                    move |token| async move {
                        ticket_service::nominate_festival_ticket(&token, id_entrada, &request).await
                    },
                );
            }
            Err(e) => show_error.emit(e.to_string()),
        },
        Panel::Bracelet { ticket, uid } => match validate_bracelet_uid(&uid) {
            Ok(uid) => {
                let id_entrada = ticket.id_entrada;
                runner.run(
                    TICKET_ACTION_FAILED,
                    action_success(TicketAction::AssociateBracelet, &ticket),
                    move |token| async move { ticket_service::associate_bracelet(&token, id_entrada, &uid).await },
                );
            }
            Err(e) => show_error.emit(e.to_string()),
        },
        Panel::Closed => {}
    }
}

#[function_component(TicketManagement)]
pub fn ticket_management(props: &TicketManagementProps) -> Html {
    let session = use_session();
    let error = use_flash();
    let success = use_flash();
    let latest = use_latest_request();
    let festival = use_state(|| None::<Festival>);
    let tickets = use_state(|| None::<Vec<FestivalTicket>>);
    let bracelets = use_state(|| None::<Vec<Bracelet>>);
    let tab = use_state(|| TicketTab::Entradas);
    let panel = use_state(|| Panel::Closed);
    let confirm_cancel = use_state(|| None::<FestivalTicket>);
    let reload = use_state(|| 0u32);

    let runner = {
        let panel = panel.clone();
        let reload = reload.clone();
        use_action(
            error.show.clone(),
            success.show.clone(),
            Callback::from(move |_: ()| {
                panel.set(Panel::Closed);
                reload.set(*reload + 1);
            }),
        )
    };

    {
        let session = session.clone();
        let festival = festival.clone();
        let tickets = tickets.clone();
        let bracelets = bracelets.clone();
        let show_error = error.show.clone();
        let token = session.credential().map(str::to_string);
        use_effect_with((props.id_festival, token, *reload), move |(id_festival, token, _)| {
            festival.set(None);
            tickets.set(None);
            bracelets.set(None);
            let request = latest.begin();

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

                    let loaded = ticket_service::fetch_festival_tickets(&token, id_festival).await;
                    if !request.is_current() {
                        return;
                    }
                    match loaded {
                        Ok(loaded) => {
                            log::info!("🎫 [TICKETS] Festival {}: {} entradas", id_festival, loaded.len());
                            tickets.set(Some(loaded));
                        }
                        Err(e) => {
                            show_error.emit(session.report_api_error(&e, TICKETS_LOAD_FAILED));
                            tickets.set(Some(Vec::new()));
                        }
                    }

                    let loaded = ticket_service::fetch_festival_bracelets(&token, id_festival).await;
                    if !request.is_current() {
                        return;
                    }
                    match loaded {
                        Ok(loaded) => bracelets.set(Some(loaded)),
                        Err(e) => {
                            show_error.emit(session.report_api_error(&e, BRACELETS_LOAD_FAILED));
                            bracelets.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_action = {
        let panel = panel.clone();
        let confirm_cancel = confirm_cancel.clone();
        Callback::from(move |(action, ticket): (TicketAction, FestivalTicket)| match action {
            TicketAction::Nominate => panel.set(Panel::Nominate {
                ticket,
                form: NominationRequest::default(),
            }),
            TicketAction::AssociateBracelet => panel.set(Panel::Bracelet {
                ticket,
                uid: String::new(),
            }),
            TicketAction::Cancel => confirm_cancel.set(Some(ticket)),
        })
    };

    let on_confirm_cancel = {
        let confirm_cancel = confirm_cancel.clone();
        let runner = runner.clone();
        Callback::from(move |_: ()| {
            let Some(ticket) = (*confirm_cancel).clone() else {
                return;
            };
            confirm_cancel.set(None);
            let id_entrada = ticket.id_entrada;
            runner.run(
                TICKET_ACTION_FAILED,
                action_success(TicketAction::Cancel, &ticket),
                move |token| async move { ticket_service::cancel_ticket(&token, id_entrada).await },
            );
        })
    };

    let on_dismiss_cancel = {
        let confirm_cancel = confirm_cancel.clone();
        Callback::from(move |_: ()| confirm_cancel.set(None))
    };

    let on_panel_submit = {
        let panel = panel.clone();
        let runner = runner.clone();
        let show_error = error.show.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_panel(&panel, &runner, &show_error);
        })
    };

    let on_panel_close = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.set(Panel::Closed))
    };

    let tab_button = |target: TicketTab| {
        let tab = tab.clone();
        let class = if *tab == target { "tab active" } else { "tab" };
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! { <button {class} {onclick}>{target.label()}</button> }
    };

    let busy = runner.is_busy();
    let panel_html = match &*panel {
        Panel::Closed => html! {},
        Panel::Nominate { ticket, form } => html! {
            <form class="ticket-panel" onsubmit={on_panel_submit.clone()}>
                <h3>{format!("Nominar entrada {}", ticket.codigo_qr)}</h3>
                <div class="form-group">
                    <label for="nominar-email">{"Email del asistente *"}</label>
                    <input type="email" id="nominar-email" value={form.email_asistente.clone()}
                        oninput={panel_input(&panel, |p, v| if let Panel::Nominate { form, .. } = p { form.email_asistente = v })} />
                </div>
                <div class="form-group">
                    <label for="nominar-confirm">{"Confirmar email *"}</label>
                    <input type="email" id="nominar-confirm" value={form.confirm_email_nominado.clone()}
                        oninput={panel_input(&panel, |p, v| if let Panel::Nominate { form, .. } = p { form.confirm_email_nominado = v })} />
                </div>
                <div class="form-group">
                    <label for="nominar-nombre">{"Nombre *"}</label>
                    <input type="text" id="nominar-nombre" value={form.nombre_asistente.clone()}
                        oninput={panel_input(&panel, |p, v| if let Panel::Nominate { form, .. } = p { form.nombre_asistente = v })} />
                </div>
                <div class="form-group">
                    <label for="nominar-telefono">{"Teléfono"}</label>
                    <input type="tel" id="nominar-telefono" value={form.telefono_asistente.clone()}
                        oninput={panel_input(&panel, |p, v| if let Panel::Nominate { form, .. } = p { form.telefono_asistente = v })} />
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-secondary" onclick={on_panel_close.clone()}>{"Cancelar"}</button>
                    <button type="submit" class="btn-primary" disabled={busy}>{"Nominar"}</button>
                </div>
            </form>
        },
        Panel::Bracelet { ticket, uid } => html! {
            <form class="ticket-panel" onsubmit={on_panel_submit.clone()}>
                <h3>{format!("Asociar pulsera a {}", ticket.codigo_qr)}</h3>
                <div class="form-group">
                    <label for="pulsera-uid">{"Código UID de la pulsera *"}</label>
                    <input type="text" id="pulsera-uid" value={uid.clone()}
                        oninput={panel_input(&panel, |p, v| if let Panel::Bracelet { uid, .. } = p { *uid = v })} />
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-secondary" onclick={on_panel_close.clone()}>{"Cancelar"}</button>
                    <button type="submit" class="btn-primary" disabled={busy}>{"Asociar"}</button>
                </div>
            </form>
        },
    };

    let content = match *tab {
        TicketTab::Entradas => match &*tickets {
            None => html! { <p class="loading">{"Cargando entradas..."}</p> },
            Some(list) if list.is_empty() => html! { <p class="empty">{"Este festival no tiene entradas vendidas."}</p> },
            Some(list) => html! {
                <table class="listing-table">
                    <thead>
                        <tr>
                            <th>{"Código QR"}</th>
                            <th>{"Tipo"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Asistente"}</th>
                            <th>{"Email"}</th>
                            <th>{"Pulsera"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>{ for list.iter().map(|t| ticket_row(t, &on_action)) }</tbody>
                </table>
            },
        },
        TicketTab::Pulseras => match &*bracelets {
            None => html! { <p class="loading">{"Cargando pulseras..."}</p> },
            Some(list) => html! {
                <DataTable table={bracelets_table(list)} empty_text="Este festival no tiene pulseras asociadas." />
            },
        },
    };

    html! {
        <div class="ticket-management">
            <AppHeader title="Entradas y pulseras" />
            <a class="btn-link" href={format!("#{}", Route::PromoterDashboard.path())}>{"← Volver"}</a>
            <Alert message={error.message.clone()} />
            <Alert message={success.message.clone()} kind={AlertKind::Success} />
            if let Some(loaded) = (*festival).clone() {
                <FestivalHeader festival={loaded} />
            }
            <div class="tabs">
                {tab_button(TicketTab::Entradas)}
                {tab_button(TicketTab::Pulseras)}
            </div>
            {panel_html}
            {content}
            <ConfirmModal
                message={(*confirm_cancel).as_ref().map(cancel_confirmation)}
                confirm_text="Cancelar entrada"
                on_confirm={on_confirm_cancel}
                on_cancel={on_dismiss_cancel}
            />
        </div>
    }
}
