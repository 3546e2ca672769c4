// ============================================================================
// ADMIN FESTIVALS - Todos los festivales: filtrar, publicar, cancelar, finalizar
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::header::AppHeader;
use crate::hooks::session_context::use_session;
use crate::hooks::use_action::use_action;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::models::{Festival, FestivalStatus};
use crate::services::admin_service;
use crate::state::routes::Route;
use crate::utils::format::format_date;
use crate::viewmodels::admin_viewmodel::{
    filter_value, parse_filter, FestivalTransition, FESTIVALS_LOAD_FAILED, FESTIVAL_FILTERS,
    FESTIVAL_STATUS_FAILED,
};

#[function_component(AdminFestivals)]
pub fn admin_festivals() -> Html {
    let session = use_session();
    let error = use_flash();
    let success = use_flash();
    let latest = use_latest_request();
    let festivals = use_state(|| None::<Vec<Festival>>);
    let filter = use_state(|| None::<FestivalStatus>);
    let pending = use_state(|| None::<(FestivalTransition, Festival)>);
    let reload = use_state(|| 0u32);

    let runner = {
        let reload = reload.clone();
        use_action(
            error.show.clone(),
            success.show.clone(),
            Callback::from(move |_: ()| reload.set(*reload + 1)),
        )
    };

    {
        let session = session.clone();
        let festivals = festivals.clone();
        let show_error = error.show.clone();
        let token = session.credential().map(str::to_string);
        use_effect_with((*filter, token, *reload), move |(filter, token, _)| {
            festivals.set(None);
            let request = latest.begin();
            if let Some(token) = token.clone() {
                let filter = *filter;
                wasm_bindgen_futures::spawn_local(async move {
                    let result = admin_service::fetch_admin_festivals(&token, filter).await;
                    if !request.is_current() {
                        return;
                    }
                    match result {
                        Ok(loaded) => {
                            log::info!("🎪 [ADMIN] {} festivales ({})", loaded.len(), filter_value(filter));
                            festivals.set(Some(loaded));
                        }
                        Err(e) => {
                            show_error.emit(session.report_api_error(&e, FESTIVALS_LOAD_FAILED));
                            festivals.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(parse_filter(&select.value()));
        })
    };

    let on_confirm = {
        let pending = pending.clone();
        let runner = runner.clone();
        Callback::from(move |_: ()| {
            let Some((transition, festival)) = (*pending).clone() else {
                return;
            };
            pending.set(None);
            let id_festival = festival.id_festival;
            runner.run(
                FESTIVAL_STATUS_FAILED,
                transition.success(&festival),
                move |token| async move {
                    match transition {
                        FestivalTransition::Publish => admin_service::confirm_festival(&token, id_festival).await,
                        other => admin_service::change_festival_status(&token, id_festival, other.target()).await,
                    }
                },
            );
        })
    };

    let on_dismiss = {
        let pending = pending.clone();
        Callback::from(move |_: ()| pending.set(None))
    };

    let busy = runner.is_busy();
    let row = |festival: &Festival| {
        let status = festival.status();
        let buttons = FestivalTransition::available(status).into_iter().map(|transition| {
            let pending = pending.clone();
            let festival = festival.clone();
            let class = match transition {
                FestivalTransition::Publish => "btn-primary",
                FestivalTransition::Cancel => "btn-danger",
                FestivalTransition::Finish => "btn-secondary",
            };
            let onclick = Callback::from(move |_: MouseEvent| pending.set(Some((transition, festival.clone()))));
            html! { <button {class} {onclick} disabled={busy}>{transition.button_label()}</button> }
        });
        html! {
            <tr>
                <td>{festival.id_festival.to_string()}</td>
                <td>{festival.nombre.clone()}</td>
                <td>{format!("{} - {}", format_date(&festival.fecha_inicio), format_date(&festival.fecha_fin))}</td>
                <td>{festival.ubicacion.clone().unwrap_or_default()}</td>
                <td><span class={status.badge_class()}>{festival.estado.clone().unwrap_or_default()}</span></td>
                <td class="row-actions">{ for buttons }</td>
            </tr>
        }
    };

    let list = match &*festivals {
        None => html! { <p class="loading">{"Cargando festivales..."}</p> },
        Some(list) if list.is_empty() => html! { <p class="empty">{"No hay festivales con este filtro."}</p> },
        Some(list) => html! {
            <table class="listing-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Nombre"}</th>
                        <th>{"Fechas"}</th>
                        <th>{"Ubicación"}</th>
                        <th>{"Estado"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>{ for list.iter().map(row) }</tbody>
            </table>
        },
    };

    let confirm_text = (*pending)
        .as_ref()
        .map(|(transition, _)| AttrValue::from(transition.button_label()))
        .unwrap_or(AttrValue::Static("Confirmar"));

    html! {
        <div class="admin-festivals">
            <AppHeader title="Gestión de festivales" />
            <a class="btn-link" href={format!("#{}", Route::AdminDashboard.path())}>{"← Volver"}</a>
            <Alert message={error.message.clone()} />
            <Alert message={success.message.clone()} kind={AlertKind::Success} />
            <div class="filters">
                <label for="estado">{"Estado: "}</label>
                <select id="estado" onchange={on_filter}>
                    { for FESTIVAL_FILTERS.iter().map(|option| html! {
                        <option value={filter_value(*option)} selected={*option == *filter}>
                            {filter_value(*option)}
                        </option>
                    }) }
                </select>
            </div>
            {list}
            <ConfirmModal
                message={(*pending).as_ref().map(|(transition, festival)| transition.confirmation(festival))}
                {confirm_text}
                {on_confirm}
                on_cancel={on_dismiss}
            />
        </div>
    }
}
