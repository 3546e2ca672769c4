// ============================================================================
// REPORTS VIEW - Informes por festival: compras, asistentes y pulseras
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::alert::Alert;
use crate::components::data_table::DataTable;
use crate::components::header::AppHeader;
use crate::hooks::session_context::{use_session, SessionHandle};
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::models::{Attendee, Bracelet, Festival, Purchase, Role};
use crate::services::admin_service::fetch_rows;
use crate::services::api_client::ApiError;
use crate::state::routes::Route;
use crate::viewmodels::admin_viewmodel::FESTIVALS_LOAD_FAILED;
use crate::viewmodels::listing_viewmodel::Table;
use crate::viewmodels::report_viewmodel::{
    attendees_table, bracelets_table, festival_source, purchases_table, ReportKind, EMPTY_REPORT,
    REPORT_LOAD_FAILED, SELECT_FESTIVAL,
};

async fn load_report(token: &str, role: Role, kind: ReportKind, id_festival: i64) -> Result<Table, ApiError> {
    let path = kind.endpoint(role, id_festival);
    Ok(match kind {
        ReportKind::Compras => purchases_table(&fetch_rows::<Purchase>(token, &path).await?),
        ReportKind::Asistentes => attendees_table(&fetch_rows::<Attendee>(token, &path).await?),
        ReportKind::Pulseras => bracelets_table(&fetch_rows::<Bracelet>(token, &path).await?),
    })
}

fn role_of(session: &SessionHandle) -> Role {
    session.identity().map(|identity| identity.role).unwrap_or(Role::Admin)
}

#[function_component(ReportsView)]
pub fn reports_view() -> Html {
    let session = use_session();
    let flash = use_flash();
    let festivals_request = use_latest_request();
    let report_request = use_latest_request();
    let festivals = use_state(Vec::<Festival>::new);
    let selected = use_state(|| None::<i64>);
    let kind = use_state(ReportKind::default);
    let table = use_state(|| None::<Table>);
    let loading = use_state(|| false);

    let role = role_of(&session);
    let token = session.credential().map(str::to_string);

    // Festivales del selector
    {
        let session = session.clone();
        let festivals = festivals.clone();
        let show_error = flash.show.clone();
        use_effect_with((token.clone(), role), move |(token, role)| {
            let request = festivals_request.begin();
            if let Some(token) = token.clone() {
                let source = festival_source(*role);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_rows::<Festival>(&token, source).await;
                    if !request.is_current() {
                        return;
                    }
                    match result {
                        Ok(loaded) => festivals.set(loaded),
                        Err(e) => show_error.emit(session.report_api_error(&e, FESTIVALS_LOAD_FAILED)),
                    }
                });
            }
            || ()
        });
    }

    // Informe seleccionado
    {
        let session = session.clone();
        let table = table.clone();
        let loading = loading.clone();
        let show_error = flash.show.clone();
        use_effect_with((*selected, *kind, token, role), move |(selected, kind, token, role)| {
            table.set(None);
            let request = report_request.begin();
            if let (Some(id_festival), Some(token)) = (*selected, token.clone()) {
                let (kind, role) = (*kind, *role);
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = load_report(&token, role, kind, id_festival).await;
                    if !request.is_current() {
                        return;
                    }
                    loading.set(false);
                    match result {
                        Ok(loaded) => {
                            log::info!("📊 [REPORT] {} festival {}: {} filas", kind.as_str(), id_festival, loaded.rows.len());
                            table.set(Some(loaded));
                        }
                        Err(e) => {
                            let fallback = format!("{} de {}", REPORT_LOAD_FAILED, kind.as_str());
                            show_error.emit(session.report_api_error(&e, &fallback));
                        }
                    }
                });
            } else {
                loading.set(false);
            }
            || ()
        });
    }

    let on_festival = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value().parse().ok());
        })
    };

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(ReportKind::parse(&select.value()));
        })
    };

    let content = if selected.is_none() {
        html! { <p class="empty">{SELECT_FESTIVAL}</p> }
    } else if *loading {
        html! { <p class="loading">{"Cargando reporte..."}</p> }
    } else if let Some(loaded) = (*table).clone() {
        html! { <DataTable table={loaded} empty_text={EMPTY_REPORT} /> }
    } else {
        html! {}
    };

    html! {
        <div class="reports-page">
            <AppHeader title="Informes" />
            <a class="btn-link" href={format!("#{}", Route::AdminDashboard.path())}>{"← Volver"}</a>
            <Alert message={flash.message.clone()} />
            <div class="filters">
                <label for="festival">{"Festival: "}</label>
                <select id="festival" onchange={on_festival}>
                    <option value="" selected={selected.is_none()}>{"-- Selecciona un festival --"}</option>
                    { for festivals.iter().map(|festival| html! {
                        <option value={festival.id_festival.to_string()}
                            selected={*selected == Some(festival.id_festival)}>
                            {festival.nombre.clone()}
                        </option>
                    }) }
                </select>
                <label for="tipo-reporte">{"Reporte: "}</label>
                <select id="tipo-reporte" onchange={on_kind}>
                    { for ReportKind::ALL.iter().map(|option| html! {
                        <option value={option.as_str()} selected={*option == *kind}>{option.label()}</option>
                    }) }
                </select>
            </div>
            {content}
        </div>
    }
}
