// ============================================================================
// PROMOTER DASHBOARD - Festivales del promotor
// ============================================================================

use yew::prelude::*;

use crate::components::alert::Alert;
use crate::components::header::AppHeader;
use crate::hooks::session_context::use_session;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::models::Festival;
use crate::services::festival_service;
use crate::state::routes::Route;
use crate::utils::format::format_date;

const LOAD_FAILED: &str = "Error al cargar los festivales";

fn link(route: Route, label: &str) -> Html {
    html! { <a class="btn-link" href={format!("#{}", route.path())}>{label.to_string()}</a> }
}

fn festival_row(festival: &Festival) -> Html {
    let id_festival = festival.id_festival;
    let status = festival.status();
    html! {
        <li class="festival-card">
            <div class="festival-main">
                <h3>{festival.nombre.clone()}</h3>
                <span class={status.badge_class()}>{festival.estado.clone().unwrap_or_default()}</span>
            </div>
            <p class="festival-dates">
                {format!("{} - {}", format_date(&festival.fecha_inicio), format_date(&festival.fecha_fin))}
            </p>
            if let Some(ubicacion) = festival.ubicacion.clone() {
                <p class="festival-location">{ubicacion}</p>
            }
            <div class="festival-actions">
                {link(Route::FestivalDetails { id_festival }, "Detalles")}
                {link(Route::FestivalTicketTypes { id_festival }, "Tipos de entrada")}
                {link(Route::FestivalTicketReport { id_festival }, "Entradas vendidas")}
                {link(Route::FestivalEdit { id_festival }, "Editar")}
            </div>
        </li>
    }
}

#[function_component(PromoterDashboard)]
pub fn promoter_dashboard() -> Html {
    let session = use_session();
    let flash = use_flash();
    let latest = use_latest_request();
    let festivals = use_state(Vec::<Festival>::new);
    let loading = use_state(|| true);

    {
        let session = session.clone();
        let festivals = festivals.clone();
        let loading = loading.clone();
        let show_error = flash.show.clone();
        let token = session.credential().map(str::to_string);
        use_effect_with(token, move |token| {
            let request = latest.begin();
            if let Some(token) = token.clone() {
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = festival_service::fetch_promoter_festivals(&token).await;
                    if !request.is_current() {
                        return;
                    }
                    match result {
                        Ok(loaded) => {
                            log::info!("🎪 [FESTIVAL] {} festivales cargados", loaded.len());
                            festivals.set(loaded);
                        }
                        Err(e) => show_error.emit(session.report_api_error(&e, LOAD_FAILED)),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    html! {
        <div class="dashboard">
            <AppHeader title="Mis festivales" />
            <Alert message={flash.message.clone()} />
            <div class="dashboard-actions">
                {link(Route::FestivalCreate, "+ Crear festival")}
            </div>
            if *loading {
                <p class="loading">{"Cargando festivales..."}</p>
            } else if festivals.is_empty() {
                <p class="empty">{"Todavía no tienes festivales."}</p>
            } else {
                <ul class="festival-list">
                    { for festivals.iter().map(festival_row) }
                </ul>
            }
        </div>
    }
}
