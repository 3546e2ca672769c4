// ============================================================================
// LISTING VIEW - Tabla de solo lectura para las rutas de consulta
// ============================================================================

use yew::prelude::*;

use crate::components::alert::Alert;
use crate::components::data_table::{DataTable, FestivalHeader};
use crate::components::header::AppHeader;
use crate::hooks::session_context::use_session;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::models::Festival;
use crate::services::festival_service;
use crate::state::routes::Route;
use crate::viewmodels::listing_viewmodel::{ListingSpec, Table};

const LOAD_FAILED: &str = "Error al cargar los datos";

#[derive(Properties, PartialEq)]
pub struct ListingViewProps {
    pub spec: ListingSpec,
}

#[function_component(ListingView)]
pub fn listing_view(props: &ListingViewProps) -> Html {
    let session = use_session();
    let flash = use_flash();
    let latest = use_latest_request();
    let table = use_state(|| None::<Table>);
    let festival = use_state(|| None::<Festival>);

    {
        let session = session.clone();
        let table = table.clone();
        let festival = festival.clone();
        let show_error = flash.show.clone();
        let token = session.credential().map(str::to_string);
        use_effect_with((props.spec.clone(), token), move |(spec, token)| {
            // La vista se reutiliza entre rutas: nada de la anterior sobrevive
            table.set(None);
            festival.set(None);
            let request = latest.begin();

            if let Some(token) = token.clone() {
                let spec = spec.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(id_festival) = spec.festival_header {
                        let loaded = festival_service::fetch_festival(&token, id_festival).await;
                        if !request.is_current() {
                            return;
                        }
                        match loaded {
                            Ok(loaded) => festival.set(Some(loaded)),
                            Err(e) => log::warn!("⚠️ [LISTING] Sin cabecera de festival {}: {}", id_festival, e),
                        }
                    }

                    let result = festival_service::fetch_listing(&token, &spec.endpoint).await;
                    if !request.is_current() {
                        log::debug!("📋 [LISTING] Respuesta descartada de {}", spec.endpoint);
                        return;
                    }
                    match result {
                        Ok(value) => {
                            let loaded = Table::from_json(&value);
                            log::info!("📋 [LISTING] {}: {} filas", spec.endpoint, loaded.rows.len());
                            table.set(Some(loaded));
                        }
                        Err(e) => {
                            show_error.emit(session.report_api_error(&e, LOAD_FAILED));
                            table.set(Some(Table::default()));
                        }
                    }
                });
            }
            || ()
        });
    }

    html! {
        <div class="listing-page">
            <AppHeader title={props.spec.title.clone()} />
            <a class="btn-link" href={format!("#{}", props.spec.back.path())}>{"← Volver"}</a>
            <Alert message={flash.message.clone()} />
            if let Some(loaded) = (*festival).clone() {
                <FestivalHeader festival={loaded} />
            }
            if let Some(loaded) = (*table).clone() {
                <DataTable table={loaded} />
            } else {
                <p class="loading">{"Cargando..."}</p>
            }
        </div>
    }
}

/// Listado para una ruta de consulta, o nada si la ruta no tiene listado
pub fn listing_for(route: &Route) -> Option<Html> {
    ListingSpec::for_route(route).map(|spec| html! { <ListingView {spec} /> })
}
