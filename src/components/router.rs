// ============================================================================
// ROUTER - Path actual → guard → pantalla
// ============================================================================

use yew::prelude::*;

use crate::components::admin_dashboard::AdminDashboard;
use crate::components::admin_festivals::AdminFestivals;
use crate::components::change_password_screen::ChangePasswordScreen;
use crate::components::festival_form::FestivalFormView;
use crate::components::listing_view::listing_for;
use crate::components::login_screen::LoginScreen;
use crate::components::promoter_dashboard::PromoterDashboard;
use crate::components::public_nomination::PublicNomination;
use crate::components::redirect::Redirect;
use crate::components::reports_view::ReportsView;
use crate::components::ticket_management::TicketManagement;
use crate::components::ticket_types_view::TicketTypesView;
use crate::components::user_management::UserManagement;
use crate::hooks::session_context::use_session;
use crate::hooks::use_route::use_current_path;
use crate::state::route_guard;
use crate::state::routes::Route;

#[function_component(Router)]
pub fn router() -> Html {
    let path = use_current_path();
    let session = use_session();

    let decision = route_guard::resolve(session.session(), &path);
    if let Some(target) = decision.redirect_target() {
        log::info!("🛡️ [GUARD] {} → {} ({:?})", path, target.path(), decision);
        return html! { <Redirect to={target} /> };
    }

    let route = Route::recognize(&path);
    match route {
        Route::Login => html! { <LoginScreen /> },
        Route::ForcedPasswordChange => html! { <ChangePasswordScreen /> },
        Route::PublicNomination { codigo_qr } => html! { <PublicNomination {codigo_qr} /> },
        Route::Dashboard => {
            let home = session
                .identity()
                .map(|identity| Route::home_for(identity.role))
                .unwrap_or(Route::Login);
            html! { <Redirect to={home} /> }
        }
        Route::PromoterDashboard => html! { <PromoterDashboard /> },
        Route::AdminDashboard => html! { <AdminDashboard /> },
        Route::FestivalCreate => html! { <FestivalFormView /> },
        Route::FestivalEdit { id_festival } => html! { <FestivalFormView id_festival={Some(id_festival)} /> },
        Route::FestivalTicketTypes { id_festival } => html! { <TicketTypesView {id_festival} /> },
        Route::FestivalTicketReport { id_festival } => html! { <TicketManagement {id_festival} /> },
        Route::AdminUsers => html! { <UserManagement /> },
        Route::AdminFestivals => html! { <AdminFestivals /> },
        Route::AdminReports => html! { <ReportsView /> },
        other => listing_for(&other).unwrap_or_else(|| html! { <Redirect to={Route::Login} /> }),
    }
}
