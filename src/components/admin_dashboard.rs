use yew::prelude::*;

use crate::components::header::AppHeader;
use crate::state::routes::Route;

const MENU: [(&str, &str, Route); 4] = [
    ("👥", "Usuarios", Route::AdminUsers),
    ("🎪", "Festivales", Route::AdminFestivals),
    ("🧑‍🤝‍🧑", "Clientes", Route::AdminClients),
    ("📊", "Reportes", Route::AdminReports),
];

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    html! {
        <div class="dashboard">
            <AppHeader title="Panel de administración" />
            <nav class="dashboard-menu">
                { for MENU.iter().map(|(icon, label, route)| html! {
                    <a class="menu-card" href={format!("#{}", route.path())}>
                        <span class="menu-icon">{*icon}</span>
                        <span class="menu-label">{*label}</span>
                    </a>
                }) }
            </nav>
        </div>
    }
}
