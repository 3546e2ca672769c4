use yew::prelude::*;

use crate::hooks::session_context::use_session;
use crate::hooks::use_route::navigate;
use crate::state::routes::Route;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
    pub title: AttrValue,
}

/// Cabecera de las pantallas protegidas: título, saludo y logout
#[function_component(AppHeader)]
pub fn app_header(props: &AppHeaderProps) -> Html {
    let session = use_session();
    let display_name = session
        .identity()
        .map(|identity| identity.display_name.clone())
        .unwrap_or_default();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            navigate(&Route::Login);
        })
    };

    html! {
        <header class="app-header">
            <h1>{props.title.clone()}</h1>
            <div class="header-user">
                <span class="welcome">{format!("Bienvenido, {}", display_name)}</span>
                <button class="btn-logout" onclick={on_logout}>{"Cerrar sesión"}</button>
            </div>
        </header>
    }
}
