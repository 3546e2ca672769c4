use yew::prelude::*;

use crate::components::router::Router;
use crate::hooks::session_context::SessionProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <main class="app">
                <Router />
            </main>
        </SessionProvider>
    }
}
