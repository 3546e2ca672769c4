use yew::prelude::*;

use crate::hooks::use_route::replace;
use crate::state::routes::Route;

#[derive(Properties, PartialEq)]
pub struct RedirectProps {
    pub to: Route,
}

/// Equivalente a `<Navigate replace />`: no pinta nada y reemplaza el hash
#[function_component(Redirect)]
pub fn redirect(props: &RedirectProps) -> Html {
    use_effect_with(props.to.clone(), |to| {
        log::debug!("↪️ [ROUTER] Redirigiendo a {}", to.path());
        replace(to);
        || ()
    });

    html! {}
}
