use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: Option<String>,
    #[prop_or(AlertKind::Error)]
    pub kind: AlertKind,
}

/// Mensaje en línea; no pinta nada si no hay mensaje
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    let class = match props.kind {
        AlertKind::Error => "alert alert-error",
        AlertKind::Success => "alert alert-success",
    };

    html! {
        <div class={class} role="alert">{message.clone()}</div>
    }
}
