use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    /// `None` = cerrado
    pub message: Option<String>,
    #[prop_or(AttrValue::Static("Confirmar"))]
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Diálogo de confirmación para acciones destructivas o de publicación
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class="modal">
                <h3>{"Confirmación Necesaria"}</h3>
                <p>{message.clone()}</p>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
                    <button class="btn-primary" onclick={on_confirm}>{props.confirm_text.clone()}</button>
                </div>
            </div>
        </div>
    }
}
