// ============================================================================
// USER MANAGEMENT - Promotores, administradores y cajeros
// ============================================================================

use yew::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::header::AppHeader;
use crate::hooks::session_context::use_session;
use crate::hooks::use_action::use_action;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_latest_request::use_latest_request;
use crate::models::User;
use crate::services::admin_service;
use crate::state::routes::Route;
use crate::viewmodels::admin_viewmodel::{
    is_own_account, status_label, toggle_confirmation, toggle_success, UserTab, USERS_LOAD_FAILED,
    USER_STATUS_FAILED,
};

#[function_component(UserManagement)]
pub fn user_management() -> Html {
    let session = use_session();
    let error = use_flash();
    let success = use_flash();
    let latest = use_latest_request();
    let tab = use_state(|| UserTab::Promotores);
    let users = use_state(|| None::<Vec<User>>);
    let pending = use_state(|| None::<(User, String)>);
    let reload = use_state(|| 0u32);

    let runner = {
        let reload = reload.clone();
        use_action(
            error.show.clone(),
            success.show.clone(),
            Callback::from(move |_: ()| reload.set(*reload + 1)),
        )
    };

    {
        let session = session.clone();
        let users = users.clone();
        let show_error = error.show.clone();
        let token = session.credential().map(str::to_string);
        use_effect_with((*tab, token, *reload), move |(tab, token, _)| {
            users.set(None);
            let request = latest.begin();
            if let Some(token) = token.clone() {
                let tab = *tab;
                wasm_bindgen_futures::spawn_local(async move {
                    let result = admin_service::fetch_users(&token, tab.endpoint()).await;
                    if !request.is_current() {
                        return;
                    }
                    match result {
                        Ok(loaded) => {
                            log::info!("👤 [ADMIN] {}: {} usuarios", tab.label(), loaded.len());
                            users.set(Some(loaded));
                        }
                        Err(e) => {
                            show_error.emit(session.report_api_error(&e, USERS_LOAD_FAILED));
                            users.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_toggle = {
        let session = session.clone();
        let pending = pending.clone();
        let show_error = error.show.clone();
        Callback::from(move |user: User| match toggle_confirmation(session.identity(), &user) {
            Ok(message) => pending.set(Some((user, message))),
            Err(reason) => show_error.emit(reason.to_string()),
        })
    };

    let on_confirm = {
        let pending = pending.clone();
        let runner = runner.clone();
        Callback::from(move |_: ()| {
            let Some((user, _)) = (*pending).clone() else {
                return;
            };
            pending.set(None);
            let id_usuario = user.id_usuario;
            let active = !user.estado;
            runner.run(USER_STATUS_FAILED, toggle_success(&user), move |token| async move {
                admin_service::set_user_active(&token, id_usuario, active).await
            });
        })
    };

    let on_dismiss = {
        let pending = pending.clone();
        Callback::from(move |_: ()| pending.set(None))
    };

    let tab_button = |target: UserTab| {
        let tab = tab.clone();
        let class = if *tab == target { "tab active" } else { "tab" };
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! { <button {class} {onclick}>{target.label()}</button> }
    };

    let busy = runner.is_busy();
    let identity = session.identity();
    let row = |user: &User| {
        let own = is_own_account(identity, user);
        let onclick = {
            let user = user.clone();
            on_toggle.reform(move |_: MouseEvent| user.clone())
        };
        let (class, label) = if user.estado {
            ("btn-danger", "Desactivar")
        } else {
            ("btn-primary", "Activar")
        };
        html! {
            <tr>
                <td>{user.id_usuario.to_string()}</td>
                <td>{user.nombre.clone()}</td>
                <td>{user.email.clone()}</td>
                <td>
                    <span class={if user.estado { "badge badge-active" } else { "badge badge-cancelled" }}>
                        {status_label(user.estado)}
                    </span>
                </td>
                <td class="row-actions">
                    if !own {
                        <button {class} {onclick} disabled={busy}>{label}</button>
                    }
                </td>
            </tr>
        }
    };

    let list = match &*users {
        None => html! { <p class="loading">{"Cargando usuarios..."}</p> },
        Some(list) if list.is_empty() => html! { <p class="empty">{"No hay usuarios en esta pestaña."}</p> },
        Some(list) => html! {
            <table class="listing-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Nombre"}</th>
                        <th>{"Email"}</th>
                        <th>{"Estado"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>{ for list.iter().map(row) }</tbody>
            </table>
        },
    };

    html! {
        <div class="user-management">
            <AppHeader title="Gestión de usuarios" />
            <a class="btn-link" href={format!("#{}", Route::AdminDashboard.path())}>{"← Volver"}</a>
            <Alert message={error.message.clone()} />
            <Alert message={success.message.clone()} kind={AlertKind::Success} />
            <div class="tabs">
                { for UserTab::ALL.into_iter().map(tab_button) }
            </div>
            {list}
            <ConfirmModal
                message={(*pending).as_ref().map(|(_, message)| message.clone())}
                {on_confirm}
                on_cancel={on_dismiss}
            />
        </div>
    }
}
