//! Self-service account creation.
//!
//! Registration never signs the user in; on success the page sends the
//! visitor to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::Registration;
use crate::routing::Route;
use crate::state::profile::PASSWORD_MISMATCH;
use crate::state::reports::required;
use crate::state::session::use_session;
use crate::util::route_guard::navigate_to;

/// Register form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub(crate) fn validate(&self) -> Result<Registration, ApiError> {
        let name = required(&self.name, "Informe seu nome.")?;
        let email = required(&self.email, "Informe seu email.")?;
        if self.password.is_empty() {
            return Err(ApiError::validation("Informe uma senha."));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation(PASSWORD_MISMATCH));
        }
        Ok(Registration::new(name, email, self.password.clone()))
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match form.with(RegisterForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                info.set(e.user_message());
                return;
            }
        };
        busy.set(true);
        info.set("Criando conta...".to_owned());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(&payload).await {
                Ok(route) => navigate_to(&navigate, route),
                Err(e) => {
                    info.set(e.user_message());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Fessor"</h1>
                <p class="auth-card__subtitle">"Crie sua conta"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Nome"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirmar senha"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        "Cadastrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Já tem conta? "
                    <a href=Route::Login.path()>"Entrar"</a>
                </p>
            </div>
        </div>
    }
}
