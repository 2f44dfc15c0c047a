//! Login page with email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::routing::Route;
use crate::state::session::use_session;
use crate::util::route_guard::navigate_to;

pub(crate) const MISSING_CREDENTIALS: &str = "Informe email e senha.";

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation(MISSING_CREDENTIALS));
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                info.set(e.user_message());
                return;
            }
        };
        busy.set(true);
        info.set("Entrando...".to_owned());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&credentials).await {
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
                <p class="auth-card__subtitle">"Entre na sua conta"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Não tem conta? "
                    <a href=Route::Register.path()>"Cadastre-se"</a>
                </p>
            </div>
        </div>
    }
}
