//! Sidebar navigation with the signed-in user and logout.
//!
//! Hidden on the login and register screens.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::{Route, is_auth_page};
use crate::state::session::use_session;
use crate::util::route_guard::navigate_to;

const LINKS: [(Route, &str, &str); 3] = [
    (Route::Home, "Gerar Relatório", "📝"),
    (Route::History, "Histórico", "📋"),
    (Route::Profile, "Perfil", "👤"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let state = session.signal();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let on_logout = move |_| {
        open.set(false);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let route = session.logout().await;
            navigate_to(&navigate, route);
        });
    };

    let user_name = move || state.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_email = move || state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let user_initial = move || state.with(|s| s.user.as_ref().map(crate::net::types::User::initial).unwrap_or_default());

    view! {
        <div class="nav-root" class:nav-root--hidden=move || is_auth_page(&pathname.get())>
            <button class="sidebar-toggle" on:click=move |_| open.update(|o| *o = !*o)>
                <span class="sr-only">"Abrir menu"</span>
                {move || if open.get() { "✕" } else { "☰" }}
            </button>
            <aside class="sidebar" class:sidebar--open=move || open.get()>
                <a href=Route::Home.path() class="sidebar__logo" on:click=move |_| open.set(false)>
                    <span class="sidebar__logo-icon">"📚"</span>
                    <span class="sidebar__logo-text">"Fessor"</span>
                </a>
                <nav class="sidebar__nav">
                    {LINKS
                        .into_iter()
                        .map(|(route, label, icon)| {
                            view! {
                                <a
                                    href=route.path()
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || pathname.get() == route.path()
                                    on:click=move |_| open.set(false)
                                >
                                    <span class="sidebar__link-icon">{icon}</span>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="sidebar__user">
                    <div class="sidebar__avatar">{user_initial}</div>
                    <div class="sidebar__identity">
                        <p class="sidebar__name">{user_name}</p>
                        <p class="sidebar__email">{user_email}</p>
                    </div>
                    <button class="sidebar__logout" title="Sair" on:click=on_logout>
                        "Sair"
                    </button>
                </div>
            </aside>
            <Show when=move || open.get()>
                <div class="sidebar-overlay" on:click=move |_| open.set(false)></div>
            </Show>
        </div>
    }
}
