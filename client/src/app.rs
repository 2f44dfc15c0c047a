//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::navigation::Navigation;
use crate::net::http::ApiClient;
use crate::pages::{
    history::HistoryPage, home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage, root::RootPage,
};
use crate::state::session::{provide_session, use_session};
use crate::util::route_guard::install_route_guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, starts the session check, and mounts the
/// route guard ahead of every screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session(ApiClient::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/fessor.css"/>
        <Title text="Fessor - Plataforma de Relatórios Escolares"/>

        <Router>
            <RouteGuard/>
            <div class="layout">
                <Navigation/>
                <main class="layout__content">
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=RootPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("home") view=HomePage/>
                        <Route path=StaticSegment("history") view=HistoryPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Router-scoped hook-up of the redirect rules; renders nothing.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = use_session();
    install_route_guard(session.signal(), use_location().pathname, use_navigate());
}
