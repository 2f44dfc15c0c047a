use leptos::prelude::*;

use crate::routing::Route;

/// Router fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Página não encontrada"</h1>
            <a href=Route::Home.path() class="btn">"Voltar ao início"</a>
        </div>
    }
}
