//! Success/error banner shown above forms.

use leptos::prelude::*;

/// Outcome message for the last form action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "notice notice--success",
            Self::Error(_) => "notice notice--error",
        }
    }
}

/// Renders the current notice, if any.
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class=move || notice.with(|n| n.as_ref().map_or("notice", Notice::class)) role="alert">
                {move || notice.with(|n| n.as_ref().map(|n| n.text().to_owned()).unwrap_or_default())}
            </div>
        </Show>
    }
}

/// Full-height placeholder while the session or page data resolves.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <span>"Carregando..."</span>
        </div>
    }
}
