//! `/`: placeholder while the route guard forwards to home or login.

use leptos::prelude::*;

use crate::components::notice::Loading;

#[component]
pub fn RootPage() -> impl IntoView {
    view! { <Loading/> }
}
