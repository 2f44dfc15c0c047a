//! Plan catalog dialog for subscription upgrades.

use leptos::prelude::*;

use crate::net::types::PlanId;
use crate::state::profile::PLANS;

#[component]
pub fn PlanPicker(
    #[prop(into)] current: Signal<Option<PlanId>>,
    on_select: Callback<PlanId>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="modal modal--wide" role="dialog">
            <header class="modal__header">
                <h3>"Escolha seu plano"</h3>
                <button class="modal__close" title="Fechar" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </header>
            <div class="plans">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let id = plan.id;
                        let is_current = move || current.get() == Some(id);
                        view! {
                            <div class="plan" class:plan--popular=plan.popular>
                                {plan.popular.then(|| view! { <span class="plan__badge">"Mais popular"</span> })}
                                <h4 class="plan__name">{plan.name}</h4>
                                <p class="plan__price">{plan.price_label()} <span>"/mês"</span></p>
                                <ul class="plan__features">
                                    {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                                <button
                                    class="btn plan__select"
                                    disabled=is_current
                                    on:click=move |_| on_select.run(id)
                                >
                                    {move || if is_current() { "Plano atual" } else { "Selecionar" }}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
