//! Profile page: plan usage, upgrade, and account edits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `GET /api/me` for the profile and usage counters. Edits go to
//! `PUT /api/users/{id}`; upgrades hand the browser to the checkout URL the
//! backend returns.

use leptos::prelude::*;

use crate::components::notice::{Loading, Notice, NoticeBanner};
use crate::components::plan_picker::PlanPicker;
use crate::net::http::ApiClient;
use crate::net::types::PlanId;
use crate::state::profile::{ProfileForm, ProfileState};
use crate::state::session::use_session;
use crate::util::browser;
use crate::util::format::{format_date, usage_bar_width, usage_percent};

fn load_profile(api: ApiClient, profile: RwSignal<ProfileState>, form: RwSignal<ProfileForm>) {
    leptos::task::spawn_local(async move {
        let result = api.fetch_profile().await;
        if let Some(prefill) = profile.try_update(|s| s.finish_load(result)).flatten() {
            form.set(prefill);
        }
    });
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let state = session.signal();
    let api = session.api().clone();
    let profile = RwSignal::new(ProfileState::default());
    let form = RwSignal::new(ProfileForm::default());
    let notice = RwSignal::new(None::<Notice>);
    let requested = RwSignal::new(false);

    let fetch_api = api.clone();
    Effect::new(move || {
        let ready = state.with(|s| !s.loading && s.is_authenticated());
        if !ready || requested.get_untracked() {
            return;
        }
        requested.set(true);
        load_profile(fetch_api.clone(), profile, form);
    });

    let save_api = api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if profile.with(|s| s.saving) {
            return;
        }
        let Some(user_id) = profile.with(|s| s.profile.as_ref().map(|p| p.id.clone())) else {
            return;
        };
        let update = match form.with(ProfileForm::validate) {
            Ok(update) => update,
            Err(e) => {
                notice.set(Some(Notice::Error(e.user_message())));
                return;
            }
        };
        profile.update(ProfileState::begin_save);
        notice.set(None);

        let api = save_api.clone();
        leptos::task::spawn_local(async move {
            match api.update_profile(&user_id, &update).await {
                Ok(_) => {
                    notice.set(Some(Notice::Success("Perfil atualizado com sucesso!".to_owned())));
                    form.update(ProfileForm::clear_passwords);
                    load_profile(api, profile, form);
                }
                Err(e) => notice.set(Some(Notice::Error(e.user_message()))),
            }
            profile.update(|s| s.saving = false);
        });
    };

    let on_select_plan = Callback::new(move |plan_id: PlanId| {
        profile.update(|s| s.show_plans = false);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.upgrade_plan(plan_id).await {
                Ok(Some(url)) => browser::redirect(&url),
                Ok(None) => {
                    log::warn!("upgrade to {} returned no checkout url", plan_id.as_str());
                    notice.set(Some(Notice::Error("Não foi possível iniciar o pagamento.".to_owned())));
                }
                Err(e) => notice.set(Some(Notice::Error(e.user_message()))),
            }
        });
    });
    let on_close_plans = Callback::new(move |()| profile.update(|s| s.show_plans = false));
    let current_plan = Signal::derive(move || profile.with(|s| s.profile.as_ref().map(|p| p.plan)));

    let plan_name = move || profile.with(|s| s.current_plan().map(|p| p.name).unwrap_or_default());
    let usage = move || profile.with(|s| s.profile.as_ref().map_or((0, 0), |p| (p.reports_used, p.reports_limit)));
    let expiry = move || profile.with(|s| s.profile.as_ref().and_then(|p| p.plan_expires_at.as_deref().map(format_date)));

    view! {
        <Show
            when=move || !state.with(|s| s.loading) && !profile.with(|s| s.loading)
            fallback=|| view! { <Loading/> }
        >
            <div class="page">
                <header class="page__header">
                    <h2>"Meu Perfil"</h2>
                    <p class="page__subtitle">"Gerencie suas informações e seu plano."</p>
                </header>

                <NoticeBanner notice=notice/>
                <Show when=move || profile.with(|s| s.error.is_some())>
                    <div class="notice notice--error" role="alert">
                        {move || profile.with(|s| s.error.clone().unwrap_or_default())}
                    </div>
                </Show>

                <section class="card plan-card">
                    <h3>{plan_name}</h3>
                    <p class="plan-card__usage">
                        {move || {
                            let (used, limit) = usage();
                            format!("{used} de {limit} relatórios usados ({}%)", usage_percent(used, limit))
                        }}
                    </p>
                    <div class="usage-bar">
                        <div
                            class="usage-bar__fill"
                            style:width=move || {
                                let (used, limit) = usage();
                                format!("{}%", usage_bar_width(used, limit))
                            }
                        ></div>
                    </div>
                    {move || expiry().map(|date| view! { <p class="plan-card__expiry">"Válido até " {date}</p> })}
                    <Show when=move || profile.with(ProfileState::can_upgrade)>
                        <button class="btn" on:click=move |_| profile.update(|s| s.show_plans = true)>
                            "Fazer upgrade"
                        </button>
                    </Show>
                </section>

                <form class="card profile-form" on:submit=on_submit.clone()>
                    <h3>"Informações da conta"</h3>
                    <label for="profileName">"Nome"</label>
                    <input
                        id="profileName"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <label for="profileEmail">"Email"</label>
                    <input
                        id="profileEmail"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <h4>"Alterar senha"</h4>
                    <label for="currentPassword">"Senha atual"</label>
                    <input
                        id="currentPassword"
                        type="password"
                        prop:value=move || form.with(|f| f.current_password.clone())
                        on:input=move |ev| form.update(|f| f.current_password = event_target_value(&ev))
                    />
                    <label for="newPassword">"Nova senha"</label>
                    <input
                        id="newPassword"
                        type="password"
                        prop:value=move || form.with(|f| f.new_password.clone())
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                    />
                    <label for="confirmPassword">"Confirmar nova senha"</label>
                    <input
                        id="confirmPassword"
                        type="password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || profile.with(|s| s.saving)>
                        {move || if profile.with(|s| s.saving) { "Salvando..." } else { "Salvar alterações" }}
                    </button>
                </form>

                <Show when=move || profile.with(|s| s.show_plans)>
                    <PlanPicker current=current_plan on_select=on_select_plan on_close=on_close_plans/>
                </Show>
            </div>
        </Show>
    }
}
