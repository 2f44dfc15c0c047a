//! Home page: greeting and the incident report form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Submissions go to `POST /api/reports`; the
//! generated report later shows up in the history page.

use leptos::prelude::*;

use crate::components::notice::{Loading, Notice, NoticeBanner};
use crate::state::reports::ReportForm;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let state = session.signal();
    let api = session.api().clone();
    let form = RwSignal::new(ReportForm::default());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match form.with(ReportForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                notice.set(Some(Notice::Error(e.user_message())));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_report(&payload).await {
                Ok(()) => {
                    form.set(ReportForm::default());
                    notice.set(Some(Notice::Success(
                        "Relatório enviado! Acompanhe o processamento no histórico.".to_owned(),
                    )));
                }
                Err(e) => notice.set(Some(Notice::Error(e.user_message()))),
            }
            busy.set(false);
        });
    };

    let greeting = move || state.with(|s| s.user.as_ref().map(|u| format!("Bem-vindo, {}!", u.name)).unwrap_or_default());

    view! {
        <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
            <div class="page">
                <header class="page__header">
                    <h2>"Gerar Relatório"</h2>
                    <p class="page__subtitle">{greeting}</p>
                </header>
                <NoticeBanner notice=notice/>
                <form class="report-form" on:submit=on_submit.clone()>
                    <label for="studentName">"Nome do Aluno"</label>
                    <input
                        id="studentName"
                        type="text"
                        prop:value=move || form.with(|f| f.student_name.clone())
                        on:input=move |ev| form.update(|f| f.student_name = event_target_value(&ev))
                    />
                    <label for="incidentDate">"Data do Ocorrido"</label>
                    <input
                        id="incidentDate"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.incident_date.clone())
                        on:input=move |ev| form.update(|f| f.incident_date = event_target_value(&ev))
                    />
                    <label for="incidentDescription">"Descrição do Ocorrido"</label>
                    <textarea
                        id="incidentDescription"
                        rows="6"
                        prop:value=move || form.with(|f| f.incident_description.clone())
                        on:input=move |ev| form.update(|f| f.incident_description = event_target_value(&ev))
                    ></textarea>
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Enviando..." } else { "Gerar Relatório" }}
                    </button>
                </form>
            </div>
        </Show>
    }
}
