//! Report history with status badges, detail modal, and downloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is requested once the session has resolved to a signed-in user.
//! Downloads go to the URL the backend hands out, in a new tab.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::components::notice::{Loading, Notice, NoticeBanner};
use crate::components::report_detail::{ReportDetail, StatusBadge};
use crate::net::error::ApiError;
use crate::routing::Route;
use crate::state::reports::{ReportsState, can_download};
use crate::state::session::use_session;
use crate::util::browser;
use crate::util::format::{format_datetime, preview};

pub(crate) const DOWNLOAD_UNAVAILABLE: &str = "O download deste relatório não está disponível.";

/// URL to open for a download request, or the notice explaining why not.
pub(crate) fn download_target(result: Result<Option<String>, ApiError>) -> Result<String, Notice> {
    match result {
        Ok(Some(url)) => Ok(url),
        Ok(None) => Err(Notice::Error(DOWNLOAD_UNAVAILABLE.to_owned())),
        Err(e) => Err(Notice::Error(e.user_message())),
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = use_session();
    let state = session.signal();
    let api = session.api().clone();
    let reports = RwSignal::new(ReportsState::default());
    let requested = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let fetch_api = api.clone();
    Effect::new(move || {
        let ready = state.with(|s| !s.loading && s.is_authenticated());
        if !ready || requested.get_untracked() {
            return;
        }
        requested.set(true);
        let api = fetch_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_reports().await;
            reports.update(|s| s.finish_load(result));
        });
    });

    let on_download = Callback::new(move |report_id: String| {
        notice.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match download_target(api.report_download_url(&report_id).await) {
                Ok(url) => browser::open_in_new_tab(&url),
                Err(failure) => {
                    log::warn!("report {report_id} download failed: {}", failure.text());
                    notice.set(Some(failure));
                }
            }
        });
    });
    let on_view = Callback::new(move |report_id: String| reports.update(|s| s.select(&report_id)));
    let on_close = Callback::new(move |()| reports.update(ReportsState::close_detail));

    view! {
        <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
            <div class="page">
                <header class="page__header">
                    <h2>"Histórico de Relatórios"</h2>
                    <p class="page__subtitle">
                        "Visualize todos os relatórios que você gerou e acompanhe o status de processamento."
                    </p>
                </header>

                <NoticeBanner notice=notice/>
                <Show when=move || reports.with(|s| s.error.is_some())>
                    <div class="notice notice--error" role="alert">
                        {move || reports.with(|s| s.error.clone().unwrap_or_default())}
                    </div>
                </Show>

                <Show when=move || !reports.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                    <Show
                        when=move || reports.with(|s| !s.items.is_empty())
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <p>
                                        "Você ainda não gerou nenhum relatório. Comece criando seu primeiro relatório."
                                    </p>
                                    <a href=Route::Home.path() class="btn">"Criar Relatório"</a>
                                </div>
                            }
                        }
                    >
                        <table class="reports-table">
                            <thead>
                                <tr>
                                    <th>"Aluno"</th>
                                    <th>"Data do Ocorrido"</th>
                                    <th>"Status"</th>
                                    <th>"Criado em"</th>
                                    <th>"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    reports
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|report| {
                                            let view_id = report.id.clone();
                                            let download_id = report.id.clone();
                                            let downloadable = can_download(&report);
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="reports-table__student">{report.student_name}</div>
                                                        <div class="reports-table__preview">
                                                            {preview(&report.incident_description)}
                                                        </div>
                                                    </td>
                                                    <td>{format_datetime(&report.incident_date)}</td>
                                                    <td>
                                                        <StatusBadge status=report.status/>
                                                    </td>
                                                    <td>{format_datetime(&report.created_at)}</td>
                                                    <td class="reports-table__actions">
                                                        <button class="btn btn--link" on:click=move |_| on_view.run(view_id.clone())>
                                                            "Visualizar"
                                                        </button>
                                                        {downloadable
                                                            .then(|| {
                                                                view! {
                                                                    <button
                                                                        class="btn btn--link"
                                                                        on:click=move |_| on_download.run(download_id.clone())
                                                                    >
                                                                        "Baixar"
                                                                    </button>
                                                                }
                                                            })}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>

                {move || reports.with(|s| s.selected.clone()).map(|report| view! { <ReportDetail report=report on_close=on_close on_download=on_download/> })}
            </div>
        </Show>
    }
}
