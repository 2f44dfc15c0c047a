//! Modal showing one report with its generated text.

use leptos::prelude::*;

use crate::net::types::{Report, ReportStatus};
use crate::state::reports::{can_download, status_class, status_label};
use crate::util::format::format_datetime;

/// Status pill; statuses without a label render nothing.
#[component]
pub fn StatusBadge(status: ReportStatus) -> impl IntoView {
    status_label(status).map(|label| view! { <span class=status_class(status)>{label}</span> })
}

#[component]
pub fn ReportDetail(report: Report, on_close: Callback<()>, on_download: Callback<String>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let downloadable = can_download(&report);
    let Report { id, student_name, incident_date, incident_description, status, created_at, ai_report } = report;

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="modal" role="dialog" tabindex="-1" on:keydown=on_keydown>
            <header class="modal__header">
                <h3>"Relatório - " {student_name}</h3>
                <button class="modal__close" title="Fechar" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </header>
            <dl class="modal__meta">
                <dt>"Data do Ocorrido"</dt>
                <dd>{format_datetime(&incident_date)}</dd>
                <dt>"Status"</dt>
                <dd><StatusBadge status=status/></dd>
                <dt>"Criado em"</dt>
                <dd>{format_datetime(&created_at)}</dd>
            </dl>
            <section class="modal__section">
                <h4>"Descrição do Ocorrido"</h4>
                <p>{incident_description}</p>
            </section>
            {ai_report
                .map(|text| {
                    view! {
                        <section class="modal__section">
                            <h4>"Relatório Gerado"</h4>
                            <p class="modal__report">{text}</p>
                        </section>
                    }
                })}
            <footer class="modal__footer">
                {downloadable
                    .then(|| {
                        view! {
                            <button class="btn" on:click=move |_| on_download.run(id.clone())>
                                "Baixar PDF"
                            </button>
                        }
                    })}
                <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                    "Fechar"
                </button>
            </footer>
        </div>
    }
}
