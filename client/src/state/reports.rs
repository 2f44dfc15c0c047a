//! Report history and report-creation form state.
//!
//! DESIGN
//! ======
//! History list state is page-scoped; the creation form validates locally
//! so an incomplete submission never reaches the backend.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::error::ApiError;
use crate::net::types::{NewReport, Report, ReportStatus};

/// History page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportsState {
    pub items: Vec<Report>,
    pub loading: bool,
    pub error: Option<String>,
    /// Report shown in the detail modal.
    pub selected: Option<Report>,
}

impl Default for ReportsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, selected: None }
    }
}

impl ReportsState {
    /// Apply the outcome of a list fetch.
    pub fn finish_load(&mut self, result: Result<Vec<Report>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
        self.loading = false;
    }

    pub fn select(&mut self, report_id: &str) {
        self.selected = self.items.iter().find(|r| r.id == report_id).cloned();
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}

/// Badge text for a report status; `None` for statuses without a badge.
pub fn status_label(status: ReportStatus) -> Option<&'static str> {
    match status {
        ReportStatus::Pending => Some("Processando"),
        ReportStatus::Completed => Some("Concluído"),
        ReportStatus::Failed => Some("Erro"),
        ReportStatus::Unknown => None,
    }
}

/// Badge modifier class for a report status.
pub fn status_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Pending => "badge badge--pending",
        ReportStatus::Completed => "badge badge--completed",
        ReportStatus::Failed => "badge badge--failed",
        ReportStatus::Unknown => "badge",
    }
}

/// Only finished reports have a document to download.
pub fn can_download(report: &Report) -> bool {
    report.status == ReportStatus::Completed
}

/// Report-creation form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub student_name: String,
    pub incident_date: String,
    pub incident_description: String,
}

impl ReportForm {
    /// Trimmed payload, or the first missing field.
    ///
    /// # Errors
    ///
    /// `Validation` naming the first empty field.
    pub fn validate(&self) -> Result<NewReport, ApiError> {
        let student_name = required(&self.student_name, "Informe o nome do aluno.")?;
        let incident_date = required(&self.incident_date, "Informe a data do ocorrido.")?;
        let incident_description = required(&self.incident_description, "Descreva o ocorrido.")?;
        Ok(NewReport { student_name, incident_date, incident_description })
    }
}

pub(crate) fn required(value: &str, message: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() { Err(ApiError::validation(message)) } else { Ok(value.to_owned()) }
}
