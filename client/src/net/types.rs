//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Dates stay as the raw
//! strings the backend sends; formatting happens at render time so an
//! unexpected date shape never fails a whole list decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role assigned to accounts created through the public registration form.
pub const SELF_REGISTERED_ROLE: u8 = 1;

/// An authenticated user as returned by the "current user" endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
}

impl User {
    /// Uppercased first character of the name, for the sidebar avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

/// Login form payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account creation payload for the registration endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: u8,
}

impl Registration {
    /// Build a self-service registration with the default role.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), password: password.into(), role: SELF_REGISTERED_ROLE }
    }
}

/// Processing status of a generated report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Completed,
    Failed,
    /// Any status this client does not know; the row renders without a badge.
    #[serde(other)]
    Unknown,
}

/// A report as listed by `GET /api/reports`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub student_name: String,
    pub incident_date: String,
    pub incident_description: String,
    pub status: ReportStatus,
    pub created_at: String,
    /// Generated report text, present once processing completes.
    #[serde(default)]
    pub ai_report: Option<String>,
}

/// Report creation payload for `POST /api/reports`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub student_name: String,
    pub incident_date: String,
    pub incident_description: String,
}

/// Response of `GET /api/reports/{id}/download`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub download_url: String,
}

/// Subscription tier of an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    #[default]
    Free,
    Premium,
}

impl PlanId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }
}

/// Profile and plan usage as returned by `GET /api/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub plan: PlanId,
    #[serde(default)]
    pub plan_expires_at: Option<String>,
    #[serde(default)]
    pub reports_used: u32,
    #[serde(default)]
    pub reports_limit: u32,
}

/// Profile edit payload for `PUT /api/users/{id}`.
///
/// Password fields are omitted entirely unless a password change was requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Plan upgrade payload for `POST /api/subscription/upgrade`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    pub plan_id: PlanId,
}

/// Response of the upgrade endpoint; the browser is sent to the checkout page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeCheckout {
    #[serde(default)]
    pub checkout_url: Option<String>,
}
