//! REST endpoints of the reports backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session endpoints sit behind the [`AuthApi`] trait so the session store can
//! run against a scripted backend in tests. Report and profile endpoints are
//! plain methods on [`ApiClient`] used directly by pages.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{
    Credentials, DownloadLink, NewReport, PlanId, ProfileUpdate, Registration, Report, UpgradeCheckout, UpgradeRequest,
    User, UserProfile,
};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const REPORTS_ENDPOINT: &str = "/api/reports";
pub const PROFILE_ENDPOINT: &str = "/api/me";
pub const UPGRADE_ENDPOINT: &str = "/api/subscription/upgrade";

pub(crate) fn report_download_endpoint(report_id: &str) -> String {
    format!("/api/reports/{report_id}/download")
}

pub(crate) fn user_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}")
}

/// Backend operations the session store depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Post credentials; the backend sets the session cookie.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// Ask the backend to drop the session cookie.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Identity behind the current cookie; `None` when the body is empty.
    async fn current_user(&self) -> Result<Option<User>, ApiError>;

    /// Create an account. Never establishes a session.
    async fn register(&self, payload: &Registration) -> Result<(), ApiError>;
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post::<_, serde_json::Value>(LOGIN_ENDPOINT, credentials).await.map(|_| ())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty::<serde_json::Value>(LOGOUT_ENDPOINT).await.map(|_| ())
    }

    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let path = self.config().me_path.clone();
        self.get::<User>(&path).await
    }

    async fn register(&self, payload: &Registration) -> Result<(), ApiError> {
        let path = self.config().register_path.clone();
        self.post::<_, serde_json::Value>(&path, payload).await.map(|_| ())
    }
}

impl ApiClient {
    /// Reports created by the current user. An empty body is an empty list.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode errors.
    pub async fn fetch_reports(&self) -> Result<Vec<Report>, ApiError> {
        Ok(self.get::<Vec<Report>>(REPORTS_ENDPOINT).await?.unwrap_or_default())
    }

    /// Submit a new incident for report generation.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode errors.
    pub async fn create_report(&self, report: &NewReport) -> Result<(), ApiError> {
        self.post::<_, serde_json::Value>(REPORTS_ENDPOINT, report).await.map(|_| ())
    }

    /// Download link for a completed report, if the backend provided one.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode errors.
    pub async fn report_download_url(&self, report_id: &str) -> Result<Option<String>, ApiError> {
        let link = self.get::<DownloadLink>(&report_download_endpoint(report_id)).await?;
        Ok(link.map(|l| l.download_url))
    }

    /// Profile and plan usage of the current user.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode errors.
    pub async fn fetch_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        self.get::<UserProfile>(PROFILE_ENDPOINT).await
    }

    /// Save profile edits. Returns whether the backend acknowledged with a body.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode errors.
    pub async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<bool, ApiError> {
        let body = self.put::<_, serde_json::Value>(&user_endpoint(user_id), update).await?;
        Ok(body.is_some())
    }

    /// Start a plan upgrade; returns the checkout URL to send the browser to.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode errors.
    pub async fn upgrade_plan(&self, plan_id: PlanId) -> Result<Option<String>, ApiError> {
        let checkout = self.post::<_, UpgradeCheckout>(UPGRADE_ENDPOINT, &UpgradeRequest { plan_id }).await?;
        Ok(checkout.and_then(|c| c.checkout_url))
    }
}
