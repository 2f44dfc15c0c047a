//! Backend endpoint configuration baked in at build time.
//!
//! The WASM bundle cannot read the host environment, so values come from
//! `option_env!` when the crate is compiled:
//! - `FESSOR_API_URL`: backend base URL, default `http://localhost:5005`
//! - `FESSOR_ME_PATH`: "current user" endpoint, default `/auth/me`
//! - `FESSOR_REGISTER_PATH`: account creation endpoint, default `/api/Users`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5005";
pub const DEFAULT_ME_PATH: &str = "/auth/me";
pub const DEFAULT_REGISTER_PATH: &str = "/api/Users";

/// Resolved backend location and the endpoint paths that vary across backend versions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub me_path: String,
    pub register_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

impl ApiConfig {
    /// Config from the variables present when this crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("FESSOR_API_URL"),
            option_env!("FESSOR_ME_PATH"),
            option_env!("FESSOR_REGISTER_PATH"),
        )
    }

    fn from_parts(base_url: Option<&str>, me_path: Option<&str>, register_path: Option<&str>) -> Self {
        Self {
            base_url: non_empty(base_url)
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_owned(),
            me_path: normalize_path(non_empty(me_path).unwrap_or(DEFAULT_ME_PATH)),
            register_path: normalize_path(non_empty(register_path).unwrap_or(DEFAULT_REGISTER_PATH)),
        }
    }

    /// Absolute URL for a backend endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, normalize_path(endpoint))
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') { path.to_owned() } else { format!("/{path}") }
}
