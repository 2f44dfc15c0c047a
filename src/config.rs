//! Host configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("BIND_ADDR").ok().as_deref())
    }

    fn from_values(port: Option<&str>, bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { bind_addr: parse_bind_addr(bind_addr)?, port: parse_port(port)? })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse::<u16>().map_err(|_| ConfigError::InvalidPort(v.to_string())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let v = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BIND_ADDR);
    v.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(v.to_string()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
