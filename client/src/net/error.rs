//! Error taxonomy shared by the HTTP wrapper, session store, and forms.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, HTTP statuses, undecodable bodies, and client-side
//! validation are distinct variants so forms can tell an unreachable server
//! apart from rejected credentials. Only views turn these into text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by backend calls and local form validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (host down, DNS, CORS, TLS).
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The backend answered with a non-empty body that is not the expected JSON.
    #[error("malformed response: {raw}")]
    MalformedResponse { raw: String },

    /// The request payload could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the server could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::NetworkUnreachable(_))
    }

    /// Whether the backend refused the caller's identity.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403 })
    }

    /// Localized message shown by forms.
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkUnreachable(_) => {
                "Não foi possível conectar ao servidor. Verifique sua conexão e tente novamente.".to_owned()
            }
            Self::Http { status: 401 | 403 } => "E-mail ou senha inválidos.".to_owned(),
            Self::Http { status: 404 } => "Recurso não encontrado.".to_owned(),
            Self::Http { status } if *status >= 500 => {
                format!("O servidor encontrou um erro ({status}). Tente novamente mais tarde.")
            }
            Self::Http { status } => format!("A requisição foi recusada pelo servidor ({status})."),
            Self::MalformedResponse { raw } => format!("Resposta inválida do servidor: {raw}"),
            Self::Encode(_) => "Não foi possível preparar a requisição.".to_owned(),
            Self::Validation(message) => message.clone(),
        }
    }
}
