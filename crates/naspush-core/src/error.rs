//! Shared error type across naspush crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Startup configuration is missing or invalid. Fatal before listening.
    #[error("config: {0}")]
    Config(String),
    /// Inbound webhook body is unreadable, unparsable, or has no text.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The outbound transport itself failed (DNS/connect/timeout/body).
    /// Distinct from a completed exchange that carries a non-2xx status.
    #[error("upstream send failed: {0}")]
    Upstream(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status the gateway answers with when this error reaches a handler.
    pub fn status(&self) -> u16 {
        match self {
            RelayError::BadRequest(_) => 400,
            RelayError::Config(_) | RelayError::Upstream(_) | RelayError::Internal(_) => 500,
        }
    }
}
