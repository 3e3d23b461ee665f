// gamevault/core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Upstream catalog request failed: {message}")]
    Upstream {
        message: String,
        #[source]
        source: Option<AnyhowError>,
    },

    #[error("Upstream catalog returned a non-JSON response (content-type: {content_type:?})")]
    NonJsonResponse { content_type: Option<String>, body: String },

    #[error("Missing required billing parameter '{name}'")]
    MissingBillingParam { name: &'static str },

    #[error("Invalid billing parameter '{name}': {value:?}")]
    InvalidBillingParam { name: &'static str, value: String },

    #[error("Invalid payment form field '{field}': {message}")]
    InvalidPaymentForm { field: &'static str, message: String },

    #[error("Payment processing failed: {0}")]
    PaymentFailed(String),

    #[error("Billing session cannot '{action}' while {state}")]
    InvalidTransition { state: String, action: &'static str },

    #[error("Stored value under key '{key}' could not be decoded. Source: {source}")]
    CorruptStorage {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Value for key '{key}' could not be encoded. Source: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Purchase record {0} not found")]
    PurchaseNotFound(i64),

    #[error("Internal GameVault error: {0}")]
    Internal(String),
}

impl VaultError {
    /// Shorthand for an upstream failure that carries no underlying error.
    pub fn upstream(message: impl Into<String>) -> Self {
        VaultError::Upstream {
            message: message.into(),
            source: None,
        }
    }
}

// External failures (HTTP client, IO) arrive as anyhow errors and are treated as upstream failures.
impl From<AnyhowError> for VaultError {
    fn from(err: AnyhowError) -> Self {
        VaultError::Upstream {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

pub type VaultResult<T, E = VaultError> = std::result::Result<T, E>;
