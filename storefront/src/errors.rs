// gamevault/storefront/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use gamevault::VaultError;

pub const PAYMENT_FAILED_MESSAGE: &str = "Payment failed. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Payment Processing Error: {0}")]
  Payment(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// Upstream catalog failure. `message` is the generic text shown to the browser;
  /// the source is only logged.
  #[error("Upstream Catalog Error: {message}")]
  Upstream {
    message: &'static str,
    #[source]
    source: VaultError,
  },

  #[error("GameVault Error: {source}")]
  Vault {
    #[from]
    source: VaultError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Wraps a catalog failure behind a generic message for the response body.
  pub fn upstream(message: &'static str) -> impl FnOnce(VaultError) -> AppError {
    move |source| AppError::Upstream { message, source }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience in handlers
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<VaultError>() {
      Ok(vault_err) => AppError::from(vault_err),
      Err(other) => AppError::Internal(other.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Payment(m) => HttpResponse::PaymentRequired().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Upstream { message, source } => {
        tracing::error!(upstream_error = ?source, "Upstream catalog failure details");
        HttpResponse::InternalServerError().json(json!({"error": message}))
      }
      AppError::Vault { source } => vault_error_response(source),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

fn vault_error_response(err: &VaultError) -> HttpResponse {
  match err {
    VaultError::InvalidPaymentForm { .. }
    | VaultError::MissingBillingParam { .. }
    | VaultError::InvalidBillingParam { .. } => HttpResponse::BadRequest().json(json!({"error": err.to_string()})),
    VaultError::PaymentFailed(_) => HttpResponse::PaymentRequired().json(json!({"error": PAYMENT_FAILED_MESSAGE})),
    VaultError::InvalidTransition { .. } => HttpResponse::Conflict().json(json!({"error": err.to_string()})),
    VaultError::PurchaseNotFound(_) => HttpResponse::NotFound().json(json!({"error": err.to_string()})),
    VaultError::Upstream { .. } | VaultError::NonJsonResponse { .. } => {
      HttpResponse::InternalServerError().json(json!({"error": "Upstream catalog unavailable"}))
    }
    VaultError::CorruptStorage { .. } | VaultError::Serialization { .. } | VaultError::Internal(_) => {
      HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": err.to_string()}))
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
