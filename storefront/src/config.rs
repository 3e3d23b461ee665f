// gamevault/storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://ipt-final-topaz.vercel.app/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub app_base_url: String,

  // Upstream catalog service
  pub upstream_base_url: String,
  pub upstream_api_key: String,

  // Billing simulator timings
  pub billing_processing_delay: Duration,
  pub library_redirect_delay: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };
    let get_millis = |var_name: &str, default: u64| -> Result<Duration> {
      match env::var(var_name) {
        Ok(raw) => raw
          .trim()
          .parse::<u64>()
          .map(Duration::from_millis)
          .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e))),
        Err(_) => Ok(Duration::from_millis(default)),
      }
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));

    let upstream_base_url = get_env("UPSTREAM_BASE_URL")
      .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string())
      .trim_end_matches('/')
      .to_string();
    // An unset key is sent as an empty header; the upstream decides what that means.
    let upstream_api_key = get_env("UPSTREAM_API_KEY").unwrap_or_else(|_| {
      tracing::warn!("UPSTREAM_API_KEY is not set; upstream requests will carry an empty x-api-key.");
      String::new()
    });

    let billing_processing_delay = get_millis("BILLING_PROCESSING_DELAY_MS", 2000)?;
    let library_redirect_delay = get_millis("LIBRARY_REDIRECT_DELAY_MS", 2000)?;

    tracing::info!("Application configuration loaded successfully.");
    tracing::debug!(
      upstream = %upstream_base_url,
      processing_delay_ms = billing_processing_delay.as_millis() as u64,
      "Loaded config details"
    );

    Ok(Self {
      server_host,
      server_port,
      app_base_url,
      upstream_base_url,
      upstream_api_key,
      billing_processing_delay,
      library_redirect_delay,
    })
  }

  /// Configuration for in-process tests: no network, no artificial delays.
  pub fn for_tests() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      app_base_url: "http://127.0.0.1".to_string(),
      upstream_base_url: "http://upstream.invalid/api".to_string(),
      upstream_api_key: "test-key".to_string(),
      billing_processing_delay: Duration::ZERO,
      library_redirect_delay: Duration::ZERO,
    }
  }
}
