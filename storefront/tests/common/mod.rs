// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use gamevault::billing::{BillingData, PaymentMethod, PaymentSimulator, SimulatedGateway};
use gamevault::{CatalogSource, VaultError, VaultResult};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use storefront::{AppConfig, AppState};
use tracing::Level;

/// Builds the actix service for `$state` with every route mounted.
#[macro_export]
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(storefront::configure_app_routes),
    )
    .await
  };
}

// --- Upstream fixtures ---

pub fn upstream_catalog() -> Value {
  json!({
    "data": [
      { "id": 1, "gameName": "God of War: Ragnarok", "category": "RPG", "price": "999", "platform": "PS5",
        "imageUrl": "/games/gow.jpg", "description": "Norse mythology action" },
      { "id": "2", "game_name": "Valorant", "category": "Shooter", "price": 0, "platform_name": "PC" },
      { "id": 3, "gameName": "Horizon Forbidden West", "category": "RPG", "price": 2499.5, "platform": "PS5" },
      { "id": 4, "gameName": "Apex Legends", "category": "Shooter", "price": "abc", "platform": "PC" },
      { "id": 5, "gameName": "Assetto Corsa", "category": "Racing", "price": null, "image_url": "/games/ac.jpg" }
    ]
  })
}

/// Canned upstream bodies, or a transport failure for every call.
#[derive(Default)]
pub struct FakeCatalogSource {
  pub list_body: Value,
  pub search_body: Value,
  pub fail_with: Option<String>,
}

impl FakeCatalogSource {
  pub fn with_list(list_body: Value) -> Arc<Self> {
    Arc::new(Self {
      list_body,
      ..Default::default()
    })
  }

  pub fn with_search(search_body: Value) -> Arc<Self> {
    Arc::new(Self {
      search_body,
      ..Default::default()
    })
  }

  pub fn failing(message: &str) -> Arc<Self> {
    Arc::new(Self {
      fail_with: Some(message.to_string()),
      ..Default::default()
    })
  }
}

#[async_trait]
impl CatalogSource for FakeCatalogSource {
  async fn fetch_catalog(&self) -> VaultResult<Value> {
    match &self.fail_with {
      Some(m) => Err(VaultError::upstream(m.clone())),
      None => Ok(self.list_body.clone()),
    }
  }

  async fn search_catalog(&self, _keyword: &str) -> VaultResult<Value> {
    match &self.fail_with {
      Some(m) => Err(VaultError::upstream(m.clone())),
      None => Ok(self.search_body.clone()),
    }
  }
}

/// Gateway that always declines.
pub struct DecliningGateway;

#[async_trait]
impl PaymentSimulator for DecliningGateway {
  async fn process(&self, _order: &BillingData, _payment: &PaymentMethod) -> VaultResult<()> {
    Err(VaultError::PaymentFailed("card declined".to_string()))
  }
}

// --- State builders ---

pub fn state_with(source: Arc<dyn CatalogSource>, payment: Arc<dyn PaymentSimulator>) -> AppState {
  AppState::with_parts(Arc::new(AppConfig::for_tests()), source, payment)
}

pub fn state_with_source(source: Arc<dyn CatalogSource>) -> AppState {
  state_with(source, Arc::new(SimulatedGateway::new(Duration::ZERO)))
}

pub fn default_state() -> AppState {
  state_with_source(FakeCatalogSource::with_list(upstream_catalog()))
}

// --- Billing fixtures ---

pub const COMPLETE_BILLING_QUERY: &str =
  "gameId=7&gameName=Grand%20Theft%20Auto%3A%20V&price=1499&platform=PC&imageUrl=%2Fgames%2Fgta.jpg";

pub fn card_form_json() -> Value {
  json!({
    "payment": {
      "method": "card",
      "cardholderName": "Juan Dela Cruz",
      "cardNumber": "4111111111111111",
      "expiryDate": "1228",
      "cvv": "123"
    },
    "email": "juan@example.com",
    "country": "Philippines",
    "zipCode": "1000",
    "termsAccepted": true
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
