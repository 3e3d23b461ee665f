// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use gamevault::billing::{BillingData, BillingParams, PaymentForm, PaymentMethod, PaymentSimulator};
use gamevault::{CatalogSource, GameItem, PurchasedGame, VaultError, VaultResult};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Catalog fixtures ---

pub fn game(id: i64, name: &str, category: &str, platform: &str) -> GameItem {
  GameItem {
    id,
    game_name: name.to_string(),
    category: category.to_string(),
    price: 999.0,
    image_url: format!("/games/{}.jpg", id),
    user_id: None,
    description: format!("{} is a {} game.", name, category.to_lowercase()),
    platform: platform.to_string(),
  }
}

pub fn sample_catalog() -> Vec<GameItem> {
  vec![
    game(1, "God of War: Ragnarok", "RPG", "PS5"),
    game(2, "Valorant", "Shooter", "PC"),
    game(3, "Horizon Forbidden West", "RPG", "PS5"),
    game(4, "Apex Legends", "Shooter", "PC"),
    game(5, "Assetto Corsa", "Racing", "PC"),
  ]
}

/// Canned upstream payloads, counting how often each action is called.
#[derive(Default)]
pub struct FakeCatalogSource {
  pub list_body: Value,
  pub search_body: Value,
  pub fail_with: Option<String>,
  pub list_calls: AtomicUsize,
  pub search_calls: AtomicUsize,
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
    self.list_calls.fetch_add(1, Ordering::SeqCst);
    match &self.fail_with {
      Some(m) => Err(VaultError::upstream(m.clone())),
      None => Ok(self.list_body.clone()),
    }
  }

  async fn search_catalog(&self, _keyword: &str) -> VaultResult<Value> {
    self.search_calls.fetch_add(1, Ordering::SeqCst);
    match &self.fail_with {
      Some(m) => Err(VaultError::upstream(m.clone())),
      None => Ok(self.search_body.clone()),
    }
  }
}

// --- Billing fixtures ---

pub fn complete_params() -> BillingParams {
  BillingParams::from_query("gameId=7&gameName=Grand%20Theft%20Auto%3A%20V&price=1499&platform=PC&imageUrl=%2Fgames%2Fgta.jpg")
}

pub fn card_form() -> PaymentForm {
  PaymentForm {
    payment: PaymentMethod::Card {
      cardholder_name: "Juan Dela Cruz".to_string(),
      card_number: "4111111111111111".to_string(),
      expiry_date: "1228".to_string(),
      cvv: "123".to_string(),
    },
    email: "juan@example.com".to_string(),
    country: "Philippines".to_string(),
    zip_code: "1000".to_string(),
    terms_accepted: true,
  }
}

pub fn gcash_form() -> PaymentForm {
  PaymentForm {
    payment: PaymentMethod::GCash {
      mobile_number: "09171234567".to_string(),
      reference_number: "GC-889900".to_string(),
    },
    ..card_form()
  }
}

/// Gateway that always declines, counting attempts.
#[derive(Default)]
pub struct DecliningGateway {
  pub attempts: AtomicUsize,
}

#[async_trait]
impl PaymentSimulator for DecliningGateway {
  async fn process(&self, _order: &BillingData, _payment: &PaymentMethod) -> VaultResult<()> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    Err(VaultError::Internal("gateway unavailable".to_string()))
  }
}

// --- Library fixtures ---

pub fn purchase(id: i64, name: &str, category: &str, platform: &str, price: f64, date: &str) -> PurchasedGame {
  PurchasedGame {
    id,
    game_id: id * 10,
    game_name: name.to_string(),
    price,
    platform: platform.to_string(),
    image_url: "/placeholder.png".to_string(),
    purchase_date: date.to_string(),
    user_id: "current-user-id".to_string(),
    download_url: format!("/download/{}", name.to_lowercase().replace(' ', "-")),
    playable: true,
    category: category.to_string(),
    payment_method: "card".to_string(),
    transaction_id: format!("TXN{}", id),
  }
}

pub fn upstream_record(fields: Value) -> Value {
  json!({ "data": [fields] })
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
