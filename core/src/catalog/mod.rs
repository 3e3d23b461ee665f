// gamevault/core/src/catalog/mod.rs

//! Catalog access: the upstream source seam, normalization of its payloads,
//! and the dashboard's filtered view over the result.

pub mod normalizer;
pub mod view;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::VaultResult;
use crate::models::GameItem;

pub use normalizer::{coerce_price, normalize, normalize_all};
pub use view::{
  distinct_categories, filter_by_category, purchase_link, search_games, CatalogView, Page, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};

/// Where raw catalog payloads come from. The production implementation talks
/// HTTP to the upstream service; tests substitute canned JSON.
#[async_trait]
pub trait CatalogSource: Send + Sync {
  /// Raw JSON body of the upstream "list all games" action.
  async fn fetch_catalog(&self) -> VaultResult<Value>;

  /// Raw JSON body of the upstream "search" action for `keyword`.
  async fn search_catalog(&self, keyword: &str) -> VaultResult<Value>;
}

/// The list/search operations exposed to the front end. Stateless: every call
/// goes to the source, nothing is cached.
#[derive(Clone)]
pub struct Catalog {
  source: Arc<dyn CatalogSource>,
}

impl Catalog {
  pub fn new(source: Arc<dyn CatalogSource>) -> Self {
    Self { source }
  }

  #[instrument(name = "catalog::list_games", skip(self))]
  pub async fn list_games(&self) -> VaultResult<Vec<GameItem>> {
    let body = self.source.fetch_catalog().await?;
    let games = games_from_list_response(&body);
    info!("Catalog listing normalized {} games.", games.len());
    Ok(games)
  }

  #[instrument(name = "catalog::search_games", skip(self))]
  pub async fn search_games(&self, keyword: &str) -> VaultResult<Vec<GameItem>> {
    let body = self.source.search_catalog(keyword).await?;
    let games = games_from_search_response(&body);
    info!("Catalog search for '{}' returned {} result(s).", keyword, games.len());
    Ok(games)
  }
}

/// `{ "data": [...] }` → normalized games. A missing or non-array `data` is an empty catalog.
pub fn games_from_list_response(body: &Value) -> Vec<GameItem> {
  body.get("data").map(normalize_all).unwrap_or_default()
}

/// `{ "ok": true, "item": {...} }` → one normalized game; anything else → none.
pub fn games_from_search_response(body: &Value) -> Vec<GameItem> {
  let ok = body.get("ok").map(is_truthy).unwrap_or(false);
  match body.get("item") {
    Some(item @ Value::Object(_)) if ok => vec![normalize(item)],
    _ => Vec::new(),
  }
}

fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}
