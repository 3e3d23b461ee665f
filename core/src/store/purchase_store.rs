// gamevault/core/src/store/purchase_store.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::local_storage::LocalStorage;
use crate::error::{VaultError, VaultResult};
use crate::models::PurchasedGame;

/// Key holding the serialized purchase sequence.
pub const PURCHASES_KEY: &str = "purchasedGames";

/// Repository for purchase records. UI-facing code depends only on this trait,
/// so a server-backed implementation can replace local storage.
#[async_trait]
pub trait PurchaseStore: Send + Sync {
  /// Appends one record at the end of the sequence and returns it as stored.
  async fn append(&self, purchase: PurchasedGame) -> VaultResult<PurchasedGame>;

  /// Every record, oldest first.
  async fn list(&self) -> VaultResult<Vec<PurchasedGame>>;

  /// Removes every record.
  async fn clear(&self) -> VaultResult<()>;

  async fn find(&self, purchase_id: i64) -> VaultResult<PurchasedGame> {
    self
      .list()
      .await?
      .into_iter()
      .find(|p| p.id == purchase_id)
      .ok_or(VaultError::PurchaseNotFound(purchase_id))
  }
}

/// Purchases kept as one JSON array under [`PURCHASES_KEY`].
#[derive(Debug, Clone)]
pub struct LocalPurchaseStore {
  storage: Arc<LocalStorage>,
}

impl LocalPurchaseStore {
  pub fn new(storage: Arc<LocalStorage>) -> Self {
    Self { storage }
  }
}

#[async_trait]
impl PurchaseStore for LocalPurchaseStore {
  async fn append(&self, mut purchase: PurchasedGame) -> VaultResult<PurchasedGame> {
    // Read-modify-write without a lock spanning both halves.
    let mut purchases = self.list().await?;
    // Ids are timestamps; two purchases in the same millisecond must still be addressable.
    if purchases.iter().any(|p| p.id == purchase.id) {
      let next = purchases.iter().map(|p| p.id).max().unwrap_or(purchase.id) + 1;
      debug!("Purchase id {} already stored, using {}.", purchase.id, next);
      purchase.id = next;
    }
    debug!("Appending purchase {} to {} existing record(s).", purchase.id, purchases.len());
    purchases.push(purchase.clone());
    self.storage.set_json(PURCHASES_KEY, &purchases)?;
    Ok(purchase)
  }

  async fn list(&self) -> VaultResult<Vec<PurchasedGame>> {
    Ok(self.storage.get_json(PURCHASES_KEY)?.unwrap_or_default())
  }

  async fn clear(&self) -> VaultResult<()> {
    let removed = self.storage.remove_item(PURCHASES_KEY);
    info!("Purchase library cleared (had stored data: {}).", removed.is_some());
    Ok(())
  }
}

/// Serialized form of a purchase sequence, as kept in storage.
pub fn encode_purchases(purchases: &[PurchasedGame]) -> VaultResult<String> {
  serde_json::to_string(purchases).map_err(|source| VaultError::Serialization {
    key: PURCHASES_KEY.to_string(),
    source,
  })
}

pub fn decode_purchases(raw: &str) -> VaultResult<Vec<PurchasedGame>> {
  serde_json::from_str(raw).map_err(|source| VaultError::CorruptStorage {
    key: PURCHASES_KEY.to_string(),
    source,
  })
}
