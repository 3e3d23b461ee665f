// gamevault/core/src/store/local_storage.rs
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::{VaultError, VaultResult};

/// String key/value storage with browser local-storage semantics.
///
/// Each call takes the lock independently. Callers doing read-modify-write
/// across two calls get last-write-wins behaviour, exactly like two tabs
/// sharing one browser profile.
#[derive(Debug, Default)]
pub struct LocalStorage {
  items: RwLock<HashMap<String, String>>,
}

impl LocalStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get_item(&self, key: &str) -> Option<String> {
    self.items.read().get(key).cloned()
  }

  pub fn set_item(&self, key: &str, value: impl Into<String>) {
    self.items.write().insert(key.to_string(), value.into());
  }

  pub fn remove_item(&self, key: &str) -> Option<String> {
    self.items.write().remove(key)
  }

  pub fn len(&self) -> usize {
    self.items.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.read().is_empty()
  }

  /// Decodes the JSON stored under `key`. An absent key is `Ok(None)`.
  pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> VaultResult<Option<T>> {
    match self.get_item(key) {
      None => Ok(None),
      Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|source| VaultError::CorruptStorage {
        key: key.to_string(),
        source,
      }),
    }
  }

  pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> VaultResult<()> {
    let raw = serde_json::to_string(value).map_err(|source| VaultError::Serialization {
      key: key.to_string(),
      source,
    })?;
    self.set_item(key, raw);
    Ok(())
  }
}
