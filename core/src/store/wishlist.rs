// gamevault/core/src/store/wishlist.rs
use std::sync::Arc;

use tracing::warn;

use super::local_storage::LocalStorage;
use crate::error::VaultResult;

pub const WISHLIST_KEY: &str = "gv_wishlist";

/// Titles the visitor has starred on the landing page.
#[derive(Debug, Clone)]
pub struct Wishlist {
  storage: Arc<LocalStorage>,
}

impl Wishlist {
  pub fn new(storage: Arc<LocalStorage>) -> Self {
    Self { storage }
  }

  /// Stored titles in insertion order. Unreadable contents count as an empty list.
  pub fn titles(&self) -> Vec<String> {
    match self.storage.get_json::<Vec<String>>(WISHLIST_KEY) {
      Ok(titles) => titles.unwrap_or_default(),
      Err(e) => {
        warn!(error = %e, "Ignoring unreadable wishlist.");
        Vec::new()
      }
    }
  }

  /// Adds `title` if absent, removes it otherwise. Returns whether it is now wishlisted.
  pub fn toggle(&self, title: &str) -> VaultResult<bool> {
    let mut titles = self.titles();
    let now_listed = match titles.iter().position(|t| t == title) {
      Some(index) => {
        titles.remove(index);
        false
      }
      None => {
        titles.push(title.to_string());
        true
      }
    };
    self.storage.set_json(WISHLIST_KEY, &titles)?;
    Ok(now_listed)
  }
}
