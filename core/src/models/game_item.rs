// gamevault/core/src/models/game_item.rs

use serde::{Deserialize, Serialize};

pub const UNTITLED_GAME: &str = "Untitled Game";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";
pub const UNKNOWN_PLATFORM: &str = "Unknown Platform";

/// Canonical catalog entry, as handed to the dashboard.
///
/// Instances are only produced by [`crate::catalog::normalize`], which
/// guarantees `price` is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameItem {
  pub id: i64,
  pub game_name: String,
  pub category: String,
  pub price: f64,
  pub image_url: String,
  pub user_id: Option<String>,
  pub description: String,
  pub platform: String,
}

impl GameItem {
  /// Case-insensitive substring match over name, category, description and platform.
  /// `needle` must already be lowercased.
  pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
    [&self.game_name, &self.category, &self.description, &self.platform]
      .iter()
      .any(|field| field.to_lowercase().contains(needle))
  }
}
