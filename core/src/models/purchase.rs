// gamevault/core/src/models/purchase.rs

use serde::{Deserialize, Serialize};

/// Placeholder owner for purchase records; sessions are not tied to real users.
pub const PLACEHOLDER_USER_ID: &str = "current-user-id";
pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedGame {
  pub id: i64, // epoch millis at time of purchase
  pub game_id: i64,
  pub game_name: String,
  pub price: f64,
  pub platform: String,
  pub image_url: String,
  pub purchase_date: String, // YYYY-MM-DD
  pub user_id: String,
  pub download_url: String,
  pub playable: bool,
  pub category: String,
  pub payment_method: String,
  pub transaction_id: String,
}

/// Lowercases the name and replaces each whitespace run, leading and trailing
/// ones included, with a single `-`.
pub fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut in_whitespace = false;
  for c in name.to_lowercase().chars() {
    if c.is_whitespace() {
      if !in_whitespace {
        slug.push('-');
      }
      in_whitespace = true;
    } else {
      slug.push(c);
      in_whitespace = false;
    }
  }
  slug
}

pub fn download_url_for(name: &str) -> String {
  format!("/download/{}", slugify(name))
}
