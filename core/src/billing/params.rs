// gamevault/core/src/billing/params.rs

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::catalog::normalizer::parse_float_prefix;
use crate::error::{VaultError, VaultResult};
use crate::models::game_item::{PLACEHOLDER_IMAGE, UNKNOWN_PLATFORM};

/// Raw query parameters handed from the dashboard to the billing page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingParams {
  pub game_id: Option<String>,
  pub game_name: Option<String>,
  pub price: Option<String>,
  pub platform: Option<String>,
  pub image_url: Option<String>,
}

impl BillingParams {
  /// Parses an `application/x-www-form-urlencoded` query string (without the leading `?`).
  pub fn from_query(query: &str) -> Self {
    let mut params = BillingParams::default();
    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
      let slot = match key.as_ref() {
        "gameId" => &mut params.game_id,
        "gameName" => &mut params.game_name,
        "price" => &mut params.price,
        "platform" => &mut params.platform,
        "imageUrl" => &mut params.image_url,
        _ => continue,
      };
      *slot = Some(value.into_owned());
    }
    params
  }

  /// Builds the order data. `gameId`, `gameName` and `price` are required;
  /// `platform` and `imageUrl` fall back to their catalog defaults.
  pub fn into_billing_data(self) -> VaultResult<BillingData> {
    let game_id_raw = required(self.game_id, "gameId")?;
    let game_name = required(self.game_name, "gameName")?;
    let price_raw = required(self.price, "price")?;

    let game_id = parse_float_prefix(&game_id_raw)
      .filter(|f| f.is_finite())
      .map(|f| f.trunc() as i64)
      .ok_or_else(|| VaultError::InvalidBillingParam {
        name: "gameId",
        value: game_id_raw.clone(),
      })?;
    let price = parse_float_prefix(&price_raw)
      .filter(|f| f.is_finite() && *f >= 0.0)
      .ok_or_else(|| VaultError::InvalidBillingParam {
        name: "price",
        value: price_raw.clone(),
      })?;

    Ok(BillingData {
      game_id,
      game_name,
      price,
      platform: optional(self.platform).unwrap_or_else(|| UNKNOWN_PLATFORM.to_string()),
      image_url: optional(self.image_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
    })
  }
}

fn required(value: Option<String>, name: &'static str) -> VaultResult<String> {
  optional(value).ok_or(VaultError::MissingBillingParam { name })
}

fn optional(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

/// The game being bought, for the lifetime of one billing page session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingData {
  pub game_id: i64,
  pub game_name: String,
  pub price: f64,
  pub platform: String,
  pub image_url: String,
}

impl BillingData {
  pub fn summary(&self) -> OrderSummary {
    OrderSummary {
      subtotal: self.price,
      tax: 0.0,
      processing_fee: 0.0,
      total: self.price,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
  pub subtotal: f64,
  pub tax: f64,
  pub processing_fee: f64,
  pub total: f64,
}
