// gamevault/core/src/catalog/normalizer.rs

//! Maps whatever the upstream catalog sends into a [`GameItem`].
//!
//! Upstream records are inconsistent: keys arrive in camelCase or snake_case,
//! prices arrive as strings, numbers or not at all. Every attribute has a
//! fallback chain ending in a literal default, so normalization never fails.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::models::game_item::{GameItem, PLACEHOLDER_IMAGE, UNCATEGORIZED, UNKNOWN_PLATFORM, UNTITLED_GAME};

/// Every key the normalizer understands, each kept as an untyped value so a
/// single mistyped field cannot reject the whole record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGameRecord {
  id: Option<Value>,
  #[serde(rename = "gameName")]
  game_name_camel: Option<Value>,
  #[serde(rename = "game_name")]
  game_name_snake: Option<Value>,
  category: Option<Value>,
  price: Option<Value>,
  #[serde(rename = "imageUrl")]
  image_url_camel: Option<Value>,
  #[serde(rename = "image_url")]
  image_url_snake: Option<Value>,
  #[serde(rename = "userId")]
  user_id_camel: Option<Value>,
  #[serde(rename = "user_id")]
  user_id_snake: Option<Value>,
  description: Option<Value>,
  platform: Option<Value>,
  platform_name: Option<Value>,
}

impl RawGameRecord {
  fn parse(raw: &Value) -> Self {
    match raw {
      Value::Object(_) => RawGameRecord::deserialize(raw).unwrap_or_default(),
      _ => RawGameRecord::default(),
    }
  }
}

impl From<RawGameRecord> for GameItem {
  fn from(raw: RawGameRecord) -> Self {
    GameItem {
      id: coerce_id(raw.id.as_ref()),
      game_name: first_text(&[&raw.game_name_camel, &raw.game_name_snake]).unwrap_or_else(|| UNTITLED_GAME.to_string()),
      category: first_text(&[&raw.category]).unwrap_or_else(|| UNCATEGORIZED.to_string()),
      price: coerce_price(raw.price.as_ref()),
      image_url: first_text(&[&raw.image_url_camel, &raw.image_url_snake])
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
      user_id: first_text(&[&raw.user_id_camel, &raw.user_id_snake]),
      description: first_text(&[&raw.description]).unwrap_or_default(),
      platform: first_text(&[&raw.platform, &raw.platform_name]).unwrap_or_else(|| UNKNOWN_PLATFORM.to_string()),
    }
  }
}

/// Normalizes a single upstream record. Never fails.
pub fn normalize(raw: &Value) -> GameItem {
  let item = GameItem::from(RawGameRecord::parse(raw));
  debug!(
    id = item.id,
    game_name = %item.game_name,
    platform = %item.platform,
    price = item.price,
    "Normalized upstream catalog record"
  );
  item
}

/// Normalizes every element of an upstream array; non-array input yields nothing.
pub fn normalize_all(raw: &Value) -> Vec<GameItem> {
  match raw {
    Value::Array(records) => records.iter().map(normalize).collect(),
    _ => Vec::new(),
  }
}

/// Coerces an upstream price to a finite, non-negative number.
///
/// Strings use leading-prefix parsing (`"12.5abc"` is 12.5); anything that
/// does not yield a finite non-negative number becomes 0.
pub fn coerce_price(raw: Option<&Value>) -> f64 {
  let parsed = match raw {
    None | Some(Value::Null) => 0.0,
    Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
    Some(Value::String(s)) => parse_float_prefix(s).unwrap_or(0.0),
    Some(Value::Bool(b)) => {
      if *b {
        1.0
      } else {
        0.0
      }
    }
    Some(_) => 0.0,
  };
  if parsed.is_finite() && parsed > 0.0 {
    parsed
  } else {
    0.0
  }
}

fn coerce_id(raw: Option<&Value>) -> i64 {
  let id = match raw {
    Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
    Some(Value::String(s)) => {
      let trimmed = s.trim();
      trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
    }
    _ => None,
  };
  id.unwrap_or(0)
}

/// First candidate holding a usable string. Empty strings count as absent,
/// numbers are rendered in their JSON form.
fn first_text(candidates: &[&Option<Value>]) -> Option<String> {
  candidates.iter().find_map(|candidate| match candidate {
    Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
    Some(Value::Number(n)) => Some(n.to_string()),
    _ => None,
  })
}

/// Parses the longest leading decimal literal of `s`, ignoring leading whitespace.
pub(crate) fn parse_float_prefix(s: &str) -> Option<f64> {
  let s = s.trim_start();
  let bytes = s.as_bytes();
  let mut end = 0;

  if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
    end += 1;
  }
  let int_start = end;
  while end < bytes.len() && bytes[end].is_ascii_digit() {
    end += 1;
  }
  let mut digits = end - int_start;
  if end < bytes.len() && bytes[end] == b'.' {
    let frac_start = end + 1;
    let mut frac_end = frac_start;
    while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
      frac_end += 1;
    }
    digits += frac_end - frac_start;
    if digits > 0 {
      end = frac_end;
    }
  }
  if digits == 0 {
    return None;
  }
  // Optional exponent, only consumed when it is complete.
  if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
    let mut exp_end = end + 1;
    if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
      exp_end += 1;
    }
    let exp_digits_start = exp_end;
    while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
      exp_end += 1;
    }
    if exp_end > exp_digits_start {
      end = exp_end;
    }
  }
  s[..end].parse::<f64>().ok()
}
