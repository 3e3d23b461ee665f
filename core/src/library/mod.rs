// gamevault/core/src/library/mod.rs

//! The owned-games library: search, platform/category filters, sorting,
//! aggregate stats, and the simulated download/play actions.

use serde::{Deserialize, Serialize};

use crate::error::VaultResult;
use crate::models::PurchasedGame;
use crate::store::PurchaseStore;

/// Filter value meaning "no filter" in the platform/category dropdowns.
pub const ALL_FILTER: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibrarySort {
  /// Purchase date, newest first.
  Recent,
  Alphabetical,
  /// Price, highest first.
  Price,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryQuery {
  pub search: Option<String>,
  pub platform: Option<String>,
  pub category: Option<String>,
  pub sort: Option<LibrarySort>,
}

impl LibraryQuery {
  fn search_term(&self) -> Option<String> {
    self
      .search
      .as_deref()
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .map(str::to_lowercase)
  }

  fn platform_filter(&self) -> Option<&str> {
    active_filter(self.platform.as_deref())
  }

  fn category_filter(&self) -> Option<&str> {
    active_filter(self.category.as_deref())
  }

  pub fn is_active(&self) -> bool {
    self.search_term().is_some() || self.platform_filter().is_some() || self.category_filter().is_some()
  }

  /// Search, then platform, then category, then sort. Without a sort the
  /// stored (purchase) order is kept.
  pub fn apply<'a>(&self, games: &'a [PurchasedGame]) -> Vec<&'a PurchasedGame> {
    let term = self.search_term();
    let platform = self.platform_filter();
    let category = self.category_filter();

    let mut result: Vec<&PurchasedGame> = games
      .iter()
      .filter(|g| match &term {
        Some(t) => g.game_name.to_lowercase().contains(t) || g.category.to_lowercase().contains(t),
        None => true,
      })
      .filter(|g| platform.map_or(true, |p| g.platform == p))
      .filter(|g| category.map_or(true, |c| g.category == c))
      .collect();

    match self.sort {
      Some(LibrarySort::Recent) => {
        result.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date).then_with(|| b.id.cmp(&a.id)))
      }
      Some(LibrarySort::Alphabetical) => {
        result.sort_by(|a, b| a.game_name.to_lowercase().cmp(&b.game_name.to_lowercase()))
      }
      Some(LibrarySort::Price) => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
      None => {}
    }
    result
  }
}

fn active_filter(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty() && *v != ALL_FILTER)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
  pub total_games: usize,
  pub total_spent: f64,
  pub playable_count: usize,
}

impl LibraryStats {
  /// Aggregates over the whole library, never a filtered view.
  pub fn from_games(games: &[PurchasedGame]) -> Self {
    LibraryStats {
      total_games: games.len(),
      total_spent: games.iter().map(|g| g.price).sum(),
      playable_count: games.iter().filter(|g| g.playable).count(),
    }
  }
}

/// What the library page renders for one query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySnapshot {
  pub games: Vec<PurchasedGame>,
  pub stats: LibraryStats,
  pub platforms: Vec<String>,
  pub categories: Vec<String>,
  pub filters: LibraryQuery,
  pub filters_active: bool,
}

/// The purchase sequence as loaded once when the page mounts.
#[derive(Debug, Clone, Default)]
pub struct LibraryView {
  games: Vec<PurchasedGame>,
}

impl LibraryView {
  pub fn new(games: Vec<PurchasedGame>) -> Self {
    Self { games }
  }

  pub async fn load(store: &dyn PurchaseStore) -> VaultResult<Self> {
    Ok(Self::new(store.list().await?))
  }

  pub fn games(&self) -> &[PurchasedGame] {
    &self.games
  }

  pub fn stats(&self) -> LibraryStats {
    LibraryStats::from_games(&self.games)
  }

  pub fn platforms(&self) -> Vec<String> {
    unique_by(&self.games, |g| &g.platform)
  }

  pub fn categories(&self) -> Vec<String> {
    unique_by(&self.games, |g| &g.category)
  }

  pub fn snapshot(&self, query: &LibraryQuery) -> LibrarySnapshot {
    LibrarySnapshot {
      games: query.apply(&self.games).into_iter().cloned().collect(),
      stats: self.stats(),
      platforms: self.platforms(),
      categories: self.categories(),
      filters: query.clone(),
      filters_active: query.is_active(),
    }
  }
}

fn unique_by(games: &[PurchasedGame], key: impl Fn(&PurchasedGame) -> &String) -> Vec<String> {
  let mut seen: Vec<String> = Vec::new();
  for game in games {
    let value = key(game);
    if !seen.contains(value) {
      seen.push(value.clone());
    }
  }
  seen
}

pub fn download_notice(game: &PurchasedGame) -> String {
  format!("Starting download for {}...", game.game_name)
}

pub fn play_notice(game: &PurchasedGame) -> String {
  if game.playable {
    format!("Launching {}...", game.game_name)
  } else {
    "This game is not currently playable. Please download it first.".to_string()
  }
}
