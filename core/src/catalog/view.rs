// gamevault/core/src/catalog/view.rs

//! The dashboard's view over a fetched catalog: keyword search, category
//! facets, pagination, and the hand-off link into billing.
//!
//! Keyword and category filters replace each other. Selecting a category
//! clears the keyword and entering a keyword clears the category, so at most
//! one filter is active at a time.

use serde::Serialize;
use url::form_urlencoded;

use crate::models::game_item::PLACEHOLDER_IMAGE;
use crate::models::GameItem;

pub const DEFAULT_PER_PAGE: usize = 12;
pub const MAX_PER_PAGE: usize = 100;

/// Case-insensitive substring search over name, category, description and
/// platform. A blank keyword matches everything.
pub fn search_games<'a>(games: &'a [GameItem], keyword: &str) -> Vec<&'a GameItem> {
  let needle = keyword.trim().to_lowercase();
  if needle.is_empty() {
    return games.iter().collect();
  }
  games.iter().filter(|g| g.matches_lowercase(&needle)).collect()
}

/// Exact-match category filter.
pub fn filter_by_category<'a>(games: &'a [GameItem], category: &str) -> Vec<&'a GameItem> {
  games.iter().filter(|g| g.category == category).collect()
}

/// Distinct categories in first-seen order.
pub fn distinct_categories(games: &[GameItem]) -> Vec<String> {
  let mut seen: Vec<String> = Vec::new();
  for game in games {
    if !seen.iter().any(|c| c == &game.category) {
      seen.push(game.category.clone());
    }
  }
  seen
}

/// Billing page URL carrying the game's details as query parameters.
pub fn purchase_link(game: &GameItem) -> String {
  let image_url = if game.image_url.is_empty() {
    PLACEHOLDER_IMAGE
  } else {
    game.image_url.as_str()
  };
  let query = form_urlencoded::Serializer::new(String::new())
    .append_pair("gameId", &game.id.to_string())
    .append_pair("gameName", &game.game_name)
    .append_pair("price", &game.price.to_string())
    .append_pair("platform", &game.platform)
    .append_pair("imageUrl", image_url)
    .finish();
  format!("/billing?{}", query)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveFilter {
  All,
  Keyword(String),
  Category(String),
}

/// Full catalog plus the currently active filter.
#[derive(Debug, Clone)]
pub struct CatalogView {
  games: Vec<GameItem>,
  categories: Vec<String>,
  filter: ActiveFilter,
}

impl CatalogView {
  pub fn new(games: Vec<GameItem>) -> Self {
    let categories = distinct_categories(&games);
    Self {
      games,
      categories,
      filter: ActiveFilter::All,
    }
  }

  pub fn games(&self) -> &[GameItem] {
    &self.games
  }

  pub fn categories(&self) -> &[String] {
    &self.categories
  }

  pub fn keyword(&self) -> Option<&str> {
    match &self.filter {
      ActiveFilter::Keyword(k) => Some(k),
      _ => None,
    }
  }

  pub fn category(&self) -> Option<&str> {
    match &self.filter {
      ActiveFilter::Category(c) => Some(c),
      _ => None,
    }
  }

  /// Sets the keyword, clearing any selected category. A blank keyword shows all games.
  pub fn set_keyword(&mut self, keyword: &str) {
    self.filter = if keyword.trim().is_empty() {
      ActiveFilter::All
    } else {
      ActiveFilter::Keyword(keyword.to_string())
    };
  }

  /// Selects a category, clearing any keyword.
  pub fn select_category(&mut self, category: &str) {
    self.filter = ActiveFilter::Category(category.to_string());
  }

  pub fn show_all(&mut self) {
    self.filter = ActiveFilter::All;
  }

  /// Games passing the active filter, in catalog order.
  pub fn visible(&self) -> Vec<&GameItem> {
    match &self.filter {
      ActiveFilter::All => self.games.iter().collect(),
      ActiveFilter::Keyword(k) => search_games(&self.games, k),
      ActiveFilter::Category(c) => filter_by_category(&self.games, c),
    }
  }

  /// One page of the visible games. `page` is 1-based; `per_page` is clamped to `1..=MAX_PER_PAGE`.
  pub fn page(&self, page: usize, per_page: usize) -> Page<&GameItem> {
    Page::slice(self.visible(), page, per_page)
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  pub items: Vec<T>,
  pub page: usize,
  pub per_page: usize,
  pub total_items: usize,
  pub total_pages: usize,
}

impl<T> Page<T> {
  pub fn slice(all: Vec<T>, page: usize, per_page: usize) -> Self {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let page = page.max(1);
    let total_items = all.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page);
    let items: Vec<T> = all.into_iter().skip(start).take(per_page).collect();
    Page {
      items,
      page,
      per_page,
      total_items,
      total_pages,
    }
  }

  pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
    Page {
      items: self.items.into_iter().map(f).collect(),
      page: self.page,
      per_page: self.per_page,
      total_items: self.total_items,
      total_pages: self.total_pages,
    }
  }
}
