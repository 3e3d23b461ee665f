// gamevault/storefront/src/web/handlers/dashboard_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use gamevault::catalog::{purchase_link, Page, DEFAULT_PER_PAGE};
use gamevault::{CatalogView, GameItem};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::games_handlers::LIST_FAILED_MESSAGE;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardQuery {
  pub keyword: Option<String>,
  pub category: Option<String>,
  pub page: Option<usize>,
  pub per_page: Option<usize>,
}

/// A catalog card plus the link its "Buy" button follows.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardGame<'a> {
  #[serde(flatten)]
  pub game: &'a GameItem,
  pub purchase_url: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse<'a> {
  pub games: Page<DashboardGame<'a>>,
  pub categories: &'a [String],
  pub keyword: Option<&'a str>,
  pub category: Option<&'a str>,
}

/// Applies the request's filter to a fresh view. A non-empty category wins over a keyword.
pub fn apply_filter(view: &mut CatalogView, query: &DashboardQuery) {
  match (query.category.as_deref(), query.keyword.as_deref()) {
    (Some(category), _) if !category.is_empty() => view.select_category(category),
    (_, Some(keyword)) => view.set_keyword(keyword),
    _ => view.show_all(),
  }
}

#[instrument(name = "handler::dashboard", skip(app_state))]
pub async fn dashboard_handler(
  app_state: web::Data<AppState>,
  query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
  let games = app_state
    .catalog
    .list_games()
    .await
    .map_err(AppError::upstream(LIST_FAILED_MESSAGE))?;

  let mut view = CatalogView::new(games);
  apply_filter(&mut view, &query);

  let page = view
    .page(query.page.unwrap_or(1), query.per_page.unwrap_or(DEFAULT_PER_PAGE))
    .map(|game| DashboardGame {
      game,
      purchase_url: purchase_link(game),
    });
  info!(
    "Dashboard page {}/{} with {} of {} visible games.",
    page.page,
    page.total_pages,
    page.items.len(),
    page.total_items
  );

  Ok(HttpResponse::Ok().json(DashboardResponse {
    games: page,
    categories: view.categories(),
    keyword: view.keyword(),
    category: view.category(),
  }))
}
