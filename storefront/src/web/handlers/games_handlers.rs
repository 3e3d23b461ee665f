// gamevault/storefront/src/web/handlers/games_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch games";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed";

#[derive(Deserialize, Debug)]
pub struct SearchGamesRequest {
  #[serde(default)]
  pub keyword: String,
}

#[instrument(name = "handler::list_games", skip(app_state))]
pub async fn list_games_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let games = app_state
    .catalog
    .list_games()
    .await
    .map_err(AppError::upstream(LIST_FAILED_MESSAGE))?;
  info!("Returning {} catalog games.", games.len());
  Ok(HttpResponse::Ok().json(games))
}

/// Zero or one result: the upstream search only ever reports a single match.
#[instrument(name = "handler::search_games", skip(app_state, req_body), fields(keyword = %req_body.keyword))]
pub async fn search_games_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<SearchGamesRequest>,
) -> Result<HttpResponse, AppError> {
  let games = app_state
    .catalog
    .search_games(&req_body.keyword)
    .await
    .map_err(AppError::upstream(SEARCH_FAILED_MESSAGE))?;
  Ok(HttpResponse::Ok().json(games))
}
