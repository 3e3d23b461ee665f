// gamevault/storefront/src/web/handlers/library_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use gamevault::library::{download_notice, play_notice};
use gamevault::{LibraryQuery, LibraryView};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::library", skip(app_state))]
pub async fn library_handler(
  app_state: web::Data<AppState>,
  query: web::Query<LibraryQuery>,
) -> Result<HttpResponse, AppError> {
  let view = LibraryView::load(app_state.purchases.as_ref()).await?;
  let snapshot = view.snapshot(&query);
  info!(
    "Library shows {} of {} owned games.",
    snapshot.games.len(),
    snapshot.stats.total_games
  );
  Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(name = "handler::clear_library", skip(app_state))]
pub async fn clear_library_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.purchases.clear().await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Library cleared." })))
}

#[instrument(name = "handler::download", skip(app_state, path), fields(purchase_id = %path.as_ref()))]
pub async fn download_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let game = app_state.purchases.find(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({
      "purchaseId": game.id,
      "downloadUrl": game.download_url,
      "message": download_notice(&game),
  })))
}

#[instrument(name = "handler::play", skip(app_state, path), fields(purchase_id = %path.as_ref()))]
pub async fn play_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let game = app_state.purchases.find(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({
      "purchaseId": game.id,
      "playable": game.playable,
      "message": play_notice(&game),
  })))
}
