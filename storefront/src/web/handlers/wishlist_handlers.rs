// gamevault/storefront/src/web/handlers/wishlist_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ToggleWishlistRequest {
  pub title: String,
}

pub async fn wishlist_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({ "titles": app_state.wishlist.titles() }))
}

#[instrument(name = "handler::toggle_wishlist", skip(app_state, req_body), fields(title = %req_body.title))]
pub async fn toggle_wishlist_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<ToggleWishlistRequest>,
) -> Result<HttpResponse, AppError> {
  let title = req_body.title.trim();
  if title.is_empty() {
    return Err(AppError::Validation("title must not be empty".to_string()));
  }
  let wishlisted = app_state.wishlist.toggle(title)?;
  Ok(HttpResponse::Ok().json(json!({
      "title": title,
      "wishlisted": wishlisted,
      "titles": app_state.wishlist.titles(),
  })))
}
