// gamevault/storefront/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{billing_handlers, dashboard_handlers, games_handlers, library_handlers, wishlist_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` and the integration tests to mount every route.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::resource("/games")
          .route(web::get().to(games_handlers::list_games_handler))
          .route(web::post().to(games_handlers::search_games_handler)),
      )
      .route("/dashboard", web::get().to(dashboard_handlers::dashboard_handler))
      .service(
        web::resource("/billing")
          .route(web::get().to(billing_handlers::billing_summary_handler))
          .route(web::post().to(billing_handlers::submit_payment_handler)),
      )
      .service(
        web::scope("/library")
          .service(
            web::resource("")
              .route(web::get().to(library_handlers::library_handler))
              .route(web::delete().to(library_handlers::clear_library_handler)),
          )
          .route(
            "/{purchase_id}/download",
            web::post().to(library_handlers::download_handler),
          )
          .route("/{purchase_id}/play", web::post().to(library_handlers::play_handler)),
      )
      .service(
        web::scope("/wishlist")
          .route("", web::get().to(wishlist_handlers::wishlist_handler))
          .route("/toggle", web::post().to(wishlist_handlers::toggle_wishlist_handler)),
      ),
  );
}
