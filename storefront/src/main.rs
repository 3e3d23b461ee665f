// gamevault/storefront/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use storefront::{configure_app_routes, AppConfig, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // RUST_LOG overrides the default level; LOG_FORMAT=json switches to structured output.
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
    subscriber.json().init();
  } else {
    subscriber.init();
  }

  tracing::info!("Starting GameVault storefront server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let app_state = match AppState::from_config(app_config.clone()) {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise application state.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };
  tracing::info!(upstream = %app_config.upstream_base_url, "Catalog upstream configured.");

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {} (public URL {})...", server_address, app_config.app_base_url);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
