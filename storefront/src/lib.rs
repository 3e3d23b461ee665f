// gamevault/storefront/src/lib.rs

//! HTTP front end for GameVault: the dashboard, billing and library pages
//! exposed as JSON endpoints over the `gamevault` crate.

pub mod config;
pub mod errors;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
pub use crate::web::configure_app_routes;
