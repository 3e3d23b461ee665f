// gamevault/storefront/src/web/handlers/mod.rs

pub mod billing_handlers;
pub mod dashboard_handlers;
pub mod games_handlers;
pub mod library_handlers;
pub mod wishlist_handlers;
