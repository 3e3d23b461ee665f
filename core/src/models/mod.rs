// gamevault/core/src/models/mod.rs

//! Data structures shared by the catalog, billing and library modules.

pub mod game_item;
pub mod purchase;

pub use game_item::GameItem;
pub use purchase::PurchasedGame;
