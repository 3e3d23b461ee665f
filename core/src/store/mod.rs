// gamevault/core/src/store/mod.rs

//! Client-side persisted state: a local-storage-like key/value map, the
//! purchase repository layered on it, and the wishlist.

pub mod local_storage;
pub mod purchase_store;
pub mod wishlist;

pub use local_storage::LocalStorage;
pub use purchase_store::{decode_purchases, encode_purchases, LocalPurchaseStore, PurchaseStore, PURCHASES_KEY};
pub use wishlist::{Wishlist, WISHLIST_KEY};
