// gamevault/core/src/lib.rs

//! GameVault: the logic behind a small video-game storefront.
//!
//! The crate covers everything below the HTTP layer:
//!  - Normalizing inconsistent upstream catalog records into [`GameItem`]s.
//!  - The dashboard's keyword/category filtering and pagination.
//!  - A billing simulator: query-parameter hand-off, payment method forms,
//!    a fake gateway, and a `Loading → Ready → Processing → Complete` session.
//!  - The purchase library with filters, sorting and aggregates.
//!  - Local-storage style persistence behind the [`PurchaseStore`] trait.
//!
//! No real payment is ever taken; the gateway only waits.

pub mod billing;
pub mod catalog;
pub mod error;
pub mod library;
pub mod models;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::billing::{
  BillingData, BillingParams, BillingSession, BillingState, PaymentForm, PaymentMethod, PaymentMethodKind,
  PaymentSimulator, SimulatedGateway,
};
pub use crate::catalog::{normalize, Catalog, CatalogSource, CatalogView};
pub use crate::error::{VaultError, VaultResult};
pub use crate::library::{LibraryQuery, LibrarySnapshot, LibrarySort, LibraryStats, LibraryView};
pub use crate::models::{GameItem, PurchasedGame};
pub use crate::store::{LocalPurchaseStore, LocalStorage, PurchaseStore, Wishlist};
