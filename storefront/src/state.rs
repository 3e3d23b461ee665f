// gamevault/storefront/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::HttpCatalogSource;
use gamevault::{Catalog, CatalogSource, LocalPurchaseStore, LocalStorage, PaymentSimulator, PurchaseStore, SimulatedGateway, Wishlist};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
  pub purchases: Arc<dyn PurchaseStore>,
  pub wishlist: Wishlist,
  pub payment: Arc<dyn PaymentSimulator>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Production wiring: HTTP upstream, local-storage purchases and a delayed simulated gateway.
  pub fn from_config(config: Arc<AppConfig>) -> Result<Self> {
    let source = HttpCatalogSource::from_config(&config)?;
    let payment = SimulatedGateway::new(config.billing_processing_delay);
    Ok(Self::with_parts(config, Arc::new(source), Arc::new(payment)))
  }

  /// Wires state around an arbitrary catalog source and payment simulator, each with fresh storage.
  pub fn with_parts(config: Arc<AppConfig>, source: Arc<dyn CatalogSource>, payment: Arc<dyn PaymentSimulator>) -> Self {
    let storage = Arc::new(LocalStorage::new());
    Self {
      catalog: Catalog::new(source),
      purchases: Arc::new(LocalPurchaseStore::new(storage.clone())),
      wishlist: Wishlist::new(storage),
      payment,
      config,
    }
  }
}
