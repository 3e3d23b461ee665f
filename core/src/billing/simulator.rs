// gamevault/core/src/billing/simulator.rs

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, instrument};

use super::params::BillingData;
use super::payment::PaymentMethod;
use crate::error::VaultResult;

pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Stands in for a payment network. Returning `Err` sends the billing session back to `Ready`.
#[async_trait]
pub trait PaymentSimulator: Send + Sync {
  async fn process(&self, order: &BillingData, payment: &PaymentMethod) -> VaultResult<()>;
}

/// Waits a fixed latency and always succeeds. The wait cannot be cancelled.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
  latency: Duration,
}

impl SimulatedGateway {
  pub fn new(latency: Duration) -> Self {
    Self { latency }
  }
}

impl Default for SimulatedGateway {
  fn default() -> Self {
    Self::new(DEFAULT_PROCESSING_DELAY)
  }
}

#[async_trait]
impl PaymentSimulator for SimulatedGateway {
  #[instrument(name = "billing::simulated_gateway", skip(self, order, payment), fields(game_id = order.game_id, method = %payment.kind()))]
  async fn process(&self, order: &BillingData, payment: &PaymentMethod) -> VaultResult<()> {
    info!(
      "Simulating payment of {:.2} for '{}' ({} ms latency).",
      order.price,
      order.game_name,
      self.latency.as_millis()
    );
    tokio::time::sleep(self.latency).await;
    info!("Simulated payment for '{}' succeeded.", order.game_name);
    Ok(())
  }
}
