// gamevault/core/src/billing/session.rs

//! One billing page session.
//!
//! ```text
//! Loading ──► Invalid                     (missing gameId / gameName / price)
//!    │
//!    └──► Ready ──► Processing ──► Complete
//!           ▲            │
//!           └────────────┘                (simulated payment failed)
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::params::{BillingData, BillingParams};
use super::payment::{PaymentForm, PaymentMethodKind};
use super::simulator::PaymentSimulator;
use crate::error::{VaultError, VaultResult};
use crate::models::purchase::{download_url_for, PLACEHOLDER_USER_ID, UNKNOWN_CATEGORY};
use crate::models::PurchasedGame;
use crate::store::PurchaseStore;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LIBRARY_PATH: &str = "/library";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingState {
  Loading,
  Invalid,
  Ready,
  Processing,
  Complete,
}

impl fmt::Display for BillingState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      BillingState::Loading => "loading",
      BillingState::Invalid => "invalid",
      BillingState::Ready => "ready",
      BillingState::Processing => "processing",
      BillingState::Complete => "complete",
    };
    f.write_str(name)
  }
}

#[derive(Debug, Clone)]
pub struct BillingSession {
  state: BillingState,
  data: Option<BillingData>,
  selected: PaymentMethodKind,
  receipt: Option<PurchasedGame>,
}

impl Default for BillingSession {
  fn default() -> Self {
    Self::new()
  }
}

impl BillingSession {
  pub fn new() -> Self {
    Self {
      state: BillingState::Loading,
      data: None,
      selected: PaymentMethodKind::default(),
      receipt: None,
    }
  }

  /// Starts a session straight from the page's query parameters.
  pub fn from_params(params: BillingParams) -> Self {
    let mut session = Self::new();
    session.resolve_params(params);
    session
  }

  pub fn state(&self) -> BillingState {
    self.state
  }

  pub fn data(&self) -> Option<&BillingData> {
    self.data.as_ref()
  }

  pub fn selected_method(&self) -> PaymentMethodKind {
    self.selected
  }

  pub fn receipt(&self) -> Option<&PurchasedGame> {
    self.receipt.as_ref()
  }

  /// Where the page navigates next, if anywhere.
  pub fn redirect_target(&self) -> Option<&'static str> {
    match self.state {
      BillingState::Invalid => Some(DASHBOARD_PATH),
      BillingState::Complete => Some(LIBRARY_PATH),
      _ => None,
    }
  }

  /// `Loading → Ready` when the required parameters are present, `Loading → Invalid` otherwise.
  pub fn load(&mut self, params: BillingParams) -> VaultResult<BillingState> {
    self.expect_state(BillingState::Loading, "load")?;
    Ok(self.resolve_params(params))
  }

  fn resolve_params(&mut self, params: BillingParams) -> BillingState {
    match params.into_billing_data() {
      Ok(data) => {
        info!("Billing session ready for game {} ('{}').", data.game_id, data.game_name);
        self.data = Some(data);
        self.state = BillingState::Ready;
      }
      Err(e) => {
        warn!(error = %e, "Billing parameters incomplete, redirecting to {}.", DASHBOARD_PATH);
        self.state = BillingState::Invalid;
      }
    }
    self.state
  }

  pub fn select_method(&mut self, kind: PaymentMethodKind) -> VaultResult<()> {
    self.expect_state(BillingState::Ready, "select a payment method")?;
    self.selected = kind;
    Ok(())
  }

  /// `Ready → Processing → Complete`, appending exactly one purchase record.
  ///
  /// Validation failures leave the session in `Ready` without contacting the
  /// gateway. A gateway or store failure returns the session to `Ready`; the
  /// store is not written in either case.
  #[instrument(name = "billing::submit", skip_all, fields(method = %form.payment.kind()))]
  pub async fn submit(
    &mut self,
    form: PaymentForm,
    gateway: &dyn PaymentSimulator,
    store: &dyn PurchaseStore,
  ) -> VaultResult<&PurchasedGame> {
    self.expect_state(BillingState::Ready, "submit payment")?;
    let data = self
      .data
      .clone()
      .ok_or_else(|| VaultError::Internal("billing session is ready without order data".to_string()))?;

    let form = form.formatted();
    form.validate()?;
    self.selected = form.payment.kind();

    self.state = BillingState::Processing;
    if let Err(e) = gateway.process(&data, &form.payment).await {
      warn!(error = %e, "Simulated payment failed for game {}.", data.game_id);
      self.state = BillingState::Ready;
      return Err(match e {
        VaultError::PaymentFailed(_) => e,
        other => VaultError::PaymentFailed(other.to_string()),
      });
    }

    let record = match store.append(build_purchase_record(&data, self.selected, Utc::now())).await {
      Ok(stored) => stored,
      Err(e) => {
        warn!(error = %e, "Could not record purchase for game {}.", data.game_id);
        self.state = BillingState::Ready;
        return Err(e);
      }
    };

    info!(
      "Purchase {} recorded for '{}' via {} (transaction {}).",
      record.id, record.game_name, record.payment_method, record.transaction_id
    );
    self.state = BillingState::Complete;
    Ok(self.receipt.insert(record))
  }

  fn expect_state(&self, expected: BillingState, action: &'static str) -> VaultResult<()> {
    if self.state == expected {
      Ok(())
    } else {
      Err(VaultError::InvalidTransition {
        state: self.state.to_string(),
        action,
      })
    }
  }
}

/// The record written on a successful simulated payment made at `now`.
pub fn build_purchase_record(data: &BillingData, method: PaymentMethodKind, now: DateTime<Utc>) -> PurchasedGame {
  let millis = now.timestamp_millis();
  PurchasedGame {
    id: millis,
    game_id: data.game_id,
    game_name: data.game_name.clone(),
    price: data.price,
    platform: data.platform.clone(),
    image_url: data.image_url.clone(),
    purchase_date: now.format("%Y-%m-%d").to_string(),
    user_id: PLACEHOLDER_USER_ID.to_string(),
    download_url: download_url_for(&data.game_name),
    playable: true,
    category: UNKNOWN_CATEGORY.to_string(),
    payment_method: method.id().to_string(),
    transaction_id: format!("TXN{}", millis),
  }
}
