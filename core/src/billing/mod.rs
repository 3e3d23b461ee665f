// gamevault/core/src/billing/mod.rs

//! The billing simulator: query-parameter hand-off from the dashboard, the
//! payment method forms, the simulated gateway and the session state machine
//! that ties them together.

pub mod params;
pub mod payment;
pub mod session;
pub mod simulator;

pub use params::{BillingData, BillingParams, OrderSummary};
pub use payment::{
  payment_method_options, render_payment_form, Bank, PaymentForm, PaymentFormSpec, PaymentMethod, PaymentMethodKind,
  PaymentMethodOption,
};
pub use session::{build_purchase_record, BillingSession, BillingState, LIBRARY_PATH, DASHBOARD_PATH};
pub use simulator::{PaymentSimulator, SimulatedGateway};
