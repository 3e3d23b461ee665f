// tests/billing_flow_tests.rs
mod common;

use chrono::Utc;
use common::*;
use gamevault::billing::{BillingParams, BillingSession, BillingState, PaymentMethodKind, SimulatedGateway};
use gamevault::{LocalPurchaseStore, LocalStorage, PurchaseStore, VaultError};
use serial_test::serial;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn store() -> LocalPurchaseStore {
  LocalPurchaseStore::new(Arc::new(LocalStorage::new()))
}

#[tokio::test]
#[serial]
async fn test_complete_submission_appends_exactly_one_record() {
  setup_tracing();
  let store = store();
  let gateway = SimulatedGateway::new(Duration::ZERO);
  let mut session = BillingSession::from_params(complete_params());
  assert_eq!(session.state(), BillingState::Ready);

  let day_before = Utc::now().format("%Y-%m-%d").to_string();
  let receipt = session.submit(card_form(), &gateway, &store).await.unwrap().clone();
  let day_after = Utc::now().format("%Y-%m-%d").to_string();

  assert_eq!(session.state(), BillingState::Complete);
  assert_eq!(session.redirect_target(), Some("/library"));

  let stored = store.list().await.unwrap();
  assert_eq!(stored.len(), 1);
  assert_eq!(stored[0], receipt);
  assert!(receipt.purchase_date == day_before || receipt.purchase_date == day_after);
  assert_eq!(receipt.game_id, 7);
  assert_eq!(receipt.game_name, "Grand Theft Auto: V");
  assert_eq!(receipt.price, 1499.0);
  assert_eq!(receipt.platform, "PC");
  assert_eq!(receipt.image_url, "/games/gta.jpg");
  assert_eq!(receipt.payment_method, "card");
  assert_eq!(receipt.download_url, "/download/grand-theft-auto:-v");
  assert!(receipt.transaction_id.starts_with("TXN"));
}

#[tokio::test]
#[serial]
async fn test_successive_purchases_preserve_order() {
  setup_tracing();
  let store = store();
  let gateway = SimulatedGateway::new(Duration::ZERO);

  let mut first = BillingSession::from_params(complete_params());
  first.submit(card_form(), &gateway, &store).await.unwrap();
  let mut second = BillingSession::from_params(BillingParams::from_query("gameId=8&gameName=Dota%202&price=0"));
  second.submit(gcash_form(), &gateway, &store).await.unwrap();

  let stored = store.list().await.unwrap();
  let names: Vec<&str> = stored.iter().map(|p| p.game_name.as_str()).collect();
  assert_eq!(names, vec!["Grand Theft Auto: V", "Dota 2"]);
  assert_eq!(stored[1].payment_method, "gcash");
}

#[tokio::test]
#[serial]
async fn test_gateway_failure_returns_to_ready_without_writing() {
  setup_tracing();
  let store = store();
  let gateway = DecliningGateway::default();
  let mut session = BillingSession::from_params(complete_params());

  let err = session.submit(card_form(), &gateway, &store).await.unwrap_err();

  assert!(matches!(err, VaultError::PaymentFailed(_)));
  assert_eq!(session.state(), BillingState::Ready);
  assert!(session.receipt().is_none());
  assert!(store.list().await.unwrap().is_empty());

  // Retry is allowed once back in Ready.
  let retry = session.submit(card_form(), &SimulatedGateway::new(Duration::ZERO), &store).await;
  assert!(retry.is_ok());
  assert_eq!(gateway.attempts.load(Ordering::SeqCst), 1);
  assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn test_invalid_form_never_reaches_gateway() {
  setup_tracing();
  let store = store();
  let gateway = DecliningGateway::default();
  let mut session = BillingSession::from_params(complete_params());
  let mut form = card_form();
  form.terms_accepted = false;

  let err = session.submit(form, &gateway, &store).await.unwrap_err();

  assert!(matches!(err, VaultError::InvalidPaymentForm { field: "termsAccepted", .. }));
  assert_eq!(gateway.attempts.load(Ordering::SeqCst), 0);
  assert_eq!(session.state(), BillingState::Ready);
}

#[tokio::test]
#[serial]
async fn test_missing_card_field_is_rejected() {
  setup_tracing();
  let store = store();
  let mut session = BillingSession::from_params(complete_params());
  let mut form = card_form();
  if let gamevault::PaymentMethod::Card { cvv, .. } = &mut form.payment {
    cvv.clear();
  }

  let err = session
    .submit(form, &SimulatedGateway::new(Duration::ZERO), &store)
    .await
    .unwrap_err();

  assert!(matches!(err, VaultError::InvalidPaymentForm { field: "cvv", .. }));
}

#[tokio::test]
#[serial]
async fn test_submit_on_invalid_session_is_rejected() {
  setup_tracing();
  let store = store();
  let mut session = BillingSession::from_params(BillingParams::from_query("gameId=7&gameName=GTA"));
  assert_eq!(session.state(), BillingState::Invalid);

  let err = session
    .submit(card_form(), &SimulatedGateway::new(Duration::ZERO), &store)
    .await
    .unwrap_err();

  assert!(matches!(err, VaultError::InvalidTransition { .. }));
  assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_completed_session_cannot_submit_again() {
  setup_tracing();
  let store = store();
  let gateway = SimulatedGateway::new(Duration::ZERO);
  let mut session = BillingSession::from_params(complete_params());
  session.submit(card_form(), &gateway, &store).await.unwrap();

  let err = session.submit(card_form(), &gateway, &store).await.unwrap_err();

  assert!(matches!(err, VaultError::InvalidTransition { .. }));
  assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn test_gateway_waits_its_latency() {
  setup_tracing();
  let store = store();
  let gateway = SimulatedGateway::new(Duration::from_millis(50));
  let mut session = BillingSession::from_params(complete_params());

  let started = Instant::now();
  session.submit(gcash_form(), &gateway, &store).await.unwrap();

  assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
#[serial]
async fn test_submitted_method_overrides_picker_selection() {
  setup_tracing();
  let store = store();
  let mut session = BillingSession::from_params(complete_params());
  session.select_method(PaymentMethodKind::PayPal).unwrap();

  // The submitted method wins over the picker selection.
  session
    .submit(gcash_form(), &SimulatedGateway::new(Duration::ZERO), &store)
    .await
    .unwrap();

  assert_eq!(session.selected_method(), PaymentMethodKind::GCash);
}
