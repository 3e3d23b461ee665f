// gamevault/storefront/src/web/handlers/billing_handlers.rs

//! The billing page as two endpoints. Both read the game from the query
//! string exactly as the dashboard's purchase link wrote it; an incomplete
//! query answers `303 See Other` to the dashboard before anything else in
//! the request is looked at.

use actix_web::{http::header, web, HttpRequest, HttpResponse};
use actix_web::web::Bytes;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use gamevault::billing::{payment_method_options, render_payment_form, DASHBOARD_PATH, LIBRARY_PATH};
use gamevault::{BillingParams, BillingSession, BillingState, PaymentForm, PaymentMethodKind, VaultError};

use crate::errors::{AppError, PAYMENT_FAILED_MESSAGE};
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct MethodQuery {
  pub method: Option<String>,
}

fn redirect_to_dashboard() -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, DASHBOARD_PATH))
    .finish()
}

fn open_session(req: &HttpRequest) -> BillingSession {
  BillingSession::from_params(BillingParams::from_query(req.query_string()))
}

#[instrument(name = "handler::billing_summary", skip(req))]
pub async fn billing_summary_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  let mut session = open_session(&req);
  if session.state() == BillingState::Invalid {
    return Ok(redirect_to_dashboard());
  }

  let method_query = web::Query::<MethodQuery>::from_query(req.query_string())
    .map_err(|e| AppError::Validation(format!("Invalid billing query: {}", e)))?;
  if let Some(method) = method_query.method.as_deref().filter(|m| !m.is_empty()) {
    session.select_method(method.parse::<PaymentMethodKind>()?)?;
  }
  let kind = session.selected_method();
  let data = session
    .data()
    .ok_or_else(|| AppError::Internal("billing session has no order data".to_string()))?;

  Ok(HttpResponse::Ok().json(json!({
      "state": session.state(),
      "order": data,
      "summary": data.summary(),
      "paymentMethods": payment_method_options(),
      "selectedMethod": kind.id(),
      "form": render_payment_form(kind, data.price),
  })))
}

/// The payment form is decoded only once the order itself is known to be complete.
#[instrument(name = "handler::submit_payment", skip(app_state, req, body))]
pub async fn submit_payment_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  body: Bytes,
) -> Result<HttpResponse, AppError> {
  let mut session = open_session(&req);
  if session.state() == BillingState::Invalid {
    return Ok(redirect_to_dashboard());
  }

  let form: PaymentForm = serde_json::from_slice(&body)
    .map_err(|e| AppError::Validation(format!("Invalid payment form: {}", e)))?;

  let purchase = session
    .submit(form, app_state.payment.as_ref(), app_state.purchases.as_ref())
    .await
    .map_err(|e| match e {
      VaultError::PaymentFailed(reason) => {
        warn!(%reason, "Simulated payment rejected.");
        AppError::Payment(PAYMENT_FAILED_MESSAGE.to_string())
      }
      other => AppError::from(other),
    })?;

  info!("Purchase {} complete; client should open {}.", purchase.id, LIBRARY_PATH);
  Ok(HttpResponse::Created().json(json!({
      "state": BillingState::Complete,
      "purchase": purchase,
      "redirectTo": LIBRARY_PATH,
      "redirectAfterMs": app_state.config.library_redirect_delay.as_millis() as u64,
  })))
}
