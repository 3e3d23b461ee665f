// gamevault/core/src/billing/payment.rs

//! Payment methods accepted by the billing simulator, the form each one
//! collects, and the presence/length validation applied on submit.
//!
//! Nothing here talks to a real payment network.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{VaultError, VaultResult};

pub const MERCHANT_ACCOUNT_NAME: &str = "GameVault Inc.";
pub const GCASH_MERCHANT_NUMBER: &str = "0917 123 4567";
pub const MAYA_MERCHANT_NUMBER: &str = "0918 765 4321";
pub const DEFAULT_COUNTRY: &str = "Philippines";
pub const SUPPORTED_COUNTRIES: [&str; 5] = ["Philippines", "United States", "Canada", "United Kingdom", "Australia"];

const CARD_NUMBER_MAX_LEN: usize = 19;
const EXPIRY_MAX_LEN: usize = 5;
const CVV_MAX_LEN: usize = 4;
const MOBILE_MAX_LEN: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
  Bdo,
  ChinaBank,
  Pnb,
}

impl Bank {
  pub const ALL: [Bank; 3] = [Bank::Bdo, Bank::ChinaBank, Bank::Pnb];

  pub fn id(self) -> &'static str {
    match self {
      Bank::Bdo => "bdo",
      Bank::ChinaBank => "chinabank",
      Bank::Pnb => "pnb",
    }
  }

  pub fn legal_name(self) -> &'static str {
    match self {
      Bank::Bdo => "BDO (Banco de Oro)",
      Bank::ChinaBank => "China Banking Corporation",
      Bank::Pnb => "Philippine National Bank",
    }
  }

  /// Merchant account receiving transfers through this bank.
  pub fn merchant_account_number(self) -> &'static str {
    match self {
      Bank::Bdo => "0012 3456 7890",
      Bank::ChinaBank => "1012 3456 7890",
      Bank::Pnb => "2012 3456 7890",
    }
  }

  fn transfer_title(self) -> &'static str {
    match self {
      Bank::Bdo => "BDO Online Banking",
      Bank::ChinaBank => "China Bank Transfer",
      Bank::Pnb => "PNB Online Banking",
    }
  }
}

/// A submitted payment, carrying only the fields its method requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum PaymentMethod {
  #[serde(rename_all = "camelCase")]
  Card {
    cardholder_name: String,
    card_number: String,
    expiry_date: String,
    cvv: String,
  },
  #[serde(rename = "gcash", rename_all = "camelCase")]
  GCash { mobile_number: String, reference_number: String },
  #[serde(rename_all = "camelCase")]
  BankTransfer {
    bank: Bank,
    account_number: String,
    reference_number: String,
  },
  #[serde(rename_all = "camelCase")]
  Maya { mobile_number: String, reference_number: String },
  #[serde(rename = "paypal")]
  PayPal,
}

impl PaymentMethod {
  pub fn kind(&self) -> PaymentMethodKind {
    match self {
      PaymentMethod::Card { .. } => PaymentMethodKind::Card,
      PaymentMethod::GCash { .. } => PaymentMethodKind::GCash,
      PaymentMethod::BankTransfer { bank, .. } => PaymentMethodKind::Bank(*bank),
      PaymentMethod::Maya { .. } => PaymentMethodKind::Maya,
      PaymentMethod::PayPal => PaymentMethodKind::PayPal,
    }
  }

  /// Applies the same input masks the form applies while typing.
  pub fn formatted(self) -> Self {
    match self {
      PaymentMethod::Card {
        cardholder_name,
        card_number,
        expiry_date,
        cvv,
      } => PaymentMethod::Card {
        cardholder_name,
        card_number: format_card_number(&card_number),
        expiry_date: format_expiry_date(&expiry_date),
        cvv,
      },
      PaymentMethod::GCash {
        mobile_number,
        reference_number,
      } => PaymentMethod::GCash {
        mobile_number: format_mobile_number(&mobile_number),
        reference_number,
      },
      PaymentMethod::Maya {
        mobile_number,
        reference_number,
      } => PaymentMethod::Maya {
        mobile_number: format_mobile_number(&mobile_number),
        reference_number,
      },
      other => other,
    }
  }

  fn validate(&self) -> VaultResult<()> {
    match self {
      PaymentMethod::Card {
        cardholder_name,
        card_number,
        expiry_date,
        cvv,
      } => {
        require("cardholderName", cardholder_name, None)?;
        require("cardNumber", card_number, Some(CARD_NUMBER_MAX_LEN))?;
        require("expiryDate", expiry_date, Some(EXPIRY_MAX_LEN))?;
        require("cvv", cvv, Some(CVV_MAX_LEN))
      }
      PaymentMethod::GCash {
        mobile_number,
        reference_number,
      }
      | PaymentMethod::Maya {
        mobile_number,
        reference_number,
      } => {
        require("mobileNumber", mobile_number, Some(MOBILE_MAX_LEN))?;
        require("referenceNumber", reference_number, None)
      }
      PaymentMethod::BankTransfer {
        account_number,
        reference_number,
        ..
      } => {
        require("accountNumber", account_number, None)?;
        require("referenceNumber", reference_number, None)
      }
      PaymentMethod::PayPal => Ok(()),
    }
  }
}

fn require(field: &'static str, value: &str, max_len: Option<usize>) -> VaultResult<()> {
  if value.trim().is_empty() {
    return Err(VaultError::InvalidPaymentForm {
      field,
      message: "is required".to_string(),
    });
  }
  if let Some(max) = max_len {
    let len = value.chars().count();
    if len > max {
      return Err(VaultError::InvalidPaymentForm {
        field,
        message: format!("must be at most {} characters (got {})", max, len),
      });
    }
  }
  Ok(())
}

/// Which method the payer picked, independent of the details entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaymentMethodKind {
  #[default]
  Card,
  GCash,
  Bank(Bank),
  Maya,
  PayPal,
}

impl PaymentMethodKind {
  /// Display order of the method picker.
  pub const ALL: [PaymentMethodKind; 7] = [
    PaymentMethodKind::Card,
    PaymentMethodKind::GCash,
    PaymentMethodKind::Bank(Bank::Bdo),
    PaymentMethodKind::Bank(Bank::ChinaBank),
    PaymentMethodKind::Bank(Bank::Pnb),
    PaymentMethodKind::Maya,
    PaymentMethodKind::PayPal,
  ];

  /// Identifier stored on purchase records.
  pub fn id(self) -> &'static str {
    match self {
      PaymentMethodKind::Card => "card",
      PaymentMethodKind::GCash => "gcash",
      PaymentMethodKind::Bank(bank) => bank.id(),
      PaymentMethodKind::Maya => "maya",
      PaymentMethodKind::PayPal => "paypal",
    }
  }

  pub fn display_name(self) -> &'static str {
    match self {
      PaymentMethodKind::Card => "Credit/Debit Card",
      PaymentMethodKind::GCash => "GCash",
      PaymentMethodKind::Bank(Bank::Bdo) => "BDO Online Banking",
      PaymentMethodKind::Bank(Bank::ChinaBank) => "China Bank",
      PaymentMethodKind::Bank(Bank::Pnb) => "PNB Online",
      PaymentMethodKind::Maya => "Maya Wallet",
      PaymentMethodKind::PayPal => "PayPal",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      PaymentMethodKind::Card => "Pay with Visa, Mastercard, or UnionPay",
      PaymentMethodKind::GCash => "Pay using your GCash wallet",
      PaymentMethodKind::Bank(Bank::Bdo) => "Bank transfer via BDO",
      PaymentMethodKind::Bank(Bank::ChinaBank) => "Bank transfer via China Bank",
      PaymentMethodKind::Bank(Bank::Pnb) => "Bank transfer via PNB",
      PaymentMethodKind::Maya => "Pay using Maya (formerly PayMaya)",
      PaymentMethodKind::PayPal => "Pay with your PayPal account",
    }
  }
}

impl fmt::Display for PaymentMethodKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}

impl FromStr for PaymentMethodKind {
  type Err = VaultError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    PaymentMethodKind::ALL
      .into_iter()
      .find(|kind| kind.id().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| VaultError::InvalidPaymentForm {
        field: "method",
        message: format!("unsupported payment method '{}'", s),
      })
  }
}

/// Picker entry for one payment method.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOption {
  pub id: &'static str,
  pub name: &'static str,
  pub description: &'static str,
}

pub fn payment_method_options() -> Vec<PaymentMethodOption> {
  PaymentMethodKind::ALL
    .into_iter()
    .map(|kind| PaymentMethodOption {
      id: kind.id(),
      name: kind.display_name(),
      description: kind.description(),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
  pub name: &'static str,
  pub label: String,
  pub placeholder: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_length: Option<usize>,
}

impl FormField {
  fn new(name: &'static str, label: impl Into<String>, placeholder: &'static str, max_length: Option<usize>) -> Self {
    Self {
      name,
      label: label.into(),
      placeholder,
      max_length,
    }
  }
}

/// Everything the billing page shows for the selected method.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFormSpec {
  pub method: &'static str,
  pub title: String,
  pub instructions: Vec<String>,
  pub fields: Vec<FormField>,
  pub submit_label: String,
}

/// Renders the method-specific form for `kind`, quoting `amount` where the
/// payer has to send money themselves.
pub fn render_payment_form(kind: PaymentMethodKind, amount: f64) -> PaymentFormSpec {
  let amount_display = format_peso(amount);
  let (title, instructions, fields) = match kind {
    PaymentMethodKind::Card => (
      "Card Details".to_string(),
      Vec::new(),
      vec![
        FormField::new("cardholderName", "Cardholder Name", "John Doe", None),
        FormField::new("cardNumber", "Card Number", "1234 5678 9012 3456", Some(CARD_NUMBER_MAX_LEN)),
        FormField::new("expiryDate", "Expiry Date", "MM/YY", Some(EXPIRY_MAX_LEN)),
        FormField::new("cvv", "CVV", "123", Some(CVV_MAX_LEN)),
      ],
    ),
    PaymentMethodKind::GCash => (
      "GCash Payment".to_string(),
      wallet_instructions("GCash", "Go to \"Pay QR\" or \"Send Money\"", &amount_display, GCASH_MERCHANT_NUMBER),
      vec![
        FormField::new("mobileNumber", "GCash Mobile Number", "0917 123 4567", Some(MOBILE_MAX_LEN)),
        FormField::new("referenceNumber", "GCash Reference Number", "Enter reference number from GCash", None),
      ],
    ),
    PaymentMethodKind::Maya => (
      "Maya Payment".to_string(),
      wallet_instructions("Maya", "Go to \"Send Money\" or \"Pay Bills\"", &amount_display, MAYA_MERCHANT_NUMBER),
      vec![
        FormField::new("mobileNumber", "Maya Mobile Number", "0918 765 4321", Some(MOBILE_MAX_LEN)),
        FormField::new("referenceNumber", "Maya Reference Number", "Enter reference number from Maya", None),
      ],
    ),
    PaymentMethodKind::Bank(bank) => (
      bank.transfer_title().to_string(),
      vec![
        format!("Bank: {}", bank.legal_name()),
        format!("Account Name: {}", MERCHANT_ACCOUNT_NAME),
        format!("Account Number: {}", bank.merchant_account_number()),
        format!("Amount: {}", amount_display),
      ],
      vec![
        FormField::new("accountNumber", "Your Bank Account Number", "Enter your bank account number", None),
        FormField::new(
          "referenceNumber",
          "Bank Reference Number",
          "Enter reference number from bank transaction",
          None,
        ),
      ],
    ),
    PaymentMethodKind::PayPal => (
      "PayPal".to_string(),
      vec![
        "You will be redirected to PayPal to complete your payment securely.".to_string(),
        "After successful payment, you will be returned to GameVault.".to_string(),
      ],
      Vec::new(),
    ),
  };

  PaymentFormSpec {
    method: kind.id(),
    title,
    instructions,
    fields,
    submit_label: format!("Pay {} with {}", amount_display, kind.display_name()),
  }
}

fn wallet_instructions(app: &str, menu_step: &str, amount: &str, merchant_number: &str) -> Vec<String> {
  vec![
    format!("Open your {} app", app),
    menu_step.to_string(),
    format!("Enter the amount: {}", amount),
    format!("Send to {} number: {}", app, merchant_number),
    "Enter the reference number below".to_string(),
  ]
}

pub fn format_peso(amount: f64) -> String {
  format!("₱{:.2}", amount)
}

/// Fields shared by every payment method, plus the method itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
  pub payment: PaymentMethod,
  pub email: String,
  #[serde(default = "default_country")]
  pub country: String,
  pub zip_code: String,
  #[serde(default)]
  pub terms_accepted: bool,
}

fn default_country() -> String {
  DEFAULT_COUNTRY.to_string()
}

impl PaymentForm {
  pub fn formatted(self) -> Self {
    PaymentForm {
      payment: self.payment.formatted(),
      ..self
    }
  }

  /// Presence and length checks only; no field is checked against payment-network rules.
  pub fn validate(&self) -> VaultResult<()> {
    self.payment.validate()?;
    require("email", &self.email, None)?;
    require("zipCode", &self.zip_code, None)?;
    if !SUPPORTED_COUNTRIES.contains(&self.country.as_str()) {
      return Err(VaultError::InvalidPaymentForm {
        field: "country",
        message: format!("unsupported country '{}'", self.country),
      });
    }
    if !self.terms_accepted {
      return Err(VaultError::InvalidPaymentForm {
        field: "termsAccepted",
        message: "terms of service must be accepted".to_string(),
      });
    }
    Ok(())
  }
}

fn digits_only(value: &str) -> String {
  value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups up to 16 digits in blocks of four. Fewer than four digits leaves the input untouched.
pub fn format_card_number(value: &str) -> String {
  let digits = digits_only(value);
  if digits.len() < 4 {
    return value.to_string();
  }
  let digits: Vec<char> = digits.chars().take(16).collect();
  digits
    .chunks(4)
    .map(|chunk| chunk.iter().collect::<String>())
    .collect::<Vec<_>>()
    .join(" ")
}

/// `MMYY` → `MM/YY`.
pub fn format_expiry_date(value: &str) -> String {
  let digits = digits_only(value);
  if digits.len() < 2 {
    return value.to_string();
  }
  if digits.len() == 2 {
    return digits;
  }
  let year_end = digits.len().min(4);
  format!("{}/{}", &digits[..2], &digits[2..year_end])
}

/// `09171234567` → `0917 123 4567`.
pub fn format_mobile_number(value: &str) -> String {
  let digits = digits_only(value);
  match digits.len() {
    0..=4 => digits,
    5..=7 => format!("{} {}", &digits[..4], &digits[4..]),
    n => format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..n.min(11)]),
  }
}
