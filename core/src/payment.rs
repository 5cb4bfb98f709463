// glucoin/core/src/payment.rs

//! Interpretation of the payment gateway's redirect callback.
//!
//! After hosted checkout ("Snap") the gateway redirects back with the result
//! in the query string. The client only renders a human-readable outcome from
//! it; the backend independently revalidates the payment, so no signature
//! checking happens here.

use crate::error::{ClientError, ClientResult};
use serde::Deserialize;
use url::Url;

/// Raw callback parameters as they appear in the redirect URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentCallback {
  pub order_id: String,
  pub status_code: Option<String>,
  pub transaction_status: Option<String>,
}

/// What the confirmation page tells the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
  Success,
  Pending,
  Failed,
  Unknown,
}

impl PaymentCallback {
  /// Parses the callback out of a full redirect URL.
  pub fn from_url(raw: &str) -> ClientResult<Self> {
    let url = Url::parse(raw).map_err(|e| ClientError::Validation(format!("Invalid callback URL: {}", e)))?;
    Self::from_pairs(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())))
  }

  /// Parses a bare query string (`order_id=...&status_code=...`).
  pub fn from_query(query: &str) -> ClientResult<Self> {
    Self::from_pairs(
      url::form_urlencoded::parse(query.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned())),
    )
  }

  fn from_pairs(pairs: impl Iterator<Item = (String, String)>) -> ClientResult<Self> {
    let mut order_id = None;
    let mut status_code = None;
    let mut transaction_status = None;

    for (key, value) in pairs {
      match key.as_str() {
        "order_id" => order_id = Some(value),
        "status_code" => status_code = Some(value),
        // The gateway sends `transaction_status`; older links used `status`.
        "transaction_status" | "status" => transaction_status = Some(value),
        _ => {}
      }
    }

    let order_id =
      order_id.ok_or_else(|| ClientError::Validation("Callback is missing order_id".to_string()))?;

    Ok(Self {
      order_id,
      status_code,
      transaction_status,
    })
  }

  pub fn outcome(&self) -> PaymentOutcome {
    if let Some(status) = self.transaction_status.as_deref() {
      return match status {
        "settlement" | "capture" | "success" => PaymentOutcome::Success,
        "pending" => PaymentOutcome::Pending,
        "deny" | "cancel" | "expire" | "failure" | "failed" => PaymentOutcome::Failed,
        _ => PaymentOutcome::Unknown,
      };
    }
    // No transaction status: fall back to the gateway's numeric code.
    match self.status_code.as_deref() {
      Some("200") => PaymentOutcome::Success,
      Some("201") => PaymentOutcome::Pending,
      Some("202") => PaymentOutcome::Failed,
      _ => PaymentOutcome::Unknown,
    }
  }
}

impl PaymentOutcome {
  /// Headline the confirmation page shows.
  pub fn headline(&self) -> &'static str {
    match self {
      PaymentOutcome::Success => "Pembayaran Berhasil",
      PaymentOutcome::Pending => "Menunggu Pembayaran",
      PaymentOutcome::Failed => "Pembayaran Gagal",
      PaymentOutcome::Unknown => "Status Pembayaran Tidak Diketahui",
    }
  }

  /// Supporting copy under the headline.
  pub fn detail(&self) -> &'static str {
    match self {
      PaymentOutcome::Success => "Terima kasih! Pesanan Anda sedang diproses.",
      PaymentOutcome::Pending => "Selesaikan pembayaran Anda sebelum batas waktu berakhir.",
      PaymentOutcome::Failed => "Pembayaran tidak dapat diproses. Silakan coba lagi.",
      PaymentOutcome::Unknown => "Kami sedang memeriksa status pembayaran Anda.",
    }
  }
}
