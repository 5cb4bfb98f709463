// glucoin/core/src/error.rs

use thiserror::Error;

/// Everything that can go wrong on the client side.
///
/// The backend is the source of truth; most variants describe how a request
/// against it failed. `user_message` maps every variant to the string the UI
/// surfaces to the user (the platform ships in Indonesian).
#[derive(Debug, Error)]
pub enum ClientError {
  #[error("Network error: {source}")]
  Network {
    #[from]
    source: reqwest::Error,
  },

  /// The backend rejected the request. `message` is taken from the error
  /// payload's `message` field when one is present.
  #[error("API error (HTTP {status}): {message}")]
  Api { status: u16, message: String },

  #[error("Resource not found: {0}")]
  NotFound(String),

  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Authentication required: {0}")]
  Auth(String),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Session storage error: {0}")]
  Session(String),

  #[error("Failed to decode server response: {source}")]
  Decode {
    #[source]
    source: serde_json::Error,
  },
}

impl ClientError {
  /// The user-facing message for this error, matching the copy the original
  /// screens alert with. Network and decode failures share one generic string
  /// since the user can do nothing differently for either.
  pub fn user_message(&self) -> String {
    match self {
      ClientError::Network { .. } | ClientError::Decode { .. } => {
        "Terjadi kesalahan. Silakan coba lagi.".to_string()
      }
      ClientError::Api { message, .. } => message.clone(),
      ClientError::NotFound(_) => "Data tidak ditemukan.".to_string(),
      ClientError::Validation(m) => m.clone(),
      ClientError::Auth(_) => "Sesi Anda telah berakhir. Silakan masuk kembali.".to_string(),
      ClientError::Config(_) | ClientError::Session(_) => {
        "Terjadi kesalahan pada aplikasi. Silakan coba lagi.".to_string()
      }
    }
  }

  /// True for the errors the UI renders as a dedicated "not found" state with
  /// back navigation, rather than a generic alert.
  pub fn is_not_found(&self) -> bool {
    matches!(self, ClientError::NotFound(_))
  }
}

impl From<serde_json::Error> for ClientError {
  fn from(err: serde_json::Error) -> Self {
    ClientError::Decode { source: err }
  }
}

pub type ClientResult<T, E = ClientError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn api_error_surfaces_backend_message() {
    let err = ClientError::Api {
      status: 422,
      message: "Stok tidak mencukupi".to_string(),
    };
    assert_eq!(err.user_message(), "Stok tidak mencukupi");
  }

  #[test]
  fn not_found_is_its_own_ui_state() {
    let err = ClientError::NotFound("order abc".to_string());
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Data tidak ditemukan.");
  }

  #[test]
  fn decode_errors_share_the_generic_message() {
    let bad: std::result::Result<u32, _> = serde_json::from_str("not json");
    let err: ClientError = bad.unwrap_err().into();
    assert_eq!(err.user_message(), "Terjadi kesalahan. Silakan coba lagi.");
  }
}
