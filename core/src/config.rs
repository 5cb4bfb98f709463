// glucoin/core/src/config.rs

use crate::error::{ClientError, ClientResult};
use crate::geo::Coordinate;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default position used whenever the device location is unavailable: Jakarta.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
  latitude: -6.2,
  longitude: 106.816666,
};

/// Search radius bounds the facility screen exposes on its slider.
pub const MIN_RADIUS_KM: f64 = 5.0;
pub const MAX_RADIUS_KM: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the Glucoin backend, e.g. `https://api.glucoin.id/v1`.
  pub api_base_url: String,
  pub request_timeout: Duration,
  /// Where the session (token + profile) is persisted between runs.
  pub session_file: PathBuf,
  /// Position to assume when no location provider succeeds.
  pub fallback_coordinate: Coordinate,
  /// Initial facility search radius, clamped to the slider bounds.
  pub default_radius_km: f64,
}

impl ClientConfig {
  pub fn from_env() -> ClientResult<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name)
        .map_err(|e| ClientError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let api_base_url = get_env("GLUCOIN_API_BASE_URL")?;

    let timeout_secs = get_env("GLUCOIN_REQUEST_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse::<u64>()
      .map_err(|e| ClientError::Config(format!("Invalid GLUCOIN_REQUEST_TIMEOUT_SECS: {}", e)))?;

    let session_file = get_env("GLUCOIN_SESSION_FILE")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(".glucoin_session.json"));

    let latitude = get_env("GLUCOIN_FALLBACK_LAT")
      .unwrap_or_else(|_| FALLBACK_COORDINATE.latitude.to_string())
      .parse::<f64>()
      .map_err(|e| ClientError::Config(format!("Invalid GLUCOIN_FALLBACK_LAT: {}", e)))?;
    let longitude = get_env("GLUCOIN_FALLBACK_LNG")
      .unwrap_or_else(|_| FALLBACK_COORDINATE.longitude.to_string())
      .parse::<f64>()
      .map_err(|e| ClientError::Config(format!("Invalid GLUCOIN_FALLBACK_LNG: {}", e)))?;

    let default_radius_km = get_env("GLUCOIN_DEFAULT_RADIUS_KM")
      .unwrap_or_else(|_| "10".to_string())
      .parse::<f64>()
      .map_err(|e| ClientError::Config(format!("Invalid GLUCOIN_DEFAULT_RADIUS_KM: {}", e)))?
      .clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);

    tracing::info!("Client configuration loaded successfully.");

    Ok(Self {
      api_base_url,
      request_timeout: Duration::from_secs(timeout_secs),
      session_file,
      fallback_coordinate: Coordinate { latitude, longitude },
      default_radius_km,
    })
  }

  /// A config pointed at the given base URL with every other field at its
  /// default. Useful for tests and the demo binary.
  pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
    Self {
      api_base_url: api_base_url.into(),
      request_timeout: Duration::from_secs(30),
      session_file: PathBuf::from(".glucoin_session.json"),
      fallback_coordinate: FALLBACK_COORDINATE,
      default_radius_km: 10.0,
    }
  }
}
