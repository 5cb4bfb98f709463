// glucoin/core/src/geo.rs

//! Best-effort device location with a guaranteed answer.
//!
//! The facility screen must render no matter what the location layer does, so
//! [`resolve_location`] swallows every provider failure and answers with the
//! configured fallback coordinate instead. A real position arriving later is
//! handled by simply searching again.

use crate::error::ClientResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
  pub latitude: f64,
  pub longitude: f64,
}

const EARTH_RADIUS_KM: f64 = 6371.0;

impl Coordinate {
  /// Great-circle distance to `other` in kilometers (haversine).
  pub fn distance_km(&self, other: &Coordinate) -> f64 {
    let lat1 = self.latitude.to_radians();
    let lat2 = other.latitude.to_radians();
    let d_lat = (other.latitude - self.latitude).to_radians();
    let d_lng = (other.longitude - self.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
  }
}

/// Where the device thinks it is. Implementations may ask the OS, a GPS
/// daemon, or an IP-geolocation service; the SDK only needs the trait.
#[async_trait]
pub trait LocationProvider: Send + Sync + fmt::Debug {
  async fn current_position(&self) -> ClientResult<Coordinate>;
}

/// Provider that always answers with a fixed position. Doubles as the
/// "no location capability" substitute on headless environments.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
  pub position: Coordinate,
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
  async fn current_position(&self) -> ClientResult<Coordinate> {
    Ok(self.position)
  }
}

/// Resolves a usable position, never failing: any provider error (denied,
/// unavailable, timeout) degrades to `fallback` with a warning.
pub async fn resolve_location(provider: &dyn LocationProvider, fallback: Coordinate) -> Coordinate {
  match provider.current_position().await {
    Ok(position) => position,
    Err(e) => {
      warn!(error = %e, "Location unavailable, using fallback coordinate.");
      fallback
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::FALLBACK_COORDINATE;
  use crate::error::ClientError;

  /// Provider that fails the way a denied geolocation prompt would.
  #[derive(Debug)]
  struct FailingProvider;

  #[async_trait]
  impl LocationProvider for FailingProvider {
    async fn current_position(&self) -> ClientResult<Coordinate> {
      Err(ClientError::Validation("User denied geolocation".to_string()))
    }
  }

  #[test]
  fn haversine_jakarta_to_bandung_is_about_120_km() {
    let jakarta = FALLBACK_COORDINATE;
    let bandung = Coordinate {
      latitude: -6.917464,
      longitude: 107.619123,
    };
    let d = jakarta.distance_km(&bandung);
    assert!((115.0..135.0).contains(&d), "got {}", d);
  }

  #[test]
  fn distance_to_self_is_zero() {
    let p = Coordinate {
      latitude: -6.2,
      longitude: 106.8,
    };
    assert!(p.distance_km(&p) < 1e-9);
  }

  #[tokio::test]
  async fn provider_failure_resolves_to_fallback() {
    let position = resolve_location(&FailingProvider, FALLBACK_COORDINATE).await;
    assert_eq!(position, FALLBACK_COORDINATE);
  }

  #[tokio::test]
  async fn working_provider_wins_over_fallback() {
    let surabaya = Coordinate {
      latitude: -7.257472,
      longitude: 112.75209,
    };
    let provider = FixedLocationProvider { position: surabaya };
    let position = resolve_location(&provider, FALLBACK_COORDINATE).await;
    assert_eq!(position, surabaya);
  }
}
