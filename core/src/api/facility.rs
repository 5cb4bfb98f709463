// glucoin/core/src/api/facility.rs

use crate::config::{MAX_RADIUS_KM, MIN_RADIUS_KM};
use crate::error::ClientResult;
use crate::geo::Coordinate;
use crate::http::ApiClient;
use crate::models::facility::Facility;
use tracing::instrument;

/// Fetches facilities around `origin`. The radius is clamped to the slider
/// bounds before it goes on the wire; finer filtering and sorting happen
/// client-side in [`crate::search::search_facilities`].
#[instrument(skip(client), err(Display))]
pub async fn nearby_facilities(client: &ApiClient, origin: Coordinate, radius_km: f64) -> ClientResult<Vec<Facility>> {
  let radius = radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
  client
    .get(
      "facilities/nearby",
      &[
        ("lat", origin.latitude.to_string()),
        ("lng", origin.longitude.to_string()),
        ("radius", radius.to_string()),
      ],
    )
    .await
}
