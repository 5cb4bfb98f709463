// glucoin/core/src/search.rs

//! Client-side search, filtering, and pagination.
//!
//! The facility screen fetches everything within a radius and then narrows
//! locally: by distance, by facility type, and by a free-text match against
//! name/address/city. Product listings reuse the pagination and the sequence
//! guard for their debounced search box.

use crate::config::{MAX_RADIUS_KM, MIN_RADIUS_KM};
use crate::geo::Coordinate;
use crate::models::facility::{Facility, FacilityType};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// A facility together with its distance from the search origin.
#[derive(Debug, Clone)]
pub struct FacilityHit {
  pub facility: Facility,
  pub distance_km: f64,
}

/// Local filter state for the facility screen.
#[derive(Debug, Clone, Default)]
pub struct FacilityFilter {
  /// Radius slider value; clamped to the 5–50 km bounds on use.
  pub radius_km: Option<f64>,
  pub facility_type: Option<FacilityType>,
  /// Free text matched case-insensitively against name, address, and city.
  pub query: Option<String>,
}

impl FacilityFilter {
  fn effective_radius(&self) -> f64 {
    self
      .radius_km
      .unwrap_or(MAX_RADIUS_KM)
      .clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
  }

  fn matches_text(&self, facility: &Facility) -> bool {
    let Some(query) = self.query.as_deref() else {
      return true;
    };
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
      return true;
    }
    facility.name.to_lowercase().contains(&needle)
      || facility.address.to_lowercase().contains(&needle)
      || facility.city.to_lowercase().contains(&needle)
  }
}

/// Filters `facilities` by the given filter and sorts ascending by distance
/// from `origin`. Pure; the caller fetches and re-fetches as it pleases.
pub fn search_facilities(origin: Coordinate, facilities: &[Facility], filter: &FacilityFilter) -> Vec<FacilityHit> {
  let radius = filter.effective_radius();
  let mut hits: Vec<FacilityHit> = facilities
    .iter()
    .filter(|f| filter.facility_type.map_or(true, |t| f.facility_type == t))
    .filter(|f| filter.matches_text(f))
    .map(|f| FacilityHit {
      distance_km: origin.distance_km(&Coordinate {
        latitude: f.latitude,
        longitude: f.longitude,
      }),
      facility: f.clone(),
    })
    .filter(|hit| hit.distance_km <= radius)
    .collect();

  hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
  hits
}

/// Monotonic ticket dispenser guarding debounced searches against responses
/// arriving out of request order: a response is applied only when its ticket
/// is still the newest one issued.
#[derive(Debug, Default)]
pub struct SearchSequence {
  issued: AtomicU64,
  applied: AtomicU64,
}

impl SearchSequence {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stamp a new outgoing request.
  pub fn issue(&self) -> u64 {
    self.issued.fetch_add(1, Ordering::SeqCst) + 1
  }

  /// Whether the response for `ticket` may overwrite local state. Accepting
  /// also retires every older in-flight response.
  pub fn try_apply(&self, ticket: u64) -> bool {
    if ticket != self.issued.load(Ordering::SeqCst) {
      return false;
    }
    self.applied.store(ticket, Ordering::SeqCst);
    true
  }

  /// Ticket of the response currently reflected in local state, or zero when
  /// nothing has been applied yet. Lets a screen tell "empty because the
  /// latest search matched nothing" apart from "still waiting".
  pub fn last_applied(&self) -> u64 {
    self.applied.load(Ordering::SeqCst)
  }
}

/// Keystroke debouncer for the search boxes: each call to [`Debouncer::ready`]
/// waits out the delay and then reports whether it is still the newest
/// keystroke. Only a `true` result should trigger a fetch.
#[derive(Debug)]
pub struct Debouncer {
  seq: AtomicU64,
  delay: Duration,
}

impl Debouncer {
  pub fn new(delay: Duration) -> Self {
    Self {
      seq: AtomicU64::new(0),
      delay,
    }
  }

  pub async fn ready(&self) -> bool {
    let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
    tokio::time::sleep(self.delay).await;
    ticket == self.seq.load(Ordering::SeqCst)
  }
}

/// One page of a client-side paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
  pub items: Vec<T>,
  /// 1-based page number.
  pub number: usize,
  pub total_pages: usize,
  pub total_items: usize,
}

/// Slices an already-fetched list into pages. Page numbers are 1-based and
/// out-of-range requests clamp to the last page, matching how the original
/// list screens behave when a filter shrinks the result set.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
  let per_page = per_page.max(1);
  let total_items = items.len();
  let total_pages = total_items.div_ceil(per_page).max(1);
  let number = page.clamp(1, total_pages);

  let start = (number - 1) * per_page;
  let slice = items.get(start..(start + per_page).min(total_items)).unwrap_or(&[]);

  Page {
    items: slice.to_vec(),
    number,
    total_pages,
    total_items,
  }
}
