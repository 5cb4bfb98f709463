// glucoin/core/src/models/facility.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// "Faskes" — a healthcare facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilityType {
  Hospital,
  Clinic,
  Pharmacy,
  Laboratory,
  Puskesmas,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
  pub id: Uuid,
  pub name: String,
  pub facility_type: FacilityType,
  pub address: String,
  pub city: String,
  pub latitude: f64,
  pub longitude: f64,
  pub phone: Option<String>,
  pub open_hours: Option<String>,
}
