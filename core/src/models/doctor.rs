// glucoin/core/src/models/doctor.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
  pub id: Uuid,
  pub name: String,
  pub specialization: Option<String>,
  pub photo_url: Option<String>,
  /// Consultation fee in rupiah.
  pub consultation_fee: i64,
}

/// Aggregates shown on the doctor dashboard's income card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorIncomeSummary {
  pub total_income: i64,
  pub income_this_month: i64,
  pub completed_consultations: u32,
  pub pending_consultations: u32,
}
