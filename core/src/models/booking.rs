// glucoin/core/src/models/booking.rs

use crate::models::doctor::DoctorProfile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
  PendingPayment,
  Pending,
  Confirmed,
  Completed,
  Cancelled,
  Expired,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationType {
  Online,
  Offline,
  #[serde(other)]
  Unknown,
}

/// A scheduled doctor consultation slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
  pub id: Uuid,
  pub status: BookingStatus,
  pub consultation_type: ConsultationType,
  pub booking_date: NaiveDate,
  /// Slot times as the backend formats them, e.g. "09:00".
  pub start_time: String,
  pub end_time: String,
  pub doctor: DoctorProfile,
  pub total: i64,
  /// Hosted-checkout URL while the booking still awaits payment.
  pub snap_redirect_url: Option<String>,
}
