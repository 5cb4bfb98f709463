// glucoin/core/src/api/doctor.rs

//! Doctor-facing dashboard endpoints. These require a session whose user has
//! the doctor role; the backend enforces it, the client just forwards.

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::models::booking::Booking;
use crate::models::doctor::DoctorIncomeSummary;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

#[instrument(skip(client), err(Display))]
pub async fn income_summary(client: &ApiClient) -> ClientResult<DoctorIncomeSummary> {
  client.get("doctor/income", &[]).await
}

#[instrument(skip(client), err(Display))]
pub async fn list_bookings(client: &ApiClient) -> ClientResult<Vec<Booking>> {
  client.get("doctor/bookings", &[]).await
}

/// Accepts a pending consultation request.
#[instrument(skip(client), err(Display))]
pub async fn confirm_booking(client: &ApiClient, booking_id: Uuid) -> ClientResult<()> {
  client
    .post_no_content(&format!("doctor/bookings/{}/confirm", booking_id), json!({}))
    .await
}
