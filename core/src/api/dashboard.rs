// glucoin/core/src/api/dashboard.rs

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::models::booking::{Booking, ConsultationType};
use crate::models::dashboard::{DailyTask, LabResult};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

#[instrument(skip(client), err(Display))]
pub async fn daily_tasks(client: &ApiClient, date: Option<NaiveDate>) -> ClientResult<Vec<DailyTask>> {
  let mut params = Vec::new();
  if let Some(d) = date {
    params.push(("date", d.to_string()));
  }
  client.get("dashboard/tasks", &params).await
}

/// Marks a task done/undone. Callers typically apply the returned snapshot
/// optimistically and reconcile on the next full task refetch.
#[instrument(skip(client), err(Display))]
pub async fn set_task_completed(client: &ApiClient, task_id: Uuid, completed: bool) -> ClientResult<DailyTask> {
  client
    .patch(&format!("dashboard/tasks/{}", task_id), json!({ "completed": completed }))
    .await
}

#[instrument(skip(client), err(Display))]
pub async fn lab_results(client: &ApiClient) -> ClientResult<Vec<LabResult>> {
  client.get("dashboard/lab-results", &[]).await
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBookingRequest {
  pub doctor_id: Uuid,
  pub consultation_type: ConsultationType,
  pub booking_date: NaiveDate,
  pub start_time: String,
  pub end_time: String,
}

#[instrument(skip(client, request), err(Display))]
pub async fn create_booking(client: &ApiClient, request: &CreateBookingRequest) -> ClientResult<Booking> {
  client.post("bookings", serde_json::to_value(request)?).await
}

#[instrument(skip(client), err(Display))]
pub async fn list_bookings(client: &ApiClient) -> ClientResult<Vec<Booking>> {
  client.get("bookings", &[]).await
}

#[instrument(skip(client), err(Display))]
pub async fn get_booking(client: &ApiClient, booking_id: Uuid) -> ClientResult<Booking> {
  client.get(&format!("bookings/{}", booking_id), &[]).await
}

#[instrument(skip(client), err(Display))]
pub async fn cancel_booking(client: &ApiClient, booking_id: Uuid) -> ClientResult<()> {
  client
    .post_no_content(&format!("bookings/{}/cancel", booking_id), json!({}))
    .await
}
