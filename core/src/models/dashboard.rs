// glucoin/core/src/models/dashboard.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry on the patient's daily checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTask {
  pub id: Uuid,
  pub title: String,
  /// Display time as the backend formats it, e.g. "07:30".
  pub time: Option<String>,
  pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabResult {
  pub id: Uuid,
  pub test_name: String,
  pub value: String,
  pub unit: Option<String>,
  pub reference_range: Option<String>,
  pub taken_at: NaiveDate,
  /// Backend flag: whether the value sits outside the reference range.
  pub abnormal: bool,
}
