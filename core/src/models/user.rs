// glucoin/core/src/models/user.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
  Patient,
  Doctor,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  #[serde(default = "default_role")]
  pub role: UserRole,
}

fn default_role() -> UserRole {
  UserRole::Patient
}
