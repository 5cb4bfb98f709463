// glucoin/core/src/models/chat.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRoom {
  pub id: Uuid,
  /// Display name of the other party (doctor for patients, patient for doctors).
  pub counterpart_name: String,
  pub last_message: Option<String>,
  pub last_message_at: Option<DateTime<Utc>>,
  pub unread_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
  pub id: Uuid,
  pub room_id: Uuid,
  pub sender_id: Uuid,
  pub body: String,
  pub sent_at: DateTime<Utc>,
}
