// glucoin/core/src/api/chat.rs

//! Chat over REST with since-id polling, as the original views do. There is
//! no socket layer; screens poll and overwrite their local message cache.

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::models::chat::{ChatMessage, ChatRoom};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

#[instrument(skip(client), err(Display))]
pub async fn list_rooms(client: &ApiClient) -> ClientResult<Vec<ChatRoom>> {
  client.get("chat/rooms", &[]).await
}

/// Messages in a room, optionally only those after `since` (for polling).
#[instrument(skip(client), err(Display))]
pub async fn list_messages(client: &ApiClient, room_id: Uuid, since: Option<Uuid>) -> ClientResult<Vec<ChatMessage>> {
  let mut params = Vec::new();
  if let Some(id) = since {
    params.push(("since", id.to_string()));
  }
  client.get(&format!("chat/rooms/{}/messages", room_id), &params).await
}

#[instrument(skip(client, body), err(Display))]
pub async fn send_message(client: &ApiClient, room_id: Uuid, body: &str) -> ClientResult<ChatMessage> {
  if body.trim().is_empty() {
    return Err(ClientError::Validation("Pesan tidak boleh kosong.".to_string()));
  }
  client
    .post(&format!("chat/rooms/{}/messages", room_id), json!({ "body": body }))
    .await
}
