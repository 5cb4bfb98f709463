// glucoin/core/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  /// Price in rupiah.
  pub price: i64,
  /// Units in stock; the quantity selector never exceeds this.
  pub quantity: u32,
  pub category: Option<String>,
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
}
