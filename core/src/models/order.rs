// glucoin/core/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle as the backend reports it. Transitions are monotonic along
/// `PendingPayment → Processing → Shipped → Delivered → Completed`;
/// `Cancelled` is terminal and only reachable from the first two states.
/// The client never computes the next state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
  PendingPayment,
  Processing,
  Shipped,
  Delivered,
  Completed,
  Cancelled,
  /// Any status value this client version does not know yet.
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
  Pending,
  Paid,
  Failed,
  Expired,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
  pub status: PaymentStatus,
  pub method: Option<String>,
  pub expiry_time: Option<DateTime<Utc>>,
  /// Hosted-checkout URL ("Snap"); present only while payment is still due.
  pub snap_redirect_url: Option<String>,
}

/// One order line with a snapshot of the product as it was at purchase time,
/// so later catalog edits never rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub id: Uuid,
  pub product_id: Uuid,
  pub product_name: String,
  pub product_image: Option<String>,
  pub quantity: u32,
  /// Unit price in rupiah at purchase time.
  pub price: i64,
  pub subtotal: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddress {
  pub recipient_name: String,
  pub phone: String,
  pub street: String,
  pub city: String,
  pub province: String,
  pub postal_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub order_number: String,
  pub status: OrderStatus,
  pub payment: Payment,
  pub items: Vec<OrderItem>,
  pub shipping_address: ShippingAddress,
  pub subtotal: i64,
  pub shipping_cost: i64,
  pub admin_fee: i64,
  pub discount: i64,
  pub total: i64,
  pub created_at: DateTime<Utc>,
}
