// glucoin/core/src/models/cart.rs

use crate::models::product::Product;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
  pub id: Uuid,
  pub product: Product,
  pub quantity: u32,
  pub subtotal: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
  pub items: Vec<CartItem>,
  pub total: i64,
}

impl Cart {
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn item_count(&self) -> u32 {
    self.items.iter().map(|i| i.quantity).sum()
  }
}
