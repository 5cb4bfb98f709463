// glucoin/core/src/api/marketplace.rs

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::models::cart::Cart;
use crate::models::order::Order;
use crate::models::product::Product;
use serde::Serialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

/// Server-side listing filters for the catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductQuery {
  pub search: Option<String>,
  pub category: Option<String>,
}

impl ProductQuery {
  fn to_params(&self) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(s) = &self.search {
      if !s.trim().is_empty() {
        params.push(("search", s.clone()));
      }
    }
    if let Some(c) = &self.category {
      params.push(("category", c.clone()));
    }
    params
  }
}

#[instrument(skip(client), err(Display))]
pub async fn list_products(client: &ApiClient, query: &ProductQuery) -> ClientResult<Vec<Product>> {
  client.get("products", &query.to_params()).await
}

#[instrument(skip(client), err(Display))]
pub async fn get_product(client: &ApiClient, product_id: Uuid) -> ClientResult<Product> {
  client.get(&format!("products/{}", product_id), &[]).await
}

#[instrument(skip(client), err(Display))]
pub async fn get_cart(client: &ApiClient) -> ClientResult<Cart> {
  client.get("cart", &[]).await
}

#[instrument(skip(client), err(Display))]
pub async fn add_to_cart(client: &ApiClient, product_id: Uuid, quantity: u32) -> ClientResult<Cart> {
  if quantity == 0 {
    return Err(ClientError::Validation("Jumlah minimal 1.".to_string()));
  }
  client
    .post("cart/items", json!({ "product_id": product_id, "quantity": quantity }))
    .await
}

#[instrument(skip(client), err(Display))]
pub async fn update_cart_item(client: &ApiClient, item_id: Uuid, quantity: u32) -> ClientResult<Cart> {
  if quantity == 0 {
    return Err(ClientError::Validation("Jumlah minimal 1.".to_string()));
  }
  client
    .patch(&format!("cart/items/{}", item_id), json!({ "quantity": quantity }))
    .await
}

#[instrument(skip(client), err(Display))]
pub async fn remove_cart_item(client: &ApiClient, item_id: Uuid) -> ClientResult<Cart> {
  client.delete(&format!("cart/items/{}", item_id)).await
}

/// Checkout payload. The backend prices everything itself; the client only
/// names the address and payment method.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
  pub shipping_address: crate::models::order::ShippingAddress,
  pub payment_method: String,
}

#[instrument(skip(client, request), err(Display))]
pub async fn create_order(client: &ApiClient, request: &CreateOrderRequest) -> ClientResult<Order> {
  client.post("orders", serde_json::to_value(request)?).await
}

#[instrument(skip(client), err(Display))]
pub async fn list_orders(client: &ApiClient) -> ClientResult<Vec<Order>> {
  client.get("orders", &[]).await
}

#[instrument(skip(client), err(Display))]
pub async fn get_order(client: &ApiClient, order_id: Uuid) -> ClientResult<Order> {
  client.get(&format!("orders/{}", order_id), &[]).await
}

#[instrument(skip(client), err(Display))]
pub async fn cancel_order(client: &ApiClient, order_id: Uuid) -> ClientResult<()> {
  client
    .post_no_content(&format!("orders/{}/cancel", order_id), json!({}))
    .await
}

#[instrument(skip(client), err(Display))]
pub async fn confirm_delivery(client: &ApiClient, order_id: Uuid) -> ClientResult<()> {
  client
    .post_no_content(&format!("orders/{}/confirm-delivery", order_id), json!({}))
    .await
}
