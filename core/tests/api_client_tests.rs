// tests/api_client_tests.rs
mod common;

use common::*;
use glucoin_client::api::marketplace::{self, ProductQuery};
use glucoin_client::models::product::Product;
use glucoin_client::ClientError;
use serde_json::json;
use uuid::Uuid;

fn product_json(id: Uuid, name: &str, stock: u32) -> serde_json::Value {
  json!({
    "id": id,
    "name": name,
    "description": "Alat cek gula darah",
    "price": 250_000,
    "quantity": stock,
    "category": "alat-kesehatan",
    "image_url": null,
    "created_at": "2025-08-01T00:00:00Z"
  })
}

#[tokio::test]
async fn enveloped_data_is_unwrapped() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let id = Uuid::new_v4();
  transport.respond("GET", "products", 200, envelope(json!([product_json(id, "Glukometer", 5)])));

  let products = marketplace::list_products(&client, &ProductQuery::default()).await.unwrap();
  assert_eq!(products.len(), 1);
  assert_eq!(products[0].id, id);
}

#[tokio::test]
async fn a_bare_body_without_envelope_still_decodes() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let id = Uuid::new_v4();
  transport.respond("GET", &format!("products/{}", id), 200, product_json(id, "Glukometer", 5));

  let product: Product = marketplace::get_product(&client, id).await.unwrap();
  assert_eq!(product.name, "Glukometer");
}

#[tokio::test]
async fn http_404_maps_to_not_found() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let id = Uuid::new_v4();
  transport.respond(
    "GET",
    &format!("products/{}", id),
    404,
    json!({ "success": false, "message": "Produk tidak ditemukan" }),
  );

  let err = marketplace::get_product(&client, id).await.unwrap_err();
  assert!(err.is_not_found());
  assert_eq!(err.user_message(), "Data tidak ditemukan.");
}

#[tokio::test]
async fn http_401_maps_to_auth() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  transport.respond("GET", "cart", 401, json!({ "success": false, "message": "Unauthorized" }));

  let err = marketplace::get_cart(&client).await.unwrap_err();
  assert!(matches!(err, ClientError::Auth(_)));
}

#[tokio::test]
async fn server_errors_carry_the_payload_message() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  transport.respond(
    "POST",
    "cart/items",
    422,
    json!({ "success": false, "message": "Stok tidak mencukupi" }),
  );

  let err = marketplace::add_to_cart(&client, Uuid::new_v4(), 3).await.unwrap_err();
  match err {
    ClientError::Api { status, message } => {
      assert_eq!(status, 422);
      assert_eq!(message, "Stok tidak mencukupi");
    }
    other => panic!("expected Api error, got {:?}", other),
  }
}

#[tokio::test]
async fn zero_quantity_add_to_cart_never_reaches_the_network() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let err = marketplace::add_to_cart(&client, Uuid::new_v4(), 0).await.unwrap_err();
  assert!(matches!(err, ClientError::Validation(_)));
  assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn blank_search_text_is_not_sent_as_a_query_param() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  transport.respond("GET", "products", 200, envelope(json!([])));

  let query = ProductQuery {
    search: Some("   ".to_string()),
    category: None,
  };
  let _ = marketplace::list_products(&client, &query).await.unwrap();

  let calls = transport.calls();
  assert_eq!(calls.len(), 1);
  assert!(calls[0].query.is_empty(), "blank search must not become a param");
}
