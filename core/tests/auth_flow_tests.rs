// tests/auth_flow_tests.rs
mod common;

use common::*;
use glucoin_client::api::auth;
use glucoin_client::ClientError;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn login_persists_the_session_and_authenticates_later_calls() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let user_id = Uuid::new_v4();
  transport.respond(
    "POST",
    "auth/login",
    200,
    envelope(json!({ "token": "tok-abc", "user": user_json(user_id) })),
  );
  transport.respond("GET", "orders", 200, envelope(json!([])));

  let user = auth::login(&client, "budi@example.com", "rahasia123").await.unwrap();
  assert_eq!(user.id, user_id);
  assert!(client.session().is_authenticated());

  // The login call itself went out unauthenticated.
  assert_eq!(transport.calls()[0].bearer_token, None);

  // A subsequent request carries the stored token.
  let _orders = glucoin_client::api::marketplace::list_orders(&client).await.unwrap();
  assert_eq!(transport.calls()[1].bearer_token.as_deref(), Some("tok-abc"));
}

#[tokio::test]
async fn empty_credentials_fail_before_the_network() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let err = auth::login(&client, "", "pw").await.unwrap_err();
  assert!(matches!(err, ClientError::Validation(_)));
  assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn verify_otp_rejects_malformed_codes_locally() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  for bad in ["12345", "1234567", "12a456"] {
    let err = auth::verify_otp(&client, "budi@example.com", bad).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "{} should be rejected", bad);
  }
  assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn verify_otp_establishes_the_session() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let user_id = Uuid::new_v4();
  transport.respond(
    "POST",
    "auth/verify-otp",
    200,
    envelope(json!({ "token": "tok-otp", "user": user_json(user_id) })),
  );

  let user = auth::verify_otp(&client, "budi@example.com", "123456").await.unwrap();
  assert_eq!(user.id, user_id);
  assert_eq!(client.session().token().as_deref(), Some("tok-otp"));
}

#[tokio::test]
async fn wrong_otp_surfaces_the_backend_message() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  transport.respond(
    "POST",
    "auth/verify-otp",
    422,
    json!({ "success": false, "message": "Kode OTP salah atau kedaluwarsa" }),
  );

  let err = auth::verify_otp(&client, "budi@example.com", "000000").await.unwrap_err();
  assert_eq!(err.user_message(), "Kode OTP salah atau kedaluwarsa");
  assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn logout_clears_the_session_even_when_the_server_call_fails() {
  setup_tracing();
  let transport = ScriptedTransport::new();
  let client = scripted_client(&transport);

  let user_id = Uuid::new_v4();
  transport.respond(
    "POST",
    "auth/login",
    200,
    envelope(json!({ "token": "tok-abc", "user": user_json(user_id) })),
  );
  // No route scripted for auth/logout, so the logout call errors.

  auth::login(&client, "budi@example.com", "rahasia123").await.unwrap();
  assert!(client.session().is_authenticated());

  auth::logout(&client).await.unwrap();
  assert!(!client.session().is_authenticated());
}
