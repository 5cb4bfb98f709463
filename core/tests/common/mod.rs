// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use glucoin_client::error::{ClientError, ClientResult};
use glucoin_client::http::{ApiClient, ApiRequest, ApiResponse, Transport};
use glucoin_client::session::SessionStore;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

static TRACING: OnceCell<()> = OnceCell::new();

pub fn setup_tracing() {
  TRACING.get_or_init(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .try_init();
  });
}

// --- Scripted transport ---

#[derive(Debug, Clone)]
pub struct Route {
  pub method: String,
  pub path: String,
  pub status: u16,
  pub body: Value,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
  pub method: String,
  pub path: String,
  pub query: Vec<(String, String)>,
  pub bearer_token: Option<String>,
  pub body: Option<Value>,
}

/// In-memory [`Transport`] replaying canned responses, recording every call
/// so tests can assert on order and authentication of requests.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
  routes: Mutex<Vec<Route>>,
  pub calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
    self.routes.lock().push(Route {
      method: method.to_string(),
      path: path.to_string(),
      status,
      body,
    });
  }

  pub fn calls(&self) -> Vec<RecordedCall> {
    self.calls.lock().clone()
  }

  pub fn call_paths(&self) -> Vec<String> {
    self.calls.lock().iter().map(|c| format!("{} {}", c.method, c.path)).collect()
  }
}

#[async_trait]
impl Transport for ScriptedTransport {
  async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
    self.calls.lock().push(RecordedCall {
      method: request.method.to_string(),
      path: request.path.clone(),
      query: request.query.clone(),
      bearer_token: request.bearer_token.clone(),
      body: request.body.clone(),
    });

    let routes = self.routes.lock();
    let found = routes
      .iter()
      .find(|r| r.method == request.method.as_str() && r.path == request.path)
      .cloned();
    drop(routes);

    match found {
      Some(route) => Ok(ApiResponse {
        status: route.status,
        body: route.body,
      }),
      None => Err(ClientError::Validation(format!(
        "No scripted route for {} {}",
        request.method, request.path
      ))),
    }
  }
}

/// Client over a scripted transport with an ephemeral (memory-only) session.
pub fn scripted_client(transport: &Arc<ScriptedTransport>) -> ApiClient {
  ApiClient::new(transport.clone(), Arc::new(SessionStore::ephemeral()))
}

// --- Fixtures ---

pub fn user_json(id: Uuid) -> Value {
  json!({
    "id": id,
    "name": "Budi Santoso",
    "email": "budi@example.com",
    "phone": "+62812000111",
    "role": "PATIENT"
  })
}

pub fn order_json(id: Uuid, status: &str, redirect_url: Option<&str>) -> Value {
  json!({
    "id": id,
    "order_number": "ORD-2025-0001",
    "status": status,
    "payment": {
      "status": if status == "PENDING_PAYMENT" { "PENDING" } else { "PAID" },
      "method": "snap",
      "expiry_time": "2025-08-30T10:00:00Z",
      "snap_redirect_url": redirect_url
    },
    "items": [{
      "id": Uuid::new_v4(),
      "product_id": Uuid::new_v4(),
      "product_name": "Glukometer GX-10",
      "product_image": null,
      "quantity": 1,
      "price": 250_000,
      "subtotal": 250_000
    }],
    "shipping_address": {
      "recipient_name": "Budi Santoso",
      "phone": "+62812000111",
      "street": "Jl. Sudirman No. 10",
      "city": "Jakarta Pusat",
      "province": "DKI Jakarta",
      "postal_code": "10110"
    },
    "subtotal": 250_000,
    "shipping_cost": 15_000,
    "admin_fee": 2_000,
    "discount": 0,
    "total": 267_000,
    "created_at": "2025-08-29T03:12:00Z"
  })
}

pub fn booking_json(id: Uuid, status: &str) -> Value {
  json!({
    "id": id,
    "status": status,
    "consultation_type": "ONLINE",
    "booking_date": "2025-09-02",
    "start_time": "09:00",
    "end_time": "09:30",
    "doctor": {
      "id": Uuid::new_v4(),
      "name": "dr. Sari Wulandari, Sp.PD",
      "specialization": "Penyakit Dalam",
      "photo_url": null,
      "consultation_fee": 150_000
    },
    "total": 150_000,
    "snap_redirect_url": null
  })
}

/// Wraps a payload in the backend's standard envelope.
pub fn envelope(data: Value) -> Value {
  json!({ "success": true, "message": null, "data": data })
}
