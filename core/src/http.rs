// glucoin/core/src/http.rs

//! Thin HTTP layer the typed API wrappers sit on.
//!
//! `Transport` is the seam: production uses [`HttpTransport`] (reqwest), tests
//! substitute a scripted in-memory implementation. `ApiClient` adds the bearer
//! token from the injected [`SessionStore`], unwraps the backend's response
//! envelope, and maps HTTP failures onto [`ClientError`].

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// One request against the backend, already reduced to data.
#[derive(Debug, Clone)]
pub struct ApiRequest {
  pub method: Method,
  /// Path relative to the configured base URL, e.g. `orders/123`.
  pub path: String,
  pub query: Vec<(String, String)>,
  pub body: Option<Value>,
  pub bearer_token: Option<String>,
}

impl ApiRequest {
  pub fn new(method: Method, path: impl Into<String>) -> Self {
    Self {
      method,
      path: path.into(),
      query: Vec::new(),
      body: None,
      bearer_token: None,
    }
  }
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
  pub status: u16,
  pub body: Value,
}

/// The pluggable network seam.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
  async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

/// Production transport backed by reqwest.
#[derive(Debug)]
pub struct HttpTransport {
  http: reqwest::Client,
  base_url: Url,
}

impl HttpTransport {
  pub fn new(config: &ClientConfig) -> ClientResult<Self> {
    // A trailing slash matters to Url::join, so guarantee one.
    let normalized = if config.api_base_url.ends_with('/') {
      config.api_base_url.clone()
    } else {
      format!("{}/", config.api_base_url)
    };
    let base_url =
      Url::parse(&normalized).map_err(|e| ClientError::Config(format!("Invalid API base URL: {}", e)))?;

    let http = reqwest::Client::builder()
      .timeout(config.request_timeout)
      .build()?;

    Ok(Self { http, base_url })
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
    let url = self
      .base_url
      .join(&request.path)
      .map_err(|e| ClientError::Config(format!("Invalid request path '{}': {}", request.path, e)))?;

    let mut builder = self.http.request(request.method.clone(), url);
    if !request.query.is_empty() {
      builder = builder.query(&request.query);
    }
    if let Some(body) = &request.body {
      builder = builder.json(body);
    }
    if let Some(token) = &request.bearer_token {
      builder = builder.bearer_auth(token);
    }

    let response = builder.send().await?;
    let status = response.status().as_u16();
    // Error payloads are still JSON worth reading for their `message`;
    // an empty or non-JSON body just becomes null.
    let body = response.json::<Value>().await.unwrap_or(Value::Null);

    debug!(status, path = %request.path, "API response received.");
    Ok(ApiResponse { status, body })
  }
}

/// Standard backend envelope: `{ "success": bool, "message": ..., "data": ... }`.
/// Only `data` matters on the success path; `message` is read separately on
/// errors by [`extract_message`].
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
  data: Option<T>,
}

/// Typed entry point all API surface modules share.
#[derive(Debug, Clone)]
pub struct ApiClient {
  transport: Arc<dyn Transport>,
  session: Arc<SessionStore>,
}

impl ApiClient {
  pub fn new(transport: Arc<dyn Transport>, session: Arc<SessionStore>) -> Self {
    Self { transport, session }
  }

  /// Builds the production client: reqwest transport plus the session store
  /// persisted at the configured path.
  pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
    let transport = HttpTransport::new(config)?;
    let session = SessionStore::open(config.session_file.clone());
    Ok(Self::new(Arc::new(transport), Arc::new(session)))
  }

  pub fn session(&self) -> &Arc<SessionStore> {
    &self.session
  }

  pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> ClientResult<T> {
    let mut request = ApiRequest::new(Method::GET, path);
    request.query = query.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect();
    self.dispatch(request).await
  }

  pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> ClientResult<T> {
    let mut request = ApiRequest::new(Method::POST, path);
    request.body = Some(body);
    self.dispatch(request).await
  }

  pub async fn patch<T: DeserializeOwned>(&self, path: &str, body: Value) -> ClientResult<T> {
    let mut request = ApiRequest::new(Method::PATCH, path);
    request.body = Some(body);
    self.dispatch(request).await
  }

  pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
    self.dispatch(ApiRequest::new(Method::DELETE, path)).await
  }

  /// Variant for action endpoints whose response body carries nothing useful.
  pub async fn post_no_content(&self, path: &str, body: Value) -> ClientResult<()> {
    let mut request = ApiRequest::new(Method::POST, path);
    request.body = Some(body);
    self.send_checked(request).await?;
    Ok(())
  }

  async fn dispatch<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
    let response = self.send_checked(request).await?;

    // Prefer the enveloped `data`; fall back to decoding the body directly for
    // endpoints that return the entity bare.
    match serde_json::from_value::<ApiEnvelope<T>>(response.body.clone()) {
      Ok(ApiEnvelope { data: Some(data), .. }) => Ok(data),
      _ => serde_json::from_value::<T>(response.body).map_err(|e| ClientError::Decode { source: e }),
    }
  }

  async fn send_checked(&self, mut request: ApiRequest) -> ClientResult<ApiResponse> {
    request.bearer_token = self.session.token();
    let path = request.path.clone();
    let response = self.transport.execute(request).await?;

    match response.status {
      200..=299 => Ok(response),
      401 | 403 => {
        warn!(path = %path, status = response.status, "Request rejected as unauthenticated.");
        Err(ClientError::Auth(extract_message(&response.body)))
      }
      404 => Err(ClientError::NotFound(extract_message(&response.body))),
      status => Err(ClientError::Api {
        status,
        message: extract_message(&response.body),
      }),
    }
  }
}

/// Pulls the backend's `message` field out of an error payload, falling back
/// to the generic copy when there is none.
fn extract_message(body: &Value) -> String {
  body
    .get("message")
    .and_then(Value::as_str)
    .map(str::to_string)
    .unwrap_or_else(|| "Terjadi kesalahan. Silakan coba lagi.".to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn extract_message_prefers_the_payload_field() {
    let body = json!({"success": false, "message": "Produk tidak ditemukan"});
    assert_eq!(extract_message(&body), "Produk tidak ditemukan");
  }

  #[test]
  fn extract_message_falls_back_to_generic_copy() {
    assert_eq!(extract_message(&Value::Null), "Terjadi kesalahan. Silakan coba lagi.");
  }
}
