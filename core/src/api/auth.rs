// glucoin/core/src/api/auth.rs

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::models::user::UserProfile;
use crate::otp::OTP_LENGTH;
use crate::session::Session;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

/// Token + profile as the auth endpoints return them.
#[derive(Debug, Deserialize)]
struct AuthPayload {
  token: String,
  user: UserProfile,
}

/// Signs in and persists the session through the client's session store.
#[instrument(skip(client, password), err(Display))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ClientResult<UserProfile> {
  if email.trim().is_empty() || password.is_empty() {
    return Err(ClientError::Validation("Email dan kata sandi wajib diisi.".to_string()));
  }

  let payload: AuthPayload = client
    .post("auth/login", json!({ "email": email, "password": password }))
    .await?;

  let user = payload.user.clone();
  client.session().set_session(Session {
    token: payload.token,
    user: payload.user,
  })?;
  info!(user_id = %user.id, "Signed in.");
  Ok(user)
}

/// Registers a new account. The backend responds by emailing an OTP; the
/// session is only established after [`verify_otp`].
#[instrument(skip(client, password), err(Display))]
pub async fn register(client: &ApiClient, name: &str, email: &str, password: &str) -> ClientResult<()> {
  if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
    return Err(ClientError::Validation("Semua kolom wajib diisi.".to_string()));
  }
  client
    .post_no_content("auth/register", json!({ "name": name, "email": email, "password": password }))
    .await
}

/// Submits the emailed OTP. On success the backend answers with a session,
/// which is persisted before returning.
#[instrument(skip(client, code), err(Display))]
pub async fn verify_otp(client: &ApiClient, email: &str, code: &str) -> ClientResult<UserProfile> {
  if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
    return Err(ClientError::Validation("Kode OTP harus 6 digit angka.".to_string()));
  }

  let payload: AuthPayload = client
    .post("auth/verify-otp", json!({ "email": email, "otp": code }))
    .await?;

  let user = payload.user.clone();
  client.session().set_session(Session {
    token: payload.token,
    user: payload.user,
  })?;
  Ok(user)
}

#[instrument(skip(client), err(Display))]
pub async fn resend_otp(client: &ApiClient, email: &str) -> ClientResult<()> {
  client.post_no_content("auth/resend-otp", json!({ "email": email })).await
}

/// Signs out. The server call is best-effort; the local session is cleared
/// regardless so the user is never stuck signed in on a dead network.
#[instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> ClientResult<()> {
  if let Err(e) = client.post_no_content("auth/logout", json!({})).await {
    tracing::warn!(error = %e, "Server-side logout failed, clearing local session anyway.");
  }
  client.session().clear()
}
