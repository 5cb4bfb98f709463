// glucoin/core/src/session.rs

//! Explicit session context, replacing the original's ambient browser-storage
//! reads. The store is created once at application start and injected wherever
//! an identity is needed; nothing else touches the persisted file.

use crate::error::{ClientError, ClientResult};
use crate::models::user::UserProfile;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  pub token: String,
  pub user: UserProfile,
}

/// Token + profile persisted as JSON on disk, mirrored in memory for
/// synchronous reads on every protected screen.
#[derive(Debug)]
pub struct SessionStore {
  path: PathBuf,
  current: RwLock<Option<Session>>,
}

impl SessionStore {
  /// Opens the store at `path`, loading an existing session when the file is
  /// present. A missing file means signed out, not an error; a corrupt file is
  /// discarded with a warning so a bad write can never lock the user out.
  pub fn open(path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let current = match fs::read_to_string(&path) {
      Ok(raw) => match serde_json::from_str::<Session>(&raw) {
        Ok(session) => {
          debug!(user_id = %session.user.id, "Restored session from disk.");
          Some(session)
        }
        Err(e) => {
          warn!(error = %e, "Stored session is unreadable, treating as signed out.");
          None
        }
      },
      Err(_) => None,
    };

    Self {
      path,
      current: RwLock::new(current),
    }
  }

  /// An in-memory store that never touches disk. Used by tests and by
  /// environments without a writable home directory.
  pub fn ephemeral() -> Self {
    Self {
      path: PathBuf::new(),
      current: RwLock::new(None),
    }
  }

  pub fn is_authenticated(&self) -> bool {
    self.current.read().is_some()
  }

  pub fn token(&self) -> Option<String> {
    self.current.read().as_ref().map(|s| s.token.clone())
  }

  pub fn user(&self) -> Option<UserProfile> {
    self.current.read().as_ref().map(|s| s.user.clone())
  }

  /// Replaces the active session and persists it.
  pub fn set_session(&self, session: Session) -> ClientResult<()> {
    self.persist(&session)?;
    info!(user_id = %session.user.id, "Session established.");
    *self.current.write() = Some(session);
    Ok(())
  }

  /// Signs out: drops the in-memory session and removes the file.
  pub fn clear(&self) -> ClientResult<()> {
    *self.current.write() = None;
    if !self.path.as_os_str().is_empty() && self.path.exists() {
      fs::remove_file(&self.path).map_err(|e| ClientError::Session(e.to_string()))?;
    }
    info!("Session cleared.");
    Ok(())
  }

  fn persist(&self, session: &Session) -> ClientResult<()> {
    if self.path.as_os_str().is_empty() {
      return Ok(()); // Ephemeral store
    }
    let raw = serde_json::to_string_pretty(session)?;
    fs::write(&self.path, raw).map_err(|e| ClientError::Session(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  fn profile() -> UserProfile {
    UserProfile {
      id: Uuid::new_v4(),
      name: "Budi Santoso".to_string(),
      email: "budi@example.com".to_string(),
      phone: Some("+62812000111".to_string()),
      role: crate::models::user::UserRole::Patient,
    }
  }

  #[test]
  fn missing_file_means_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::open(dir.path().join("session.json"));
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
  }

  #[test]
  fn set_then_reopen_restores_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::open(&path);
    store
      .set_session(Session {
        token: "tok-123".to_string(),
        user: profile(),
      })
      .unwrap();

    let reopened = SessionStore::open(&path);
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.token().unwrap(), "tok-123");
  }

  #[test]
  fn clear_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::open(&path);
    store
      .set_session(Session {
        token: "tok-123".to_string(),
        user: profile(),
      })
      .unwrap();
    store.clear().unwrap();

    assert!(!path.exists());
    assert!(!SessionStore::open(&path).is_authenticated());
  }

  #[test]
  fn corrupt_file_is_treated_as_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = SessionStore::open(&path);
    assert!(!store.is_authenticated());
  }
}
