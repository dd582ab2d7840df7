//! Single-owner store for the locally persisted session state.
//!
//! Everything in here is a cache of convenience (the backend stays
//! authoritative), kept in one JSON file instead of ad hoc reads and writes
//! scattered across the code.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, SessionError};
use crate::models::Lang;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionState {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub language: Option<Lang>,
    #[serde(default)]
    pub ai_session_id: Option<String>,
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Reads the session file; a missing file is an empty session.
    pub fn load(&self) -> Result<SessionState, SessionError> {
        if !self.path.exists() {
            return Ok(SessionState::default());
        }
        let file = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        let file = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(file, state)?;
        Ok(())
    }

    /// Drops the whole session, used on logout and on 401/403 answers.
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            info!("Cleared session at {}", self.path.display());
        }
        Ok(())
    }

    /// The bearer token, or the log-in condition. A corrupted session file
    /// counts as "not logged in" rather than a hard failure.
    pub fn require_token(&self) -> Result<String, ApiError> {
        let state = match self.load() {
            Ok(state) => state,
            Err(e) => {
                warn!("Could not read session file, treating as logged out: {}", e);
                return Err(ApiError::MissingToken);
            }
        };
        state
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or(ApiError::MissingToken)
    }

    pub fn store_token(&self, token: &str, language: Lang) -> Result<(), SessionError> {
        let mut state = self.load().unwrap_or_default();
        state.token = Some(token.to_string());
        state.language = Some(language);
        self.save(&state)?;
        info!("Stored token in {}", self.path.display());
        Ok(())
    }

    /// Keeps the last-known user object around for fast rendering on the
    /// next start. Not authoritative.
    pub fn cache_user(&self, user: &serde_json::Value) -> Result<(), SessionError> {
        let mut state = self.load().unwrap_or_default();
        state.user = Some(user.clone());
        self.save(&state)
    }

    /// The AI-assistant session id is generated client-side once and then
    /// reused for the lifetime of the session file.
    pub fn ensure_ai_session_id(&self) -> Result<String, SessionError> {
        let mut state = self.load().unwrap_or_default();
        if let Some(id) = &state.ai_session_id {
            return Ok(id.clone());
        }
        let id = Uuid::new_v4().to_string();
        state.ai_session_id = Some(id.clone());
        self.save(&state)?;
        info!("Generated new assistant session id");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in_tempdir() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_is_an_empty_session() {
        let (_dir, store) = store_in_tempdir();
        let state = store.load().unwrap();
        assert!(state.token.is_none());
        assert!(matches!(store.require_token(), Err(ApiError::MissingToken)));
    }

    #[test]
    fn token_round_trip_and_clear() {
        let (_dir, store) = store_in_tempdir();
        store.store_token("tok-123", Lang::Ru).unwrap();
        assert_eq!(store.require_token().unwrap(), "tok-123");
        assert_eq!(store.load().unwrap().language, Some(Lang::Ru));

        store.clear().unwrap();
        assert!(matches!(store.require_token(), Err(ApiError::MissingToken)));
    }

    #[test]
    fn assistant_session_id_is_stable() {
        let (_dir, store) = store_in_tempdir();
        let first = store.ensure_ai_session_id().unwrap();
        let second = store.ensure_ai_session_id().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn caching_a_user_keeps_the_token() {
        let (_dir, store) = store_in_tempdir();
        store.store_token("tok-123", Lang::Uz).unwrap();
        store
            .cache_user(&serde_json::json!({"id": 7, "name": "Aziza"}))
            .unwrap();
        let state = store.load().unwrap();
        assert_eq!(state.token.as_deref(), Some("tok-123"));
        assert_eq!(state.user.unwrap()["name"], "Aziza");
    }
}
