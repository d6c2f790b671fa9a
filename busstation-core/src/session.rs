//! Typed access to the browser-storage session.
//!
//! Tokens and profiles are stored as plain strings under fixed keys. Every protected
//! page goes through [`Session::require_user`] or [`Session::require_bsm`], which either
//! yield the typed identity or the login page to redirect to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    AuthToken,
    UserData,
    BsmToken,
    BsmData,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::AuthToken => "auth_token",
            StorageKey::UserData => "user_data",
            StorageKey::BsmToken => "bsm_token",
            StorageKey::BsmData => "bsm_data",
        }
    }

    pub const ALL: [StorageKey; 4] = [
        StorageKey::AuthToken,
        StorageKey::UserData,
        StorageKey::BsmToken,
        StorageKey::BsmData,
    ];
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("No active session, redirecting to {redirect}")]
    Missing { redirect: Route },

    #[error("Stored {key} is unreadable: {reason}")]
    Corrupt { key: &'static str, reason: String },

    #[error("Session storage failure: {0}")]
    Storage(String),
}

impl SessionError {
    /// Page to send the user to. Unreadable profiles are treated like a missing login.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            SessionError::Missing { redirect } => Some(redirect.clone()),
            SessionError::Corrupt { key, .. } if *key == StorageKey::BsmData.as_str() => {
                Some(Route::BsmLogin)
            }
            SessionError::Corrupt { .. } => Some(Route::Login),
            SessionError::Storage(_) => None,
        }
    }
}

/// Key/value storage behind the session (browser storage on the web, a file or memory here).
pub trait SessionStore: Send + Sync {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&self, key: StorageKey, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: StorageKey) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Usager,
    AgenceVoyage,
    Organisation,
}

/// Contents of `user_data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Vec<UserRole>,
    #[serde(default)]
    pub agency_id: Option<String>,
    #[serde(default)]
    pub organisation_id: Option<String>,
}

impl UserProfile {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role.contains(&role)
    }
}

/// Contents of `bsm_data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BsmProfile {
    pub user_id: String,
    pub username: String,
    pub ville: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub token: String,
    pub profile: UserProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BsmOperator {
    pub token: String,
    pub profile: BsmProfile,
}

/// Session context injected into each page.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn require_user(&self) -> Result<AuthenticatedUser, SessionError> {
        let (token, profile) = self.read_pair(StorageKey::AuthToken, StorageKey::UserData, Route::Login)?;
        Ok(AuthenticatedUser { token, profile })
    }

    pub fn require_bsm(&self) -> Result<BsmOperator, SessionError> {
        let (token, profile) = self.read_pair(StorageKey::BsmToken, StorageKey::BsmData, Route::BsmLogin)?;
        Ok(BsmOperator { token, profile })
    }

    pub fn login_user(&self, token: &str, profile: &UserProfile) -> Result<(), SessionError> {
        self.write_pair(StorageKey::AuthToken, StorageKey::UserData, token, profile)
    }

    pub fn login_bsm(&self, token: &str, profile: &BsmProfile) -> Result<(), SessionError> {
        self.write_pair(StorageKey::BsmToken, StorageKey::BsmData, token, profile)
    }

    /// Clears every session key, for both roles.
    pub fn logout(&self) -> Result<(), SessionError> {
        for key in StorageKey::ALL {
            self.store.remove(key)?;
        }
        tracing::info!("Session cleared");
        Ok(())
    }

    fn read_pair<T: for<'de> Deserialize<'de>>(
        &self,
        token_key: StorageKey,
        data_key: StorageKey,
        login: Route,
    ) -> Result<(String, T), SessionError> {
        let token = self
            .store
            .get(token_key)
            .filter(|t| !t.trim().is_empty())
            .ok_or(SessionError::Missing { redirect: login.clone() })?;

        let raw = self
            .store
            .get(data_key)
            .ok_or(SessionError::Missing { redirect: login })?;

        let profile = serde_json::from_str(&raw).map_err(|e| SessionError::Corrupt {
            key: data_key.as_str(),
            reason: e.to_string(),
        })?;

        Ok((token, profile))
    }

    fn write_pair<T: Serialize>(
        &self,
        token_key: StorageKey,
        data_key: StorageKey,
        token: &str,
        profile: &T,
    ) -> Result<(), SessionError> {
        let data = serde_json::to_string(profile)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        self.store.set(token_key, token)?;
        self.store.set(data_key, &data)
    }
}

/// Session storage that lives as long as the process.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries.read().ok()?.get(&key).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<(), SessionError> {
        self.entries
            .write()
            .map_err(|e| SessionError::Storage(e.to_string()))?
            .insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), SessionError> {
        self.entries
            .write()
            .map_err(|e| SessionError::Storage(e.to_string()))?
            .remove(&key);
        Ok(())
    }
}
