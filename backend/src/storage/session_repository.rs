//! # Session Repository
//!
//! The logged-in flag (`isLoggedIn`, the string "true" or absent) and the
//! display name (`username`).

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use super::local_storage::LocalStorage;

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USERNAME_KEY: &str = "username";

#[derive(Clone)]
pub struct SessionRepository {
    storage: Arc<dyn LocalStorage>,
}

impl SessionRepository {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Anything other than the exact string "true" counts as logged out
    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.storage.get(LOGGED_IN_KEY)?.as_deref() == Some("true"))
    }

    pub fn username(&self) -> Result<Option<String>> {
        Ok(self.storage.get(USERNAME_KEY)?)
    }

    /// The name goes in first, so a failed write never leaves the flag set
    /// next to a stale name
    pub fn store_login(&self, username: &str) -> Result<()> {
        self.storage.set(USERNAME_KEY, username)?;
        self.storage.set(LOGGED_IN_KEY, "true")?;
        debug!("Stored session for '{}'", username);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(LOGGED_IN_KEY)?;
        self.storage.remove(USERNAME_KEY)?;
        debug!("Cleared session");
        Ok(())
    }
}
