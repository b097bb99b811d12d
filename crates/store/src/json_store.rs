//! Whole-collection JSON persistence.
//!
//! One indented UTF-8 JSON array file per collection. Every mutation loads
//! the full collection, changes it in memory, and writes the full list
//! back; there is no locking and no versioning, so the last writer wins.
//! Saves go through a temp file and an atomic rename - a failed write
//! leaves the previous file untouched.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use orgledger_core::auth::{UserRole, hash_password};
use orgledger_core::model::User;

use crate::error::StoreError;

/// Collection file names.
pub mod collections {
    /// User accounts.
    pub const USERS: &str = "users.json";
    /// Organizations.
    pub const ORGANIZATIONS: &str = "organizations.json";
    /// School years.
    pub const SCHOOL_YEARS: &str = "schoolyears.json";
    /// Events.
    pub const EVENTS: &str = "events.json";
    /// Transactions.
    pub const TRANSACTIONS: &str = "transactions.json";
    /// Session records.
    pub const SESSIONS: &str = "sessions.json";
}

/// Username of the bootstrap administrator created by [`JsonStore::init`].
pub const BOOTSTRAP_ADMIN_USERNAME: &str = "admin";
/// Temporary password of the bootstrap administrator; must be changed on
/// first login.
pub const BOOTSTRAP_ADMIN_PASSWORD: &str = "admin123";

/// Handle to the data directory holding the collection files.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(collection)
    }

    /// Creates the data directory and seeds missing collection files.
    ///
    /// `users.json` is seeded with the bootstrap admin account; the other
    /// collections start as empty arrays. Existing files are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created, hashing fails,
    /// or a seed write fails.
    pub async fn init(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        if !self.path(collections::USERS).exists() {
            let admin = User::new(
                "System Administrator",
                BOOTSTRAP_ADMIN_USERNAME,
                hash_password(BOOTSTRAP_ADMIN_PASSWORD)?,
                UserRole::Admin,
                None,
            );
            info!(username = BOOTSTRAP_ADMIN_USERNAME, "seeding bootstrap admin");
            self.save(collections::USERS, &[admin]).await?;
        }

        for collection in [
            collections::ORGANIZATIONS,
            collections::SCHOOL_YEARS,
            collections::EVENTS,
            collections::TRANSACTIONS,
        ] {
            if !self.path(collection).exists() {
                self.save::<serde_json::Value>(collection, &[]).await?;
            }
        }

        Ok(())
    }

    /// Loads a whole collection.
    ///
    /// An absent file is an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds malformed
    /// JSON.
    pub async fn load<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        let path = self.path(collection);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Saves a whole collection, replacing the previous file atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails; the previous
    /// file is untouched on failure.
    pub async fn save<T: Serialize>(&self, collection: &str, items: &[T]) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let json = serde_json::to_vec_pretty(items)?;
        let path = self.path(collection);
        let tmp = self.data_dir.join(format!(".{}.{}", collection, Uuid::new_v4()));

        tokio::fs::write(&tmp, &json).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!(collection, items = items.len(), "collection saved");
        Ok(())
    }
}
