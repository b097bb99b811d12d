//! Session token storage.
//!
//! Login issues an opaque random token to the caller; only its SHA-256
//! hash, the user id, and the expiry are persisted. Session persistence is
//! best-effort: storage failures are swallowed with a warning, since
//! session loss only forces a re-login.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use orgledger_shared::types::UserId;

use crate::json_store::{JsonStore, collections};

/// A persisted session record; the raw token never touches disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    token_hash: String,
    user_id: UserId,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Store for opaque session tokens.
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: JsonStore,
    ttl: Duration,
}

impl SessionStore {
    /// Creates a session store with the given token lifetime.
    #[must_use]
    pub fn new(store: JsonStore, ttl_days: i64) -> Self {
        Self {
            store,
            ttl: Duration::days(ttl_days),
        }
    }

    /// Hashes a token for storage.
    #[must_use]
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn generate_token() -> String {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        base64_url::encode(&bytes)
    }

    async fn load(&self) -> Vec<SessionRecord> {
        match self.store.load(collections::SESSIONS).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "failed to load sessions; treating as empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, records: &[SessionRecord]) {
        if let Err(e) = self.store.save(collections::SESSIONS, records).await {
            warn!(error = %e, "failed to save sessions");
        }
    }

    /// Issues a new token for a user.
    ///
    /// The token is returned even if persisting the record fails - the
    /// session then simply does not survive a restart.
    pub async fn issue(&self, user_id: UserId) -> String {
        let token = Self::generate_token();
        let now = Utc::now();

        let mut records = self.load().await;
        records.retain(|r| r.expires_at > now);
        records.push(SessionRecord {
            token_hash: Self::hash_token(&token),
            user_id,
            created_at: now,
            expires_at: now + self.ttl,
        });
        self.save(&records).await;

        token
    }

    /// Resolves a token to the user it was issued for.
    ///
    /// Unknown and expired tokens are None.
    pub async fn resolve(&self, token: &str) -> Option<UserId> {
        let hash = Self::hash_token(token);
        let now = Utc::now();

        self.load()
            .await
            .iter()
            .find(|r| r.token_hash == hash && r.expires_at > now)
            .map(|r| r.user_id)
    }

    /// Revokes a token. Revoking an unknown token is a no-op.
    pub async fn revoke(&self, token: &str) {
        let hash = Self::hash_token(token);
        let mut records = self.load().await;
        records.retain(|r| r.token_hash != hash);
        self.save(&records).await;
    }

    /// Revokes every session for a user.
    pub async fn revoke_user(&self, user_id: UserId) {
        let mut records = self.load().await;
        records.retain(|r| r.user_id != user_id);
        self.save(&records).await;
    }

    /// Revokes all sessions (system reset).
    pub async fn revoke_all(&self) {
        self.save(&[]).await;
    }
}
