//! Receipt blob storage.
//!
//! Receipts are opaque binary files addressed by a generated key:
//! `<organizationId>/<random-id>_<sanitized-filename>`. Backed by an
//! OpenDAL filesystem operator rooted at the receipts directory.

use std::path::Path;

use opendal::{ErrorKind, Operator, services};
use uuid::Uuid;

use orgledger_shared::types::OrganizationId;

use crate::error::StoreError;

/// Storage for receipt blobs.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    operator: Operator,
}

impl ReceiptStore {
    /// Creates a receipt store rooted at the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the filesystem operator cannot be built.
    pub fn new(root: &Path) -> Result<Self, StoreError> {
        let builder = services::Fs::default().root(&root.to_string_lossy());
        let operator = Operator::new(builder)?.finish();
        Ok(Self { operator })
    }

    /// Saves a receipt and returns its storage key.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn save(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        organization_id: OrganizationId,
    ) -> Result<String, StoreError> {
        let key = format!(
            "{}/{}_{}",
            organization_id,
            Uuid::new_v4(),
            sanitize_filename(filename)
        );
        self.operator.write(&key, bytes).await?;
        Ok(key)
    }

    /// Loads a receipt by key.
    ///
    /// A missing receipt is None, not an error - callers show a
    /// placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error only for backend failures other than not-found.
    pub async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match self.operator.read(key).await {
            Ok(buffer) => Ok(Some(buffer.to_vec())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns true if a receipt exists under the key.
    pub async fn exists(&self, key: &str) -> bool {
        self.operator.stat(key).await.is_ok()
    }

    /// Deletes a receipt by key. Deleting a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.operator.delete(key).await?;
        Ok(())
    }

    /// Deletes every stored receipt (system reset).
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep fails.
    pub async fn delete_all(&self) -> Result<(), StoreError> {
        self.operator.remove_all("/").await?;
        Ok(())
    }
}

/// Sanitizes a filename for use in a storage key.
///
/// Only ASCII alphanumerics, dots, hyphens, and underscores survive;
/// everything else becomes an underscore.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("receipt.jpg"), "receipt.jpg");
        assert_eq!(sanitize_filename("or cash 01 (2).png"), "or_cash_01__2_.png");
        assert_eq!(sanitize_filename("resibo@#!.pdf"), "resibo___.pdf");
    }
}
