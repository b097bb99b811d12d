//! Store error types.

use thiserror::Error;

use orgledger_core::auth::PasswordError;
use orgledger_core::ledger::TransactionValidationError;
use orgledger_core::workflow::ApprovalError;
use orgledger_shared::AppError;

/// Errors that can occur in the storage layer and the operations built on
/// it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection file holds malformed JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Receipt storage backend failed.
    #[error("Receipt storage error: {0}")]
    Receipts(#[from] opendal::Error),

    /// A referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The entity kind (e.g. "transaction").
        entity: &'static str,
        /// The id that failed to resolve.
        id: String,
    },

    /// A uniqueness rule was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The acting user may not perform the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid transaction input.
    #[error(transparent)]
    Validation(#[from] TransactionValidationError),

    /// Invalid approval transition.
    #[error(transparent)]
    Approval(#[from] ApprovalError),

    /// Password hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl StoreError {
    /// Convenience constructor for `NotFound`.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(_) | StoreError::Serialization(_) | StoreError::Receipts(_) => {
                Self::Storage(err.to_string())
            }
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::Forbidden(msg) => Self::Forbidden(msg),
            StoreError::Validation(_) => Self::Validation(err.to_string()),
            StoreError::Approval(_) => Self::BusinessRule(err.to_string()),
            StoreError::Password(_) => Self::Internal(err.to_string()),
        }
    }
}
