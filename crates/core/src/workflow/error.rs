//! Workflow error types for the transaction approval lifecycle.

use thiserror::Error;

use crate::model::ApprovalStatus;

/// Errors that can occur during approval operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApprovalError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ApprovalStatus,
        /// The attempted target status.
        to: ApprovalStatus,
    },

    /// Attempted to re-decide an already-decided transaction without
    /// opting in.
    #[error("Transaction is already {status}; pass allow_redecision to override")]
    AlreadyDecided {
        /// The existing decision.
        status: ApprovalStatus,
    },

    /// A decision must land on Approved or Rejected, never back to Pending.
    #[error("A decision cannot return a transaction to pending")]
    CannotReturnToPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_decided_display() {
        let err = ApprovalError::AlreadyDecided {
            status: ApprovalStatus::Approved,
        };
        assert!(err.to_string().contains("already approved"));
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = ApprovalError::InvalidTransition {
            from: ApprovalStatus::Rejected,
            to: ApprovalStatus::Approved,
        };
        assert!(err.to_string().contains("rejected"));
        assert!(err.to_string().contains("approved"));
    }
}
