//! Approval state transition logic.

use chrono::{DateTime, Utc};

use orgledger_shared::types::UserId;

use crate::model::{ApprovalStatus, Transaction};
use crate::workflow::error::ApprovalError;

/// A validated decision with its audit stamp.
///
/// `decided_by` and `decided_at` are always set together; applying the
/// action writes them to `approved_by` / `approval_date` as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalAction {
    /// The resulting status (Approved or Rejected).
    pub new_status: ApprovalStatus,
    /// The adviser or admin who decided.
    pub decided_by: UserId,
    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
}

impl ApprovalAction {
    /// Applies this decision to a transaction.
    pub fn apply(&self, transaction: &mut Transaction) {
        transaction.approval_status = self.new_status;
        transaction.approved_by = Some(self.decided_by);
        transaction.approval_date = Some(self.decided_at);
    }
}

/// Stateless service for validating approval transitions.
///
/// A pending transaction can be decided exactly once. Re-deciding an
/// Approved/Rejected transaction is refused with `AlreadyDecided` unless
/// the caller passes `allow_redecision: true`, in which case the decision
/// is re-stamped.
pub struct ApprovalFlow;

impl ApprovalFlow {
    /// Approves a transaction.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::AlreadyDecided` if the transaction was
    /// already decided and `allow_redecision` is false.
    pub fn approve(
        current_status: ApprovalStatus,
        decided_by: UserId,
        allow_redecision: bool,
    ) -> Result<ApprovalAction, ApprovalError> {
        Self::decide(
            current_status,
            ApprovalStatus::Approved,
            decided_by,
            allow_redecision,
        )
    }

    /// Rejects a transaction.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::AlreadyDecided` if the transaction was
    /// already decided and `allow_redecision` is false.
    pub fn reject(
        current_status: ApprovalStatus,
        decided_by: UserId,
        allow_redecision: bool,
    ) -> Result<ApprovalAction, ApprovalError> {
        Self::decide(
            current_status,
            ApprovalStatus::Rejected,
            decided_by,
            allow_redecision,
        )
    }

    /// Validates a decision and returns the action to apply.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::CannotReturnToPending` if the target is
    /// Pending, and `ApprovalError::AlreadyDecided` when re-deciding
    /// without the opt-in.
    pub fn decide(
        current_status: ApprovalStatus,
        new_status: ApprovalStatus,
        decided_by: UserId,
        allow_redecision: bool,
    ) -> Result<ApprovalAction, ApprovalError> {
        if new_status == ApprovalStatus::Pending {
            return Err(ApprovalError::CannotReturnToPending);
        }

        if current_status.is_decided() && !allow_redecision {
            return Err(ApprovalError::AlreadyDecided {
                status: current_status,
            });
        }

        Ok(ApprovalAction {
            new_status,
            decided_by,
            decided_at: Utc::now(),
        })
    }

    /// Returns true if the transition is reachable in the normal flow.
    #[must_use]
    pub fn is_valid_transition(from: ApprovalStatus, to: ApprovalStatus) -> bool {
        matches!(
            (from, to),
            (
                ApprovalStatus::Pending,
                ApprovalStatus::Approved | ApprovalStatus::Rejected
            )
        )
    }
}
