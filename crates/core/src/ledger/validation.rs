//! Input validation for new transactions.

use rust_decimal::Decimal;
use thiserror::Error;

use orgledger_shared::types::{EventId, OrganizationId, SchoolYearId, UserId};

use crate::model::{ApprovalStatus, Transaction, TransactionCategory, TransactionKind};

/// Validation errors for recording a transaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionValidationError {
    /// Event-category transactions must name the event.
    #[error("Event-category transactions require an event")]
    EventRequired,

    /// Amounts are non-negative.
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(Decimal),

    /// Detail text is required.
    #[error("Detail must not be blank")]
    BlankDetail,
}

/// Input for recording a new income or expense.
///
/// Validated and turned into a Pending `Transaction` via
/// [`NewTransaction::into_transaction`].
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// School year the transaction falls in.
    pub school_year_id: SchoolYearId,
    /// Event the transaction belongs to; required for Event category.
    pub event_id: Option<EventId>,
    /// Income or expense.
    pub kind: TransactionKind,
    /// General funds or event-scoped.
    pub category: TransactionCategory,
    /// Free-text description.
    pub detail: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Storage key of an already-saved receipt, if any.
    pub receipt_path: Option<String>,
    /// Officer recording the transaction.
    pub created_by: UserId,
}

impl NewTransaction {
    /// Validates the input without constructing a transaction.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: missing event for Event category,
    /// negative amount, or blank detail.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.category == TransactionCategory::Event && self.event_id.is_none() {
            return Err(TransactionValidationError::EventRequired);
        }

        if self.amount < Decimal::ZERO {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.detail.trim().is_empty() {
            return Err(TransactionValidationError::BlankDetail);
        }

        Ok(())
    }

    /// Validates and constructs a Pending transaction with a fresh id and
    /// creation stamp.
    ///
    /// # Errors
    ///
    /// Returns a `TransactionValidationError` if validation fails.
    pub fn into_transaction(self) -> Result<Transaction, TransactionValidationError> {
        self.validate()?;

        Ok(Transaction {
            id: orgledger_shared::types::TransactionId::new(),
            organization_id: self.organization_id,
            school_year_id: self.school_year_id,
            event_id: self.event_id,
            kind: self.kind,
            category: self.category,
            detail: self.detail,
            amount: self.amount,
            receipt_path: self.receipt_path,
            approval_status: ApprovalStatus::Pending,
            created_date: chrono::Utc::now(),
            created_by: self.created_by,
            approved_by: None,
            approval_date: None,
        })
    }
}
