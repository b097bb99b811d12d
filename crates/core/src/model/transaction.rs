//! Transaction entity and its classification enums.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use orgledger_shared::types::{EventId, OrganizationId, SchoolYearId, TransactionId, UserId};

/// Direction of a transaction: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received by the organization.
    Income,
    /// Money spent by the organization.
    Expense,
}

impl TransactionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a transaction: general funds or tied to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    /// Part of the organization's general funds.
    General,
    /// Belongs to a specific event; `event_id` must be set.
    Event,
}

impl TransactionCategory {
    /// Returns the string representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval status in the transaction lifecycle.
///
/// Transactions start Pending and are decided exactly once:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
///
/// Approved and Rejected are terminal; re-deciding requires an explicit
/// opt-in (see `workflow::ApprovalFlow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting an adviser or admin decision.
    Pending,
    /// Counts toward balances.
    Approved,
    /// Excluded from all balances.
    Rejected,
}

impl ApprovalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if a decision has been made.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense record requiring approval before it counts
/// toward any balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// School year the transaction falls in.
    pub school_year_id: SchoolYearId,
    /// Event this transaction belongs to; required when `category` is Event.
    pub event_id: Option<EventId>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// General funds or event-scoped.
    pub category: TransactionCategory,
    /// Free-text description of the transaction.
    pub detail: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Storage key of the attached receipt, if any.
    pub receipt_path: Option<String>,
    /// Lifecycle status; starts Pending.
    pub approval_status: ApprovalStatus,
    /// When the transaction was recorded.
    pub created_date: DateTime<Utc>,
    /// Officer who recorded the transaction.
    pub created_by: UserId,
    /// Who decided the transaction; set together with `approval_date`.
    pub approved_by: Option<UserId>,
    /// When the transaction was decided; set together with `approved_by`.
    pub approval_date: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Returns true if the transaction counts toward balances.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }

    /// Returns true if the transaction is awaiting a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }
}
