//! Balance and approval-queue computations.
//!
//! All functions are pure over a snapshot of the transaction collection.
//! Only Approved transactions count toward any financial total; Pending and
//! Rejected are excluded everywhere.

use rust_decimal::Decimal;

use orgledger_shared::types::{EventId, OrganizationId, SchoolYearId};

use crate::model::{Transaction, TransactionKind};

/// Scope filter for balance and queue queries.
///
/// All set fields must match (AND); unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Match transactions of this organization.
    pub organization_id: Option<OrganizationId>,
    /// Match transactions of this school year.
    pub school_year_id: Option<SchoolYearId>,
    /// Match transactions of this event.
    pub event_id: Option<EventId>,
}

impl TransactionFilter {
    /// Scope: one organization (the organization balance).
    #[must_use]
    pub fn organization(id: OrganizationId) -> Self {
        Self {
            organization_id: Some(id),
            ..Self::default()
        }
    }

    /// Scope: one event (the event balance).
    #[must_use]
    pub fn event(id: EventId) -> Self {
        Self {
            event_id: Some(id),
            ..Self::default()
        }
    }

    /// Scope: one organization within one school year (the ledger report
    /// balance).
    #[must_use]
    pub fn ledger(organization_id: OrganizationId, school_year_id: SchoolYearId) -> Self {
        Self {
            organization_id: Some(organization_id),
            school_year_id: Some(school_year_id),
            event_id: None,
        }
    }

    /// Returns true if the transaction falls inside this scope.
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.organization_id
            .is_none_or(|id| tx.organization_id == id)
            && self.school_year_id.is_none_or(|id| tx.school_year_id == id)
            && self.event_id.is_none_or(|id| tx.event_id == Some(id))
    }
}

/// Sum of approved amounts of one kind inside the scope.
fn approved_total(txs: &[Transaction], filter: &TransactionFilter, kind: TransactionKind) -> Decimal {
    txs.iter()
        .filter(|tx| tx.is_approved() && tx.kind == kind && filter.matches(tx))
        .map(|tx| tx.amount)
        .sum()
}

/// Total approved income inside the scope.
#[must_use]
pub fn income_total(txs: &[Transaction], filter: &TransactionFilter) -> Decimal {
    approved_total(txs, filter, TransactionKind::Income)
}

/// Total approved expenses inside the scope.
#[must_use]
pub fn expense_total(txs: &[Transaction], filter: &TransactionFilter) -> Decimal {
    approved_total(txs, filter, TransactionKind::Expense)
}

/// Balance: approved income minus approved expenses inside the scope.
#[must_use]
pub fn balance(txs: &[Transaction], filter: &TransactionFilter) -> Decimal {
    income_total(txs, filter) - expense_total(txs, filter)
}

/// Pending transactions inside the scope, in collection order.
///
/// Drives adviser approval queues.
#[must_use]
pub fn pending<'a>(txs: &'a [Transaction], filter: &TransactionFilter) -> Vec<&'a Transaction> {
    txs.iter()
        .filter(|tx| tx.is_pending() && filter.matches(tx))
        .collect()
}
