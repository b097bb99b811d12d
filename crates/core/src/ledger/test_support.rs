//! Transaction fixtures shared by unit and property tests.

use chrono::Utc;
use rust_decimal::Decimal;

use orgledger_shared::types::{OrganizationId, SchoolYearId, TransactionId, UserId};

use crate::model::{ApprovalStatus, Transaction, TransactionCategory, TransactionKind};

/// A pending general income for a fresh organization.
pub fn pending_income(amount: Decimal) -> Transaction {
    tx_for_org(OrganizationId::new(), TransactionKind::Income, amount)
}

/// A pending general transaction for the given organization.
pub fn tx_for_org(
    organization_id: OrganizationId,
    kind: TransactionKind,
    amount: Decimal,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        organization_id,
        school_year_id: SchoolYearId::new(),
        event_id: None,
        kind,
        category: TransactionCategory::General,
        detail: "test entry".to_string(),
        amount,
        receipt_path: None,
        approval_status: ApprovalStatus::Pending,
        created_date: Utc::now(),
        created_by: UserId::new(),
        approved_by: None,
        approval_date: None,
    }
}

/// Marks a transaction approved with a fresh audit stamp.
pub fn approved(mut tx: Transaction) -> Transaction {
    tx.approval_status = ApprovalStatus::Approved;
    tx.approved_by = Some(UserId::new());
    tx.approval_date = Some(Utc::now());
    tx
}
