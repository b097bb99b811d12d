//! Transaction repository.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use orgledger_core::ledger::NewTransaction;
use orgledger_core::model::{
    ApprovalStatus, Transaction, TransactionCategory, TransactionKind,
};
use orgledger_core::workflow::ApprovalFlow;
use orgledger_shared::types::{
    EventId, OrganizationId, SchoolYearId, TransactionId, UserId,
};

use crate::error::StoreError;
use crate::json_store::{JsonStore, collections};
use crate::receipts::ReceiptStore;

/// A receipt attached while recording a transaction.
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    /// The receipt file contents.
    pub bytes: Vec<u8>,
    /// The original filename.
    pub filename: String,
}

/// Input for recording a new income or expense.
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    /// Income or expense.
    pub kind: TransactionKind,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// School year the transaction falls in.
    pub school_year_id: SchoolYearId,
    /// Event the transaction belongs to; required for Event category.
    pub event_id: Option<EventId>,
    /// General funds or event-scoped.
    pub category: TransactionCategory,
    /// Free-text description.
    pub detail: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Optional receipt to store alongside the transaction.
    pub receipt: Option<ReceiptUpload>,
    /// Officer recording the transaction.
    pub created_by: UserId,
}

/// Repository for transactions and their approval lifecycle.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    store: JsonStore,
    receipts: ReceiptStore,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(store: JsonStore, receipts: ReceiptStore) -> Self {
        Self { store, receipts }
    }

    /// Returns all transactions.
    pub async fn all(&self) -> Result<Vec<Transaction>, StoreError> {
        self.store.load(collections::TRANSACTIONS).await
    }

    /// Finds a transaction by id.
    pub async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(self.all().await?.into_iter().find(|t| t.id == id))
    }

    /// Returns all transactions of an organization.
    pub async fn by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Transaction>, StoreError> {
        let mut transactions = self.all().await?;
        transactions.retain(|t| t.organization_id == organization_id);
        Ok(transactions)
    }

    /// Returns all transactions of an event.
    pub async fn by_event(&self, event_id: EventId) -> Result<Vec<Transaction>, StoreError> {
        let mut transactions = self.all().await?;
        transactions.retain(|t| t.event_id == Some(event_id));
        Ok(transactions)
    }

    /// Returns all transactions of a school year.
    pub async fn by_school_year(
        &self,
        school_year_id: SchoolYearId,
    ) -> Result<Vec<Transaction>, StoreError> {
        let mut transactions = self.all().await?;
        transactions.retain(|t| t.school_year_id == school_year_id);
        Ok(transactions)
    }

    /// Returns the organization's pending income, oldest first in
    /// collection order.
    pub async fn pending_income(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.pending_of_kind(organization_id, TransactionKind::Income)
            .await
    }

    /// Returns the organization's pending expenses.
    pub async fn pending_expenses(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.pending_of_kind(organization_id, TransactionKind::Expense)
            .await
    }

    async fn pending_of_kind(
        &self,
        organization_id: OrganizationId,
        kind: TransactionKind,
    ) -> Result<Vec<Transaction>, StoreError> {
        let mut transactions = self.all().await?;
        transactions
            .retain(|t| t.organization_id == organization_id && t.kind == kind && t.is_pending());
        Ok(transactions)
    }

    /// Records a new transaction in Pending status.
    ///
    /// A receipt, when present, is saved first and its storage key stamped
    /// on the transaction.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the input violates a recording rule
    /// (event category without an event, negative amount, blank detail).
    pub async fn record(
        &self,
        input: RecordTransactionInput,
    ) -> Result<Transaction, StoreError> {
        let receipt_path = match input.receipt {
            Some(receipt) => Some(
                self.receipts
                    .save(receipt.bytes, &receipt.filename, input.organization_id)
                    .await?,
            ),
            None => None,
        };

        let transaction = NewTransaction {
            organization_id: input.organization_id,
            school_year_id: input.school_year_id,
            event_id: input.event_id,
            kind: input.kind,
            category: input.category,
            detail: input.detail,
            amount: input.amount,
            receipt_path,
            created_by: input.created_by,
        }
        .into_transaction()?;

        let mut transactions = self.all().await?;
        transactions.push(transaction.clone());
        self.store
            .save(collections::TRANSACTIONS, &transactions)
            .await?;

        info!(%transaction.id, kind = %transaction.kind, %transaction.amount, "transaction recorded");
        Ok(transaction)
    }

    /// Decides a pending transaction: Approved or Rejected.
    ///
    /// Re-deciding an already-decided transaction requires
    /// `allow_redecision`; the decision is then re-stamped.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `Approval` for an invalid
    /// transition.
    pub async fn set_approval_status(
        &self,
        id: TransactionId,
        new_status: ApprovalStatus,
        decided_by: UserId,
        allow_redecision: bool,
    ) -> Result<Transaction, StoreError> {
        let mut transactions = self.all().await?;
        let transaction = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("transaction", id))?;

        let action = ApprovalFlow::decide(
            transaction.approval_status,
            new_status,
            decided_by,
            allow_redecision,
        )?;
        action.apply(transaction);

        let updated = transaction.clone();
        self.store
            .save(collections::TRANSACTIONS, &transactions)
            .await?;

        info!(%id, status = %updated.approval_status, "transaction decided");
        Ok(updated)
    }

    /// Rejects every pending transaction across all organizations.
    ///
    /// Each rejection is stamped with the acting admin and the current
    /// time, exactly like a manual rejection. Returns the number of
    /// transactions affected.
    pub async fn reset_all_pending(&self, decided_by: UserId) -> Result<usize, StoreError> {
        let mut transactions = self.all().await?;
        let now = Utc::now();

        let mut affected = 0;
        for transaction in transactions.iter_mut().filter(|t| t.is_pending()) {
            transaction.approval_status = ApprovalStatus::Rejected;
            transaction.approved_by = Some(decided_by);
            transaction.approval_date = Some(now);
            affected += 1;
        }

        if affected > 0 {
            self.store
                .save(collections::TRANSACTIONS, &transactions)
                .await?;
        }

        info!(affected, "pending transactions reset");
        Ok(affected)
    }

    /// Loads the receipt attached to a transaction, if any.
    ///
    /// Returns None when the transaction has no receipt or the blob is
    /// gone; callers show a placeholder.
    pub async fn load_receipt(&self, transaction: &Transaction) -> Result<Option<Vec<u8>>, StoreError> {
        match &transaction.receipt_path {
            Some(key) => self.receipts.load(key).await,
            None => Ok(None),
        }
    }
}
