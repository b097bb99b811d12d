//! Organization repository.

use rust_decimal::Decimal;
use tracing::info;

use orgledger_core::ledger::balance::{TransactionFilter, balance};
use orgledger_core::model::{Organization, Transaction, TransactionCategory, TransactionKind};
use orgledger_shared::types::OrganizationId;

use crate::error::StoreError;
use crate::json_store::{JsonStore, collections};

/// Approved transactions of one organization, grouped the way the
/// organization profile presents them.
#[derive(Debug, Clone, Default)]
pub struct GroupedTransactions {
    /// Approved general-fund income.
    pub general_income: Vec<Transaction>,
    /// Approved event income.
    pub event_income: Vec<Transaction>,
    /// Approved general-fund expenses.
    pub general_expenses: Vec<Transaction>,
    /// Approved event expenses.
    pub event_expenses: Vec<Transaction>,
}

/// Repository for organizations.
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    store: JsonStore,
}

impl OrganizationRepository {
    /// Creates a new organization repository.
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns all organizations.
    pub async fn all(&self) -> Result<Vec<Organization>, StoreError> {
        self.store.load(collections::ORGANIZATIONS).await
    }

    /// Returns active organizations only.
    pub async fn active(&self) -> Result<Vec<Organization>, StoreError> {
        let mut organizations = self.all().await?;
        organizations.retain(|o| o.is_active);
        Ok(organizations)
    }

    /// Finds an organization by id.
    pub async fn find_by_id(
        &self,
        id: OrganizationId,
    ) -> Result<Option<Organization>, StoreError> {
        Ok(self.all().await?.into_iter().find(|o| o.id == id))
    }

    /// Creates a new active organization.
    pub async fn create(&self, name: &str, department: &str) -> Result<Organization, StoreError> {
        let mut organizations = self.all().await?;
        let organization = Organization::new(name, department);
        organizations.push(organization.clone());
        self.store
            .save(collections::ORGANIZATIONS, &organizations)
            .await?;

        info!(%organization.id, name, "organization created");
        Ok(organization)
    }

    /// Activates or deactivates an organization, keeping the deactivation
    /// date consistent.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the organization does not exist.
    pub async fn set_active(
        &self,
        id: OrganizationId,
        is_active: bool,
    ) -> Result<Organization, StoreError> {
        let mut organizations = self.all().await?;
        let organization = organizations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("organization", id))?;

        organization.set_active(is_active);
        let updated = organization.clone();
        self.store
            .save(collections::ORGANIZATIONS, &organizations)
            .await?;

        info!(%id, is_active, "organization status changed");
        Ok(updated)
    }

    /// Returns the organization balance: approved income minus approved
    /// expenses.
    pub async fn balance(&self, id: OrganizationId) -> Result<Decimal, StoreError> {
        let transactions: Vec<Transaction> = self.store.load(collections::TRANSACTIONS).await?;
        Ok(balance(&transactions, &TransactionFilter::organization(id)))
    }

    /// Returns the organization's approved transactions grouped by kind
    /// and category.
    pub async fn approved_transactions(
        &self,
        id: OrganizationId,
    ) -> Result<GroupedTransactions, StoreError> {
        let transactions: Vec<Transaction> = self.store.load(collections::TRANSACTIONS).await?;

        let mut grouped = GroupedTransactions::default();
        for tx in transactions
            .into_iter()
            .filter(|tx| tx.organization_id == id && tx.is_approved())
        {
            match (tx.kind, tx.category) {
                (TransactionKind::Income, TransactionCategory::General) => {
                    grouped.general_income.push(tx);
                }
                (TransactionKind::Income, TransactionCategory::Event) => {
                    grouped.event_income.push(tx);
                }
                (TransactionKind::Expense, TransactionCategory::General) => {
                    grouped.general_expenses.push(tx);
                }
                (TransactionKind::Expense, TransactionCategory::Event) => {
                    grouped.event_expenses.push(tx);
                }
            }
        }

        Ok(grouped)
    }
}
