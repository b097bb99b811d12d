//! Administrative full system reset.

use tracing::{info, warn};

use orgledger_core::auth::UserRole;
use orgledger_core::model::{Event, Organization, SchoolYear, Transaction, User};
use orgledger_shared::types::UserId;

use crate::error::StoreError;
use crate::json_store::{JsonStore, collections};
use crate::receipts::ReceiptStore;
use crate::session::SessionStore;

/// Counts of what a reset removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetSummary {
    /// User accounts removed (everyone but the acting admin).
    pub users_removed: usize,
    /// Organizations removed.
    pub organizations_removed: usize,
    /// School years removed.
    pub school_years_removed: usize,
    /// Events removed.
    pub events_removed: usize,
    /// Transactions removed.
    pub transactions_removed: usize,
}

/// Wipes every collection, all receipts, and all sessions, keeping only
/// the acting admin account.
#[derive(Debug, Clone)]
pub struct SystemReset {
    store: JsonStore,
    receipts: ReceiptStore,
    sessions: SessionStore,
}

impl SystemReset {
    /// Creates a new system reset service.
    #[must_use]
    pub const fn new(store: JsonStore, receipts: ReceiptStore, sessions: SessionStore) -> Self {
        Self {
            store,
            receipts,
            sessions,
        }
    }

    /// Performs the reset.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the acting user does not exist and
    /// `Forbidden` when they are not an admin.
    pub async fn perform(&self, admin_id: UserId) -> Result<ResetSummary, StoreError> {
        let users: Vec<User> = self.store.load(collections::USERS).await?;
        let admin = users
            .iter()
            .find(|u| u.id == admin_id)
            .ok_or_else(|| StoreError::not_found("user", admin_id))?;

        if admin.role != UserRole::Admin {
            return Err(StoreError::Forbidden(
                "only an admin can reset the system".to_string(),
            ));
        }
        let admin = admin.clone();

        let organizations: Vec<Organization> =
            self.store.load(collections::ORGANIZATIONS).await?;
        let school_years: Vec<SchoolYear> = self.store.load(collections::SCHOOL_YEARS).await?;
        let events: Vec<Event> = self.store.load(collections::EVENTS).await?;
        let transactions: Vec<Transaction> = self.store.load(collections::TRANSACTIONS).await?;

        let summary = ResetSummary {
            users_removed: users.len() - 1,
            organizations_removed: organizations.len(),
            school_years_removed: school_years.len(),
            events_removed: events.len(),
            transactions_removed: transactions.len(),
        };

        self.store.save(collections::USERS, &[admin]).await?;
        self.store
            .save::<Organization>(collections::ORGANIZATIONS, &[])
            .await?;
        self.store
            .save::<SchoolYear>(collections::SCHOOL_YEARS, &[])
            .await?;
        self.store.save::<Event>(collections::EVENTS, &[]).await?;
        self.store
            .save::<Transaction>(collections::TRANSACTIONS, &[])
            .await?;

        if let Err(e) = self.receipts.delete_all().await {
            warn!(error = %e, "failed to clear receipts during reset");
        }
        self.sessions.revoke_all().await;

        info!(
            users = summary.users_removed,
            organizations = summary.organizations_removed,
            transactions = summary.transactions_removed,
            "system reset performed"
        );
        Ok(summary)
    }
}
