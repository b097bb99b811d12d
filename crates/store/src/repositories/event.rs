//! Event repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

use orgledger_core::ledger::balance::{TransactionFilter, balance};
use orgledger_core::model::{Event, Transaction};
use orgledger_shared::types::{EventId, OrganizationId, SchoolYearId, UserId};

use crate::error::StoreError;
use crate::json_store::{JsonStore, collections};

/// Repository for events.
///
/// Events are immutable after creation; there are no update or delete
/// operations.
#[derive(Debug, Clone)]
pub struct EventRepository {
    store: JsonStore,
}

impl EventRepository {
    /// Creates a new event repository.
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns all events.
    pub async fn all(&self) -> Result<Vec<Event>, StoreError> {
        self.store.load(collections::EVENTS).await
    }

    /// Returns all events of an organization.
    pub async fn by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Event>, StoreError> {
        let mut events = self.all().await?;
        events.retain(|e| e.organization_id == organization_id);
        Ok(events)
    }

    /// Returns all events in a school year.
    pub async fn by_school_year(
        &self,
        school_year_id: SchoolYearId,
    ) -> Result<Vec<Event>, StoreError> {
        let mut events = self.all().await?;
        events.retain(|e| e.school_year_id == school_year_id);
        Ok(events)
    }

    /// Finds an event by id.
    pub async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        Ok(self.all().await?.into_iter().find(|e| e.id == id))
    }

    /// Creates a new event.
    pub async fn create(
        &self,
        organization_id: OrganizationId,
        school_year_id: SchoolYearId,
        name: &str,
        event_date: DateTime<Utc>,
        created_by: UserId,
    ) -> Result<Event, StoreError> {
        let mut events = self.all().await?;
        let event = Event::new(organization_id, school_year_id, name, event_date, created_by);
        events.push(event.clone());
        self.store.save(collections::EVENTS, &events).await?;

        info!(%event.id, name, "event created");
        Ok(event)
    }

    /// Returns the event balance: approved income minus approved expenses
    /// for the event.
    pub async fn balance(&self, id: EventId) -> Result<Decimal, StoreError> {
        let transactions: Vec<Transaction> = self.store.load(collections::TRANSACTIONS).await?;
        Ok(balance(&transactions, &TransactionFilter::event(id)))
    }
}
