//! Statement rendering and report files.
//!
//! Thin layer over the pure renderers in `orgledger_core::reports`: loads
//! the snapshots a statement needs and writes the output under the reports
//! directory.

use std::path::{Path, PathBuf};

use tracing::info;

use orgledger_core::model::{Event, Organization, SchoolYear, Transaction};
use orgledger_core::reports::{event_statement, general_statement, ledger_report};
use orgledger_shared::types::{EventId, OrganizationId, SchoolYearId};

use crate::error::StoreError;
use crate::json_store::{JsonStore, collections};

/// Renders statements and writes them to disk.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    store: JsonStore,
    reports_dir: PathBuf,
}

impl ReportWriter {
    /// Creates a report writer that saves under the given directory.
    #[must_use]
    pub fn new(store: JsonStore, reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            reports_dir: reports_dir.into(),
        }
    }

    async fn organization(&self, id: OrganizationId) -> Result<Organization, StoreError> {
        let organizations: Vec<Organization> =
            self.store.load(collections::ORGANIZATIONS).await?;
        organizations
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("organization", id))
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        self.store.load(collections::TRANSACTIONS).await
    }

    /// Renders the general statement for an organization.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the organization does not exist.
    pub async fn general_statement(&self, id: OrganizationId) -> Result<String, StoreError> {
        let organization = self.organization(id).await?;
        let transactions = self.transactions().await?;
        Ok(general_statement(&organization, &transactions))
    }

    /// Renders the statement for a single event.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the event or its organization does not
    /// exist.
    pub async fn event_statement(&self, id: EventId) -> Result<String, StoreError> {
        let events: Vec<Event> = self.store.load(collections::EVENTS).await?;
        let event = events
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("event", id))?;

        let organization = self.organization(event.organization_id).await?;
        let transactions = self.transactions().await?;
        Ok(event_statement(&organization, &event, &transactions))
    }

    /// Renders the ledger report for an organization.
    ///
    /// With no explicit school year, the organization's currently active
    /// one scopes the report; with none active, the report covers all of
    /// the organization's approved transactions.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the organization or the named school year
    /// does not exist.
    pub async fn ledger_report(
        &self,
        organization_id: OrganizationId,
        school_year_id: Option<SchoolYearId>,
    ) -> Result<String, StoreError> {
        let organization = self.organization(organization_id).await?;
        let school_years: Vec<SchoolYear> = self.store.load(collections::SCHOOL_YEARS).await?;

        let school_year = match school_year_id {
            Some(id) => Some(
                school_years
                    .into_iter()
                    .find(|sy| sy.id == id)
                    .ok_or_else(|| StoreError::not_found("school year", id))?,
            ),
            None => school_years
                .into_iter()
                .find(|sy| sy.organization_id == organization_id && sy.is_active),
        };

        let transactions = self.transactions().await?;
        Ok(ledger_report(
            &organization,
            school_year.as_ref(),
            &transactions,
        ))
    }

    /// Writes report content to a file under the reports directory and
    /// returns the full path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the write
    /// fails.
    pub async fn save(&self, content: &str, filename: &str) -> Result<PathBuf, StoreError> {
        tokio::fs::create_dir_all(&self.reports_dir).await?;

        let path = self.reports_dir.join(filename);
        tokio::fs::write(&path, content).await?;

        info!(path = %path.display(), "report saved");
        Ok(path)
    }

    /// Returns the reports directory.
    #[must_use]
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }
}
