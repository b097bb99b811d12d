//! School year repository.

use tracing::info;

use orgledger_core::model::SchoolYear;
use orgledger_shared::types::{OrganizationId, SchoolYearId};

use crate::error::StoreError;
use crate::json_store::{JsonStore, collections};

/// Repository for school years.
#[derive(Debug, Clone)]
pub struct SchoolYearRepository {
    store: JsonStore,
}

impl SchoolYearRepository {
    /// Creates a new school year repository.
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns all school years.
    pub async fn all(&self) -> Result<Vec<SchoolYear>, StoreError> {
        self.store.load(collections::SCHOOL_YEARS).await
    }

    /// Returns all school years of an organization.
    pub async fn by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<SchoolYear>, StoreError> {
        let mut school_years = self.all().await?;
        school_years.retain(|sy| sy.organization_id == organization_id);
        Ok(school_years)
    }

    /// Returns the organization's currently active school year, if any.
    pub async fn active_for(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Option<SchoolYear>, StoreError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .find(|sy| sy.organization_id == organization_id && sy.is_active))
    }

    /// Finds a school year by id.
    pub async fn find_by_id(&self, id: SchoolYearId) -> Result<Option<SchoolYear>, StoreError> {
        Ok(self.all().await?.into_iter().find(|sy| sy.id == id))
    }

    /// Starts a new school year for an organization.
    ///
    /// Any currently active school year for that organization is ended
    /// first (active flag cleared, end date stamped), so the new year is
    /// the sole active one. Both changes land in a single save.
    pub async fn start(
        &self,
        organization_id: OrganizationId,
        semester: &str,
        year: &str,
    ) -> Result<SchoolYear, StoreError> {
        let mut school_years = self.all().await?;

        if let Some(current) = school_years
            .iter_mut()
            .find(|sy| sy.organization_id == organization_id && sy.is_active)
        {
            info!(%current.id, "ending active school year before starting a new one");
            current.end();
        }

        let school_year = SchoolYear::start(organization_id, semester, year);
        school_years.push(school_year.clone());
        self.store
            .save(collections::SCHOOL_YEARS, &school_years)
            .await?;

        info!(%school_year.id, semester, year, "school year started");
        Ok(school_year)
    }

    /// Ends a school year.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the school year does not exist.
    pub async fn end(&self, id: SchoolYearId) -> Result<SchoolYear, StoreError> {
        let mut school_years = self.all().await?;
        let school_year = school_years
            .iter_mut()
            .find(|sy| sy.id == id)
            .ok_or_else(|| StoreError::not_found("school year", id))?;

        school_year.end();
        let updated = school_year.clone();
        self.store
            .save(collections::SCHOOL_YEARS, &school_years)
            .await?;

        info!(%id, "school year ended");
        Ok(updated)
    }
}
