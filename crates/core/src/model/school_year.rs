//! School year entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orgledger_shared::types::{OrganizationId, SchoolYearId};

/// A bounded active period (semester + year) scoping transactions.
///
/// At most one school year is active per organization at any time; starting
/// a new one force-ends the currently active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolYear {
    /// Unique identifier.
    pub id: SchoolYearId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Semester label (e.g. "1st Semester").
    pub semester: String,
    /// Year label (e.g. "2025-2026").
    pub year: String,
    /// When the period started.
    pub start_date: DateTime<Utc>,
    /// When the period ended; None while active.
    pub end_date: Option<DateTime<Utc>>,
    /// Whether this is the organization's current period.
    pub is_active: bool,
}

impl SchoolYear {
    /// Starts a new active school year for an organization.
    #[must_use]
    pub fn start(
        organization_id: OrganizationId,
        semester: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: SchoolYearId::new(),
            organization_id,
            semester: semester.into(),
            year: year.into(),
            start_date: Utc::now(),
            end_date: None,
            is_active: true,
        }
    }

    /// Ends the period: clears the active flag and stamps the end date.
    pub fn end(&mut self) {
        self.is_active = false;
        self.end_date = Some(Utc::now());
    }
}
