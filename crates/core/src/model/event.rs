//! Event entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orgledger_shared::types::{EventId, OrganizationId, SchoolYearId, UserId};

/// A named, dated activity within a school year that can carry its own
/// income and expenses.
///
/// Events are immutable once created; there are no update or delete
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// School year the event falls in.
    pub school_year_id: SchoolYearId,
    /// Event name.
    pub name: String,
    /// When the event takes place.
    pub event_date: DateTime<Utc>,
    /// When the event was created.
    pub created_date: DateTime<Utc>,
    /// Officer who created the event.
    pub created_by: UserId,
}

impl Event {
    /// Creates a new event.
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        school_year_id: SchoolYearId,
        name: impl Into<String>,
        event_date: DateTime<Utc>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: EventId::new(),
            organization_id,
            school_year_id,
            name: name.into(),
            event_date,
            created_date: Utc::now(),
            created_by,
        }
    }
}
