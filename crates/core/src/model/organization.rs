//! Organization entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orgledger_shared::types::OrganizationId;

/// A student group whose finances are tracked.
///
/// Organizations are soft-deactivated, never hard-deleted;
/// `deactivation_date` is set iff `is_active` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique identifier.
    pub id: OrganizationId,
    /// Organization name.
    pub name: String,
    /// Department the organization belongs to.
    pub department: String,
    /// Deactivated organizations are hidden from day-to-day flows.
    pub is_active: bool,
    /// When the organization was deactivated; None while active.
    pub deactivation_date: Option<DateTime<Utc>>,
    /// When the organization was created.
    pub created_date: DateTime<Utc>,
}

impl Organization {
    /// Creates a new active organization.
    #[must_use]
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: OrganizationId::new(),
            name: name.into(),
            department: department.into(),
            is_active: true,
            deactivation_date: None,
            created_date: Utc::now(),
        }
    }

    /// Activates or deactivates the organization, keeping
    /// `deactivation_date` consistent with `is_active`.
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
        self.deactivation_date = if is_active { None } else { Some(Utc::now()) };
    }
}
