//! Authentication and role capabilities.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - User role definitions and the role → capability mapping

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use serde::{Deserialize, Serialize};

use orgledger_shared::types::OrganizationId;

/// User roles, from broadest to narrowest scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Manages organizations and advisers; no organization of their own.
    Admin,
    /// Manages officers and school years for one organization; decides
    /// transactions.
    Adviser,
    /// Records transactions and creates events for one organization.
    Officer,
}

impl UserRole {
    /// Parses a role from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "adviser" => Some(Self::Adviser),
            "officer" => Some(Self::Officer),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Adviser => "adviser",
            Self::Officer => "officer",
        }
    }

    /// Returns the capability set this role exposes.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            Self::Admin => Capabilities {
                manage_organizations: true,
                manage_advisers: true,
                manage_officers: false,
                manage_school_years: false,
                decide_transactions: true,
                record_transactions: false,
                create_events: false,
                system_reset: true,
            },
            Self::Adviser => Capabilities {
                manage_organizations: false,
                manage_advisers: false,
                manage_officers: true,
                manage_school_years: true,
                decide_transactions: true,
                record_transactions: false,
                create_events: false,
                system_reset: false,
            },
            Self::Officer => Capabilities {
                manage_organizations: false,
                manage_advisers: false,
                manage_officers: false,
                manage_school_years: false,
                decide_transactions: false,
                record_transactions: true,
                create_events: true,
                system_reset: false,
            },
        }
    }

    /// Returns true if this role can approve or reject transactions.
    #[must_use]
    pub const fn can_decide_transactions(&self) -> bool {
        self.capabilities().decide_transactions
    }

    /// Returns true if this role can record income and expenses.
    #[must_use]
    pub const fn can_record_transactions(&self) -> bool {
        self.capabilities().record_transactions
    }

    /// Returns true if this role can create and deactivate user accounts
    /// with the given role.
    #[must_use]
    pub const fn can_manage(&self, target: Self) -> bool {
        match target {
            Self::Admin => false,
            Self::Adviser => self.capabilities().manage_advisers,
            Self::Officer => self.capabilities().manage_officers,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of operations a role may perform.
///
/// Derived purely from the role; dashboards pick what to expose from this
/// rather than switching on the role everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Create and (de)activate organizations.
    pub manage_organizations: bool,
    /// Create, deactivate, and delete adviser accounts.
    pub manage_advisers: bool,
    /// Create, deactivate, and delete officer accounts.
    pub manage_officers: bool,
    /// Start and end school years.
    pub manage_school_years: bool,
    /// Approve or reject pending transactions.
    pub decide_transactions: bool,
    /// Record income and expense transactions.
    pub record_transactions: bool,
    /// Create events.
    pub create_events: bool,
    /// Perform the full system reset.
    pub system_reset: bool,
}

/// Role-specific profile data as a tagged union.
///
/// Admins carry no organization; Advisers belong to one; Officers belong to
/// one and hold a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleProfile {
    /// System administrator.
    Admin,
    /// Adviser of one organization.
    Adviser {
        /// The organization the adviser oversees.
        organization_id: OrganizationId,
    },
    /// Officer of one organization.
    Officer {
        /// The organization the officer belongs to.
        organization_id: OrganizationId,
        /// The officer's position (e.g. "Treasurer").
        position: String,
    },
}

impl RoleProfile {
    /// Returns the role this profile belongs to.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        match self {
            Self::Admin => UserRole::Admin,
            Self::Adviser { .. } => UserRole::Adviser,
            Self::Officer { .. } => UserRole::Officer,
        }
    }

    /// Returns the organization scope, if the role has one.
    #[must_use]
    pub const fn organization_id(&self) -> Option<OrganizationId> {
        match self {
            Self::Admin => None,
            Self::Adviser { organization_id } | Self::Officer { organization_id, .. } => {
                Some(*organization_id)
            }
        }
    }
}
