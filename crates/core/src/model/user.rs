//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orgledger_shared::types::{OrganizationId, UserId};

use crate::auth::{RoleProfile, UserRole};

/// An account that can sign in: Admin, Adviser, or Officer.
///
/// Advisers and Officers belong to exactly one organization; Admins have no
/// organization. Passwords are stored as argon2id PHC hashes, never
/// plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login name, unique case-insensitively across all users.
    pub username: String,
    /// Argon2id PHC hash of the password.
    pub password_hash: String,
    /// Role determining the capability set.
    pub role: UserRole,
    /// Deactivated accounts cannot sign in.
    pub is_active: bool,
    /// Set for freshly issued passwords; forces a change on first login.
    pub is_temporary_password: bool,
    /// Owning organization; None for Admins.
    pub organization_id: Option<OrganizationId>,
    /// Officer position (e.g. "Treasurer"); None for other roles.
    pub position: Option<String>,
    /// When the account was created.
    pub created_date: DateTime<Utc>,
}

impl User {
    /// Creates a new account with a freshly stamped id and creation date.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
        organization_id: Option<OrganizationId>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            is_active: true,
            is_temporary_password: true,
            organization_id,
            position: None,
            created_date: Utc::now(),
        }
    }

    /// Resolves the role-specific profile data as a tagged union.
    ///
    /// Returns None when an Adviser or Officer record is missing its
    /// organization reference (corrupt data).
    #[must_use]
    pub fn profile(&self) -> Option<RoleProfile> {
        match self.role {
            UserRole::Admin => Some(RoleProfile::Admin),
            UserRole::Adviser => self.organization_id.map(|organization_id| {
                RoleProfile::Adviser { organization_id }
            }),
            UserRole::Officer => self.organization_id.map(|organization_id| {
                RoleProfile::Officer {
                    organization_id,
                    position: self.position.clone().unwrap_or_default(),
                }
            }),
        }
    }

    /// Case-insensitive username comparison.
    #[must_use]
    pub fn has_username(&self, username: &str) -> bool {
        self.username.eq_ignore_ascii_case(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("Jane", "jane", "$argon2id$hash", UserRole::Adviser, Some(OrganizationId::new()));
        assert!(user.is_active);
        assert!(user.is_temporary_password);
        assert!(user.position.is_none());
    }

    #[test]
    fn test_has_username_ignores_case() {
        let user = User::new("Jane", "Jane.Doe", "h", UserRole::Admin, None);
        assert!(user.has_username("jane.doe"));
        assert!(user.has_username("JANE.DOE"));
        assert!(!user.has_username("jane"));
    }

    #[test]
    fn test_profile_admin() {
        let user = User::new("Root", "admin", "h", UserRole::Admin, None);
        assert_eq!(user.profile(), Some(RoleProfile::Admin));
    }

    #[test]
    fn test_profile_officer_carries_position() {
        let org = OrganizationId::new();
        let mut user = User::new("Sam", "sam", "h", UserRole::Officer, Some(org));
        user.position = Some("Treasurer".to_string());

        assert_eq!(
            user.profile(),
            Some(RoleProfile::Officer {
                organization_id: org,
                position: "Treasurer".to_string()
            })
        );
    }

    #[test]
    fn test_profile_adviser_without_org_is_invalid() {
        let user = User::new("Orphan", "orphan", "h", UserRole::Adviser, None);
        assert_eq!(user.profile(), None);
    }

    #[test]
    fn test_json_shape() {
        let user = User::new("Root", "admin", "h", UserRole::Admin, None);
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["role"], "admin");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["isTemporaryPassword"], true);
        assert!(value["organizationId"].is_null());
        assert!(value.get("passwordHash").is_some());
    }
}
