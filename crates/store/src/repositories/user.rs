//! User repository.

use tracing::info;

use orgledger_core::auth::{UserRole, hash_password};
use orgledger_core::model::{Organization, User};
use orgledger_shared::types::{OrganizationId, UserId};

use crate::error::StoreError;
use crate::json_store::{JsonStore, collections};

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: JsonStore,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns all users.
    pub async fn all(&self) -> Result<Vec<User>, StoreError> {
        self.store.load(collections::USERS).await
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.all().await?.into_iter().find(|u| u.id == id))
    }

    /// Finds a user by username, case-insensitively.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .find(|u| u.has_username(username)))
    }

    /// Returns all users with the given role.
    pub async fn by_role(&self, role: UserRole) -> Result<Vec<User>, StoreError> {
        let mut users = self.all().await?;
        users.retain(|u| u.role == role);
        Ok(users)
    }

    /// Returns all users belonging to an organization.
    pub async fn by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<User>, StoreError> {
        let mut users = self.all().await?;
        users.retain(|u| u.organization_id == Some(organization_id));
        Ok(users)
    }

    /// Creates an adviser account for an organization.
    ///
    /// The temporary password is hashed and flagged for change on first
    /// login.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` when the username is taken (case-insensitive)
    /// and `NotFound` when the organization does not exist.
    pub async fn create_adviser(
        &self,
        name: &str,
        username: &str,
        temp_password: &str,
        organization_id: OrganizationId,
    ) -> Result<User, StoreError> {
        self.create_member(name, username, temp_password, UserRole::Adviser, organization_id, None)
            .await
    }

    /// Creates an officer account for an organization with a position.
    ///
    /// # Errors
    ///
    /// Same rules as [`UserRepository::create_adviser`].
    pub async fn create_officer(
        &self,
        name: &str,
        username: &str,
        temp_password: &str,
        organization_id: OrganizationId,
        position: &str,
    ) -> Result<User, StoreError> {
        self.create_member(
            name,
            username,
            temp_password,
            UserRole::Officer,
            organization_id,
            Some(position.to_string()),
        )
        .await
    }

    async fn create_member(
        &self,
        name: &str,
        username: &str,
        temp_password: &str,
        role: UserRole,
        organization_id: OrganizationId,
        position: Option<String>,
    ) -> Result<User, StoreError> {
        let organizations: Vec<Organization> =
            self.store.load(collections::ORGANIZATIONS).await?;
        if !organizations.iter().any(|o| o.id == organization_id) {
            return Err(StoreError::not_found("organization", organization_id));
        }

        let mut users = self.all().await?;
        if users.iter().any(|u| u.has_username(username)) {
            return Err(StoreError::Conflict(format!(
                "username '{username}' already exists"
            )));
        }

        let mut user = User::new(
            name,
            username,
            hash_password(temp_password)?,
            role,
            Some(organization_id),
        );
        user.position = position;

        users.push(user.clone());
        self.store.save(collections::USERS, &users).await?;

        info!(%user.id, role = %role, "user created");
        Ok(user)
    }

    /// Activates or deactivates an account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the user does not exist.
    pub async fn set_active(&self, id: UserId, is_active: bool) -> Result<User, StoreError> {
        let mut users = self.all().await?;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("user", id))?;

        user.is_active = is_active;
        let updated = user.clone();
        self.store.save(collections::USERS, &users).await?;
        Ok(updated)
    }

    /// Replaces a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the user does not exist.
    pub async fn set_password(
        &self,
        id: UserId,
        password_hash: String,
        is_temporary: bool,
    ) -> Result<User, StoreError> {
        let mut users = self.all().await?;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("user", id))?;

        user.password_hash = password_hash;
        user.is_temporary_password = is_temporary;
        let updated = user.clone();
        self.store.save(collections::USERS, &users).await?;
        Ok(updated)
    }

    /// Deletes an account outright.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the user does not exist.
    pub async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut users = self.all().await?;
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(StoreError::not_found("user", id));
        }

        self.store.save(collections::USERS, &users).await?;
        info!(%id, "user deleted");
        Ok(())
    }
}
