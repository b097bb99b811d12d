//! Authentication service.
//!
//! Login verifies credentials against stored argon2id hashes and issues an
//! opaque session token. The two failure kinds are distinguishable so the
//! caller can tell a typo from a deactivated account.

use thiserror::Error;
use tracing::{info, warn};

use orgledger_core::auth::{PasswordError, UserRole, hash_password, verify_password};
use orgledger_core::model::User;
use orgledger_shared::types::UserId;

use crate::error::StoreError;
use crate::repositories::UserRepository;
use crate::session::SessionStore;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account exists and the password matched, but the account is
    /// deactivated.
    #[error("Account is deactivated; contact your {contact} to reactivate it")]
    AccountDeactivated {
        /// Who can reactivate the account, derived from the account role.
        contact: &'static str,
    },

    /// Password resets are restricted to adviser and officer accounts.
    #[error("Password reset is not available for {role} accounts")]
    ResetNotAllowed {
        /// The target account's role.
        role: UserRole,
    },

    /// Password hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A successful login: the user and their session token.
#[derive(Debug)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Opaque session token; the only copy - it is stored hashed.
    pub token: String,
}

/// Authentication and password management.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionStore,
}

impl AuthService {
    /// Creates a new auth service.
    #[must_use]
    pub const fn new(users: UserRepository, sessions: SessionStore) -> Self {
        Self { users, sessions }
    }

    /// Who can reactivate an account with the given role.
    const fn reactivation_contact(role: UserRole) -> &'static str {
        match role {
            UserRole::Officer => "adviser",
            UserRole::Adviser | UserRole::Admin => "administrator",
        }
    }

    /// Authenticates a user and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for an unknown username or wrong
    /// password, and `AccountDeactivated` when the password matched but
    /// the account is inactive.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        let matches = match verify_password(password, &user.password_hash) {
            Ok(matches) => matches,
            Err(PasswordError::MalformedHash) => {
                // Legacy or corrupt record; never let it authenticate.
                warn!(%user.id, "stored password hash is malformed");
                false
            }
            Err(e) => return Err(e.into()),
        };

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AuthError::AccountDeactivated {
                contact: Self::reactivation_contact(user.role),
            });
        }

        let token = self.sessions.issue(user.id).await;
        info!(%user.id, role = %user.role, "login");
        Ok(LoginOutcome { user, token })
    }

    /// Restores a session from a previously issued token.
    ///
    /// Returns None for unknown or expired tokens, and for users that are
    /// gone or deactivated - their sessions are revoked on the spot.
    pub async fn restore_session(&self, token: &str) -> Result<Option<User>, StoreError> {
        let Some(user_id) = self.sessions.resolve(token).await else {
            return Ok(None);
        };

        match self.users.find_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(Some(user)),
            _ => {
                self.sessions.revoke(token).await;
                Ok(None)
            }
        }
    }

    /// Revokes a session token.
    pub async fn logout(&self, token: &str) {
        self.sessions.revoke(token).await;
    }

    /// Changes a user's own password and clears the temporary flag.
    ///
    /// # Errors
    ///
    /// Returns `Store(NotFound)` when the user does not exist.
    pub async fn change_password(
        &self,
        user_id: UserId,
        new_password: &str,
    ) -> Result<User, AuthError> {
        let hash = hash_password(new_password)?;
        let user = self.users.set_password(user_id, hash, false).await?;
        info!(%user_id, "password changed");
        Ok(user)
    }

    /// Resets the password of an adviser or officer account by username.
    ///
    /// # Errors
    ///
    /// Returns `Store(NotFound)` for an unknown username and
    /// `ResetNotAllowed` when the target is an admin.
    pub async fn reset_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| StoreError::not_found("user", username))?;

        if user.role == UserRole::Admin {
            return Err(AuthError::ResetNotAllowed { role: user.role });
        }

        let hash = hash_password(new_password)?;
        let user = self.users.set_password(user.id, hash, false).await?;
        info!(%user.id, "password reset");
        Ok(user)
    }

    /// Returns true if the user must change their password before
    /// continuing.
    #[must_use]
    pub fn requires_password_change(user: &User) -> bool {
        user.is_temporary_password
    }
}
