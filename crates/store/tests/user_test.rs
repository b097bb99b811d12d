//! Integration tests for the user repository.

use tempfile::TempDir;

use orgledger_core::auth::UserRole;
use orgledger_shared::types::{OrganizationId, UserId};
use orgledger_store::{JsonStore, OrganizationRepository, StoreError, UserRepository};

struct Fixture {
    _dir: TempDir,
    users: UserRepository,
    organizations: OrganizationRepository,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonStore::new(dir.path());
    Fixture {
        users: UserRepository::new(store.clone()),
        organizations: OrganizationRepository::new(store),
        _dir: dir,
    }
}

#[tokio::test]
async fn test_create_adviser_and_find() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();

    let adviser = fx
        .users
        .create_adviser("Bob Reyes", "bob", "temp-pass", org.id)
        .await
        .expect("Creation should succeed");

    assert_eq!(adviser.role, UserRole::Adviser);
    assert_eq!(adviser.organization_id, Some(org.id));
    assert!(adviser.is_temporary_password);
    assert!(adviser.password_hash.starts_with("$argon2id$"));
    assert!(adviser.position.is_none());

    let found = fx
        .users
        .find_by_id(adviser.id)
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(found, adviser);
}

#[tokio::test]
async fn test_create_officer_carries_position() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();

    let officer = fx
        .users
        .create_officer("Ana Cruz", "ana", "temp-pass", org.id, "Treasurer")
        .await
        .unwrap();

    assert_eq!(officer.role, UserRole::Officer);
    assert_eq!(officer.position.as_deref(), Some("Treasurer"));
}

#[tokio::test]
async fn test_duplicate_username_is_conflict_case_insensitive() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();

    fx.users
        .create_adviser("Bob Reyes", "Bob", "temp-pass", org.id)
        .await
        .unwrap();

    let result = fx
        .users
        .create_officer("Other Bob", "BOB", "temp-pass", org.id, "Secretary")
        .await;
    assert!(matches!(result, Err(StoreError::Conflict(_))));
}

#[tokio::test]
async fn test_create_requires_existing_organization() {
    let fx = fixture();

    let result = fx
        .users
        .create_adviser("Bob Reyes", "bob", "temp-pass", OrganizationId::new())
        .await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_find_by_username_ignores_case() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    fx.users
        .create_adviser("Bob Reyes", "Bob.Reyes", "temp-pass", org.id)
        .await
        .unwrap();

    let found = fx.users.find_by_username("bob.reyes").await.unwrap();
    assert!(found.is_some());
    assert!(fx.users.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_queries_by_role_and_organization() {
    let fx = fixture();
    let org_a = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    let org_b = fx.organizations.create("Math Society", "Eng").await.unwrap();

    fx.users
        .create_adviser("Bob", "bob", "p", org_a.id)
        .await
        .unwrap();
    fx.users
        .create_officer("Ana", "ana", "p", org_a.id, "Treasurer")
        .await
        .unwrap();
    fx.users
        .create_officer("Leo", "leo", "p", org_b.id, "Auditor")
        .await
        .unwrap();

    assert_eq!(fx.users.by_role(UserRole::Officer).await.unwrap().len(), 2);
    assert_eq!(fx.users.by_role(UserRole::Adviser).await.unwrap().len(), 1);
    assert_eq!(fx.users.by_organization(org_a.id).await.unwrap().len(), 2);
    assert_eq!(fx.users.by_organization(org_b.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_set_active_round_trip() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    let adviser = fx
        .users
        .create_adviser("Bob", "bob", "p", org.id)
        .await
        .unwrap();

    let deactivated = fx.users.set_active(adviser.id, false).await.unwrap();
    assert!(!deactivated.is_active);

    let reactivated = fx.users.set_active(adviser.id, true).await.unwrap();
    assert!(reactivated.is_active);
}

#[tokio::test]
async fn test_delete_user() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    let adviser = fx
        .users
        .create_adviser("Bob", "bob", "p", org.id)
        .await
        .unwrap();

    fx.users.delete(adviser.id).await.expect("Delete should succeed");
    assert!(fx.users.find_by_id(adviser.id).await.unwrap().is_none());

    let result = fx.users.delete(UserId::new()).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}
