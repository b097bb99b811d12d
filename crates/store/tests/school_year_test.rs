//! Integration tests for school year rollover.

use tempfile::TempDir;

use orgledger_shared::types::{OrganizationId, SchoolYearId};
use orgledger_store::{JsonStore, SchoolYearRepository, StoreError};

fn scratch_repo() -> (TempDir, SchoolYearRepository) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repo = SchoolYearRepository::new(JsonStore::new(dir.path()));
    (dir, repo)
}

#[tokio::test]
async fn test_start_first_school_year() {
    let (_dir, repo) = scratch_repo();
    let org = OrganizationId::new();

    let sy = repo
        .start(org, "1st Semester", "2025-2026")
        .await
        .expect("Start should succeed");

    assert!(sy.is_active);
    assert!(sy.end_date.is_none());
    assert_eq!(repo.active_for(org).await.unwrap().unwrap().id, sy.id);
}

#[tokio::test]
async fn test_starting_new_year_force_ends_active_one() {
    let (_dir, repo) = scratch_repo();
    let org = OrganizationId::new();

    let first = repo.start(org, "1st Semester", "2025-2026").await.unwrap();
    let second = repo.start(org, "2nd Semester", "2025-2026").await.unwrap();

    let ended = repo.find_by_id(first.id).await.unwrap().unwrap();
    assert!(!ended.is_active);
    assert!(ended.end_date.is_some());

    // Exactly one active school year remains for the organization.
    let active: Vec<_> = repo
        .by_organization(org)
        .await
        .unwrap()
        .into_iter()
        .filter(|sy| sy.is_active)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);
}

#[tokio::test]
async fn test_rollover_is_scoped_to_one_organization() {
    let (_dir, repo) = scratch_repo();
    let org_a = OrganizationId::new();
    let org_b = OrganizationId::new();

    let a = repo.start(org_a, "1st Semester", "2025-2026").await.unwrap();
    let b = repo.start(org_b, "1st Semester", "2025-2026").await.unwrap();

    // Starting another year for A must not end B's active year.
    repo.start(org_a, "2nd Semester", "2025-2026").await.unwrap();

    assert!(!repo.find_by_id(a.id).await.unwrap().unwrap().is_active);
    assert!(repo.find_by_id(b.id).await.unwrap().unwrap().is_active);
}

#[tokio::test]
async fn test_end_school_year() {
    let (_dir, repo) = scratch_repo();
    let org = OrganizationId::new();

    let sy = repo.start(org, "Summer", "2026").await.unwrap();
    let ended = repo.end(sy.id).await.expect("End should succeed");

    assert!(!ended.is_active);
    assert!(ended.end_date.is_some());
    assert!(repo.active_for(org).await.unwrap().is_none());
}

#[tokio::test]
async fn test_end_unknown_school_year_is_not_found() {
    let (_dir, repo) = scratch_repo();

    let result = repo.end(SchoolYearId::new()).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}
