//! Integration tests for the system reset.

use rust_decimal_macros::dec;
use tempfile::TempDir;

use orgledger_core::model::{TransactionCategory, TransactionKind, User};
use orgledger_shared::types::UserId;
use orgledger_store::{
    JsonStore, OrganizationRepository, ReceiptStore, ReceiptUpload, RecordTransactionInput,
    SchoolYearRepository, SessionStore, StoreError, SystemReset, TransactionRepository,
    UserRepository, collections,
};

struct Fixture {
    _dir: TempDir,
    store: JsonStore,
    users: UserRepository,
    organizations: OrganizationRepository,
    school_years: SchoolYearRepository,
    transactions: TransactionRepository,
    receipts: ReceiptStore,
    reset: SystemReset,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonStore::new(dir.path());
    let receipts =
        ReceiptStore::new(&dir.path().join("Receipts")).expect("Failed to create receipt store");
    let sessions = SessionStore::new(store.clone(), 7);

    Fixture {
        users: UserRepository::new(store.clone()),
        organizations: OrganizationRepository::new(store.clone()),
        school_years: SchoolYearRepository::new(store.clone()),
        transactions: TransactionRepository::new(store.clone(), receipts.clone()),
        reset: SystemReset::new(store.clone(), receipts.clone(), sessions),
        receipts,
        store,
        _dir: dir,
    }
}

async fn bootstrap_admin(store: &JsonStore) -> User {
    store.init().await.expect("Init should succeed");
    let users: Vec<User> = store.load(collections::USERS).await.unwrap();
    users[0].clone()
}

#[tokio::test]
async fn test_reset_wipes_everything_but_the_admin() {
    let fx = fixture();
    let admin = bootstrap_admin(&fx.store).await;

    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    fx.users
        .create_adviser("Bob", "bob", "temp-pass", org.id)
        .await
        .unwrap();
    let sy = fx
        .school_years
        .start(org.id, "1st Semester", "2025-2026")
        .await
        .unwrap();

    let tx = fx
        .transactions
        .record(RecordTransactionInput {
            kind: TransactionKind::Expense,
            organization_id: org.id,
            school_year_id: sy.id,
            event_id: None,
            category: TransactionCategory::General,
            detail: "Supplies".to_string(),
            amount: dec!(45.00),
            receipt: Some(ReceiptUpload {
                bytes: b"receipt".to_vec(),
                filename: "or.png".to_string(),
            }),
            created_by: UserId::new(),
        })
        .await
        .unwrap();
    let receipt_key = tx.receipt_path.clone().unwrap();
    assert!(fx.receipts.exists(&receipt_key).await);

    let summary = fx
        .reset
        .perform(admin.id)
        .await
        .expect("Reset should succeed");

    assert_eq!(summary.users_removed, 1);
    assert_eq!(summary.organizations_removed, 1);
    assert_eq!(summary.school_years_removed, 1);
    assert_eq!(summary.events_removed, 0);
    assert_eq!(summary.transactions_removed, 1);

    // Only the acting admin survives.
    let users = fx.users.all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, admin.id);

    assert!(fx.organizations.all().await.unwrap().is_empty());
    assert!(fx.school_years.all().await.unwrap().is_empty());
    assert!(fx.transactions.all().await.unwrap().is_empty());
    assert!(!fx.receipts.exists(&receipt_key).await);
}

#[tokio::test]
async fn test_reset_requires_admin_role() {
    let fx = fixture();
    bootstrap_admin(&fx.store).await;

    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    let adviser = fx
        .users
        .create_adviser("Bob", "bob", "temp-pass", org.id)
        .await
        .unwrap();

    let result = fx.reset.perform(adviser.id).await;
    assert!(matches!(result, Err(StoreError::Forbidden(_))));

    // Nothing was wiped.
    assert_eq!(fx.organizations.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_reset_with_unknown_actor() {
    let fx = fixture();
    bootstrap_admin(&fx.store).await;

    let result = fx.reset.perform(UserId::new()).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}
