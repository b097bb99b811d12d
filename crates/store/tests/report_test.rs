//! Integration tests for report rendering and saving.

use rust_decimal_macros::dec;
use tempfile::TempDir;

use orgledger_core::model::{ApprovalStatus, TransactionCategory, TransactionKind};
use orgledger_shared::types::{OrganizationId, SchoolYearId, UserId};
use orgledger_store::{
    JsonStore, OrganizationRepository, ReceiptStore, RecordTransactionInput, ReportWriter,
    SchoolYearRepository, StoreError, TransactionRepository,
};

struct Fixture {
    _dir: TempDir,
    organizations: OrganizationRepository,
    school_years: SchoolYearRepository,
    transactions: TransactionRepository,
    reports: ReportWriter,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonStore::new(dir.path());
    let receipts =
        ReceiptStore::new(&dir.path().join("Receipts")).expect("Failed to create receipt store");
    Fixture {
        organizations: OrganizationRepository::new(store.clone()),
        school_years: SchoolYearRepository::new(store.clone()),
        transactions: TransactionRepository::new(store.clone(), receipts),
        reports: ReportWriter::new(store, dir.path().join("Reports")),
        _dir: dir,
    }
}

fn income(org: OrganizationId, sy: SchoolYearId, amount: rust_decimal::Decimal) -> RecordTransactionInput {
    RecordTransactionInput {
        kind: TransactionKind::Income,
        organization_id: org,
        school_year_id: sy,
        event_id: None,
        category: TransactionCategory::General,
        detail: "Membership fees".to_string(),
        amount,
        receipt: None,
        created_by: UserId::new(),
    }
}

#[tokio::test]
async fn test_general_statement_contents() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    let adviser = UserId::new();

    let tx = fx
        .transactions
        .record(income(org.id, SchoolYearId::new(), dec!(1000.00)))
        .await
        .unwrap();
    fx.transactions
        .set_approval_status(tx.id, ApprovalStatus::Approved, adviser, false)
        .await
        .unwrap();

    let statement = fx
        .reports
        .general_statement(org.id)
        .await
        .expect("Statement should render");

    assert!(statement.contains("GENERAL STATEMENT"));
    assert!(statement.contains("Organization: Chess Club"));
    assert!(statement.contains("1,000.00"));
}

#[tokio::test]
async fn test_general_statement_unknown_org() {
    let fx = fixture();

    let result = fx.reports.general_statement(OrganizationId::new()).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_ledger_report_uses_active_school_year_by_default() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();
    let adviser = UserId::new();

    let old_year = fx
        .school_years
        .start(org.id, "1st Semester", "2024-2025")
        .await
        .unwrap();
    let old_tx = fx
        .transactions
        .record(income(org.id, old_year.id, dec!(111.00)))
        .await
        .unwrap();

    let current = fx
        .school_years
        .start(org.id, "1st Semester", "2025-2026")
        .await
        .unwrap();
    let current_tx = fx
        .transactions
        .record(income(org.id, current.id, dec!(222.00)))
        .await
        .unwrap();

    for id in [old_tx.id, current_tx.id] {
        fx.transactions
            .set_approval_status(id, ApprovalStatus::Approved, adviser, false)
            .await
            .unwrap();
    }

    // Default scope: the active school year only.
    let report = fx.reports.ledger_report(org.id, None).await.unwrap();
    assert!(report.contains("School Year: 1st Semester 2025-2026"));
    assert!(report.contains("222.00"));
    assert!(!report.contains("111.00"));

    // An explicit school year scopes to that year.
    let report = fx
        .reports
        .ledger_report(org.id, Some(old_year.id))
        .await
        .unwrap();
    assert!(report.contains("111.00"));
    assert!(!report.contains("222.00"));
}

#[tokio::test]
async fn test_save_writes_under_reports_dir() {
    let fx = fixture();
    let org = fx.organizations.create("Chess Club", "Arts").await.unwrap();

    let statement = fx.reports.general_statement(org.id).await.unwrap();
    let path = fx
        .reports
        .save(&statement, "general_statement.txt")
        .await
        .expect("Save should succeed");

    assert!(path.starts_with(fx.reports.reports_dir()));
    let written = std::fs::read_to_string(path).expect("Report file should exist");
    assert_eq!(written, statement);
}
