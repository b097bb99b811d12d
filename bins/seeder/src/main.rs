//! Data directory seeder for orgledger.
//!
//! Initializes the data directory (bootstrap admin plus empty collections)
//! and seeds a demo organization with an adviser, an officer, a school
//! year, an event, and a few transactions in each approval state.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orgledger_core::model::{ApprovalStatus, TransactionCategory, TransactionKind};
use orgledger_shared::AppConfig;
use orgledger_store::{
    EventRepository, JsonStore, OrganizationRepository, ReceiptStore, RecordTransactionInput,
    SchoolYearRepository, TransactionRepository, UserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orgledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let store = JsonStore::new(&config.storage.data_dir);
    store.init().await.context("Failed to initialize data directory")?;
    info!(data_dir = %config.storage.data_dir.display(), "data directory ready");

    let receipts = ReceiptStore::new(&config.storage.data_dir.join(&config.storage.receipts_dir))?;

    let users = UserRepository::new(store.clone());
    let organizations = OrganizationRepository::new(store.clone());
    let school_years = SchoolYearRepository::new(store.clone());
    let events = EventRepository::new(store.clone());
    let transactions = TransactionRepository::new(store, receipts);

    if !organizations.all().await?.is_empty() {
        info!("data directory already seeded; nothing to do");
        return Ok(());
    }

    info!("seeding demo organization");
    let org = organizations
        .create("Computer Science Society", "College of Engineering")
        .await?;

    let adviser = users
        .create_adviser("Maria Santos", "msantos", "adviser123", org.id)
        .await?;
    let officer = users
        .create_officer("Juan dela Cruz", "jdcruz", "officer123", org.id, "Treasurer")
        .await?;

    let school_year = school_years.start(org.id, "1st Semester", "2025-2026").await?;

    let event = events
        .create(
            org.id,
            school_year.id,
            "Acquaintance Party",
            Utc::now() + Duration::days(30),
            officer.id,
        )
        .await?;

    info!("seeding demo transactions");
    let opening = transactions
        .record(RecordTransactionInput {
            kind: TransactionKind::Income,
            organization_id: org.id,
            school_year_id: school_year.id,
            event_id: None,
            category: TransactionCategory::General,
            detail: "Membership fees".to_string(),
            amount: dec!(5000.00),
            receipt: None,
            created_by: officer.id,
        })
        .await?;
    transactions
        .set_approval_status(opening.id, ApprovalStatus::Approved, adviser.id, false)
        .await?;

    let venue = transactions
        .record(RecordTransactionInput {
            kind: TransactionKind::Expense,
            organization_id: org.id,
            school_year_id: school_year.id,
            event_id: Some(event.id),
            category: TransactionCategory::Event,
            detail: "Venue reservation".to_string(),
            amount: dec!(1500.00),
            receipt: None,
            created_by: officer.id,
        })
        .await?;
    transactions
        .set_approval_status(venue.id, ApprovalStatus::Approved, adviser.id, false)
        .await?;

    // Left pending so the adviser dashboard has something to decide.
    transactions
        .record(RecordTransactionInput {
            kind: TransactionKind::Expense,
            organization_id: org.id,
            school_year_id: school_year.id,
            event_id: None,
            category: TransactionCategory::General,
            detail: "Printing and supplies".to_string(),
            amount: dec!(350.00),
            receipt: None,
            created_by: officer.id,
        })
        .await?;

    let balance = organizations.balance(org.id).await?;
    info!(%balance, "seeding complete");

    Ok(())
}
