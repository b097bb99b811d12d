//! Flat-file ledger store.
//!
//! This crate owns everything that touches disk:
//! - `JsonStore` - whole-collection JSON persistence (load, mutate, save)
//! - `ReceiptStore` - opaque receipt blobs under an organization-scoped key
//! - `SessionStore` - opaque session tokens, hashed at rest
//! - `repositories` - per-entity query façades and mutations
//! - `AuthService` - login, session restore, password management
//! - `ReportWriter` - renders statements and writes them under `Reports/`
//! - `SystemReset` - administrative full wipe
//!
//! Every mutation is load → mutate in memory → save the whole collection;
//! the last writer wins. Saves replace the file atomically so a failed
//! write leaves the previous contents intact.

pub mod auth;
pub mod error;
pub mod json_store;
pub mod receipts;
pub mod reports;
pub mod repositories;
pub mod reset;
pub mod session;

pub use auth::{AuthError, AuthService, LoginOutcome};
pub use error::StoreError;
pub use json_store::{JsonStore, collections};
pub use receipts::ReceiptStore;
pub use reports::ReportWriter;
pub use repositories::{
    EventRepository, GroupedTransactions, OrganizationRepository, ReceiptUpload,
    RecordTransactionInput, SchoolYearRepository, TransactionRepository, UserRepository,
};
pub use reset::{ResetSummary, SystemReset};
pub use session::SessionStore;
