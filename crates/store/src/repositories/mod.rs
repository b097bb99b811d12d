//! Per-entity repositories over the JSON store.
//!
//! Repositories are thin query façades plus load-mutate-save mutations.
//! Reads are linear scans over a freshly loaded snapshot; the returned
//! lists do not reflect subsequent writes.

pub mod event;
pub mod organization;
pub mod school_year;
pub mod transaction;
pub mod user;

pub use event::EventRepository;
pub use organization::{GroupedTransactions, OrganizationRepository};
pub use school_year::SchoolYearRepository;
pub use transaction::{ReceiptUpload, RecordTransactionInput, TransactionRepository};
pub use user::UserRepository;
