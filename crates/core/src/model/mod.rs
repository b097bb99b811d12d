//! Persisted entity types.
//!
//! These structs define the on-disk JSON shape of each collection: camelCase
//! field names, UUID-string IDs, lowercase string enums, RFC 3339 UTC
//! timestamps. Entities reference each other by ID only; no entity holds a
//! live reference to another.

mod event;
mod organization;
mod school_year;
mod transaction;
mod user;

pub use event::Event;
pub use organization::Organization;
pub use school_year::SchoolYear;
pub use transaction::{ApprovalStatus, Transaction, TransactionCategory, TransactionKind};
pub use user::User;
