//! Plain-text financial statements.
//!
//! Renderers are pure over entity snapshots; writing the output to disk is
//! the store layer's job.

pub mod statement;

pub use statement::{event_statement, format_amount, general_statement, ledger_report};
