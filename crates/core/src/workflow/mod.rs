//! Transaction approval workflow.
//!
//! Implements the transaction lifecycle state machine:
//! Pending → Approved (approve) and Pending → Rejected (reject), with
//! Approved/Rejected terminal unless the caller explicitly opts into
//! re-deciding.
//!
//! # Modules
//!
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;

#[cfg(test)]
mod service_props;

pub use error::ApprovalError;
pub use service::{ApprovalAction, ApprovalFlow};
