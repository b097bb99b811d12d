//! Core business logic for orgledger.
//!
//! This crate contains pure business logic with ZERO storage or I/O
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `model` - Persisted entity types (users, organizations, school years,
//!   events, transactions)
//! - `workflow` - Transaction approval lifecycle state machine
//! - `ledger` - Transaction validation and balance calculations
//! - `auth` - Password hashing and role capabilities
//! - `reports` - Plain-text statement rendering

pub mod auth;
pub mod ledger;
pub mod model;
pub mod reports;
pub mod workflow;
