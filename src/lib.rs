//! pocket-ledger - Personal income and expense tracker
//!
//! This library provides the core functionality for the pocket-ledger
//! application: recording income and expense transactions, aggregating
//! statistics, and browsing a month-by-month history, with a pluggable
//! persistence layer and multi-currency display support.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, currency policy, categories, transactions)
//! - `storage`: The store contract and its local JSON / in-memory backends
//! - `services`: Business logic layer (ledger orchestration, preferences, migration)
//! - `reports`: Pure aggregation (statistics, month-windowed history)
//! - `display`: Terminal rendering
//! - `cli`: Command handlers for the `pocket` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::LedgerPaths;
//! use pocket_ledger::storage::LocalStore;
//!
//! let paths = LedgerPaths::new()?;
//! let store = LocalStore::new(paths);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
