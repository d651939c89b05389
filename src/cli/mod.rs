//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod currency;
pub mod migrate;
pub mod report;
pub mod transaction;

pub use currency::{handle_currency_command, CurrencyCommands};
pub use migrate::{handle_migrate, MigrateArgs};
pub use report::{handle_list, handle_stats, ListArgs};
pub use transaction::{handle_add, handle_delete, AddArgs, DeleteArgs};
