//! Migration command
//!
//! Moves data out of an older local-only layout into this ledger's
//! store. Best-effort: each piece that copies cleanly is removed from
//! the source; anything that fails stays put and is reported.

use std::path::PathBuf;

use clap::Args;

use crate::config::LedgerPaths;
use crate::error::LedgerResult;
use crate::services::{MigrationOutcome, Migrator};
use crate::storage::LocalStore;

/// Arguments for `pocket migrate`
#[derive(Args)]
pub struct MigrateArgs {
    /// Base directory of the local-only data to migrate from
    #[arg(long)]
    pub from: PathBuf,
}

/// Handle `pocket migrate`
pub fn handle_migrate(paths: &LedgerPaths, profile: &str, args: MigrateArgs) -> LedgerResult<()> {
    let source = LocalStore::new(LedgerPaths::with_base_dir(args.from.clone()));
    let target = LocalStore::new(paths.clone());

    if !source.has_data(profile) {
        println!(
            "Nothing to migrate: no data for profile '{}' under {}",
            profile,
            args.from.display()
        );
        return Ok(());
    }

    println!("Migrating data from {}...", args.from.display());
    let mut migrator = Migrator::new();

    match migrator.run(&source, &target, profile) {
        MigrationOutcome::Skipped => {
            println!("Migration already ran; nothing to do.");
        }
        MigrationOutcome::Ran(report) => {
            println!("  Transactions copied: {}", report.transactions_copied);
            if report.preference_copied {
                println!("  Currency preference copied");
            }
            if report.is_clean() {
                println!("Migration complete. Local copies cleared.");
            } else {
                println!("Migration finished with problems; failed pieces were left in place:");
                for failure in &report.failures {
                    println!("  - {}", failure);
                }
            }
        }
    }

    Ok(())
}
