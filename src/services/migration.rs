//! One-shot migration from the local-only layout into another backend
//!
//! Best-effort, per-piece: the transaction list and the currency
//! preference migrate independently, and each local entry is cleared
//! only on confirmed success of its own copy. Guarded by an explicit
//! tri-state gate so the migration can run at most once, even if
//! triggered twice.

use log::{error, info};

use crate::error::LedgerResult;
use crate::models::NewTransaction;
use crate::storage::{LocalStore, PreferenceStore, TransactionStore};

/// Where the one-shot migration stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationState {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

/// What a migration run accomplished
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub transactions_copied: usize,
    pub transactions_cleared: bool,
    pub preference_copied: bool,
    pub preference_cleared: bool,
    /// Failures are reported, never fatal; the app proceeds as if the
    /// failed piece had not been migrated
    pub failures: Vec<String>,
}

impl MigrationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of asking the migrator to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    Ran(MigrationReport),
    /// The gate was already closed (done or currently running)
    Skipped,
}

/// Holds the one-shot gate across triggers
#[derive(Debug, Default)]
pub struct Migrator {
    state: MigrationState,
}

impl Migrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MigrationState {
        self.state
    }

    /// Copy the local-only data into `target`, clearing each local piece
    /// only once its copy is confirmed
    pub fn run<T>(&mut self, source: &LocalStore, target: &T, profile: &str) -> MigrationOutcome
    where
        T: TransactionStore + PreferenceStore,
    {
        match self.state {
            MigrationState::NotStarted => {}
            MigrationState::InProgress | MigrationState::Done => return MigrationOutcome::Skipped,
        }
        self.state = MigrationState::InProgress;

        let mut report = MigrationReport::default();
        self.migrate_transactions(source, target, profile, &mut report);
        self.migrate_preference(source, target, profile, &mut report);

        // the gate closes whether or not pieces failed; failed pieces are
        // simply still present locally
        self.state = MigrationState::Done;
        info!(
            "migration finished: {} transactions copied, preference copied: {}",
            report.transactions_copied, report.preference_copied
        );
        MigrationOutcome::Ran(report)
    }

    fn migrate_transactions<T: TransactionStore>(
        &self,
        source: &LocalStore,
        target: &T,
        profile: &str,
        report: &mut MigrationReport,
    ) {
        let transactions = match source.load_transactions(profile) {
            Ok(transactions) => transactions,
            Err(e) => {
                error!("could not read local transactions for migration: {}", e);
                report.failures.push(format!("load transactions: {}", e));
                return;
            }
        };

        if transactions.is_empty() {
            return;
        }

        for txn in &transactions {
            let new = NewTransaction {
                amount: txn.amount,
                description: txn.description.clone(),
                category: txn.category,
                date: txn.date,
                kind: txn.kind,
            };
            match target.add_transaction(new, profile) {
                Ok(_) => report.transactions_copied += 1,
                Err(e) => {
                    error!("migration stopped copying transactions: {}", e);
                    report.failures.push(format!("copy transaction: {}", e));
                    return;
                }
            }
        }

        // every copy confirmed; now the local entry may go
        match source.clear_transactions(profile) {
            Ok(()) => report.transactions_cleared = true,
            Err(e) => {
                error!("migrated transactions but could not clear local copy: {}", e);
                report.failures.push(format!("clear transactions: {}", e));
            }
        }
    }

    fn migrate_preference<T: PreferenceStore>(
        &self,
        source: &LocalStore,
        target: &T,
        profile: &str,
        report: &mut MigrationReport,
    ) {
        let info = match source.load_preference(profile) {
            Ok(Some(info)) => info,
            Ok(None) => return,
            Err(e) => {
                error!("could not read local currency preference for migration: {}", e);
                report.failures.push(format!("load preference: {}", e));
                return;
            }
        };

        if let Err(e) = target.save_preference(info, profile) {
            error!("migration could not copy currency preference: {}", e);
            report.failures.push(format!("copy preference: {}", e));
            return;
        }
        report.preference_copied = true;

        match source.clear_preference(profile) {
            Ok(()) => report.preference_cleared = true,
            Err(e) => {
                error!("migrated preference but could not clear local copy: {}", e);
                report.failures.push(format!("clear preference: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPaths;
    use crate::models::{Category, Currency, Money, TransactionKind};
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    const PROFILE: &str = "default";

    fn seeded_local() -> (TempDir, LocalStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = LocalStore::new(paths);

        for (day, cents) in [(3, 1000), (8, 2500)] {
            store
                .add_transaction(
                    NewTransaction {
                        amount: Money::from_cents(cents),
                        description: format!("day {}", day),
                        category: Category::Other,
                        date: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
                        kind: TransactionKind::Expense,
                    },
                    PROFILE,
                )
                .unwrap();
        }
        store
            .save_preference(Currency::Pkr.info(), PROFILE)
            .unwrap();

        (temp_dir, store)
    }

    #[test]
    fn test_migrates_both_pieces_and_clears_local() {
        let (_temp_dir, local) = seeded_local();
        let target = MemoryStore::new();
        let mut migrator = Migrator::new();

        let outcome = migrator.run(&local, &target, PROFILE);

        let MigrationOutcome::Ran(report) = outcome else {
            panic!("expected the migration to run");
        };
        assert!(report.is_clean());
        assert_eq!(report.transactions_copied, 2);
        assert!(report.transactions_cleared);
        assert!(report.preference_copied);
        assert!(report.preference_cleared);

        assert_eq!(target.load_transactions(PROFILE).unwrap().len(), 2);
        assert_eq!(
            target.load_preference(PROFILE).unwrap(),
            Some(Currency::Pkr.info())
        );
        assert!(!local.has_data(PROFILE));
        assert_eq!(migrator.state(), MigrationState::Done);
    }

    #[test]
    fn test_second_trigger_is_skipped() {
        let (_temp_dir, local) = seeded_local();
        let target = MemoryStore::new();
        let mut migrator = Migrator::new();

        assert!(matches!(
            migrator.run(&local, &target, PROFILE),
            MigrationOutcome::Ran(_)
        ));
        assert_eq!(migrator.run(&local, &target, PROFILE), MigrationOutcome::Skipped);

        // nothing was copied twice
        assert_eq!(target.load_transactions(PROFILE).unwrap().len(), 2);
    }

    #[test]
    fn test_transaction_failure_keeps_local_copy_but_preference_still_migrates() {
        let (_temp_dir, local) = seeded_local();
        let target = MemoryStore::new();
        let mut migrator = Migrator::new();

        // first target call (a transaction copy) fails
        target.fail_next();
        let MigrationOutcome::Ran(report) = migrator.run(&local, &target, PROFILE) else {
            panic!("expected the migration to run");
        };

        assert!(!report.is_clean());
        assert!(!report.transactions_cleared);
        // the failed piece is still local
        assert_eq!(local.load_transactions(PROFILE).unwrap().len(), 2);
        // the independent piece migrated and cleared
        assert!(report.preference_copied);
        assert!(report.preference_cleared);
        assert!(local.load_preference(PROFILE).unwrap().is_none());
    }

    #[test]
    fn test_empty_source_is_a_clean_noop_run() {
        let temp_dir = TempDir::new().unwrap();
        let local = LocalStore::new(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf()));
        let target = MemoryStore::new();
        let mut migrator = Migrator::new();

        let MigrationOutcome::Ran(report) = migrator.run(&local, &target, PROFILE) else {
            panic!("expected the migration to run");
        };
        assert!(report.is_clean());
        assert_eq!(report.transactions_copied, 0);
        assert!(!report.preference_copied);
        assert_eq!(migrator.state(), MigrationState::Done);
    }
}
