//! Local JSON file backend
//!
//! The local-only persisted layout: each profile directory holds two
//! named entries, `transactions.json` (the full ordered list) and
//! `currency.json` (the serialized currency preference). Corrupt entries
//! are logged and treated as absent so the application still boots with
//! empty defaults.

use log::warn;

use super::file_io::{read_json_opt, write_json_atomic};
use super::{PreferenceStore, TransactionStore};
use crate::config::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CurrencyInfo, NewTransaction, Transaction, TransactionId};

/// Serializable transaction list structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionFile {
    transactions: Vec<Transaction>,
}

/// Store backed by per-profile JSON files
#[derive(Debug, Clone)]
pub struct LocalStore {
    paths: LedgerPaths,
}

impl LocalStore {
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    /// Read the raw list, treating a missing or corrupt file as empty
    fn read_list(&self, profile: &str) -> LedgerResult<Vec<Transaction>> {
        let path = self.paths.transactions_file(profile);
        match read_json_opt::<TransactionFile, _>(&path) {
            Ok(Some(file)) => Ok(file.transactions),
            Ok(None) => Ok(Vec::new()),
            Err(LedgerError::Parse(msg)) => {
                warn!("corrupt transaction list, starting empty: {}", msg);
                Ok(Vec::new())
            }
            Err(e) => Err(LedgerError::Store(e.to_string())),
        }
    }

    fn write_list(&self, transactions: Vec<Transaction>, profile: &str) -> LedgerResult<()> {
        let path = self.paths.transactions_file(profile);
        write_json_atomic(&path, &TransactionFile { transactions })
            .map_err(|e| LedgerError::Store(e.to_string()))
    }

    /// Whether the profile has any persisted data (used by migration)
    pub fn has_data(&self, profile: &str) -> bool {
        self.paths.transactions_file(profile).exists()
            || self.paths.currency_file(profile).exists()
    }

    /// Remove the persisted transaction list entry
    pub fn clear_transactions(&self, profile: &str) -> LedgerResult<()> {
        let path = self.paths.transactions_file(profile);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| LedgerError::Store(e.to_string()))?;
        }
        Ok(())
    }

    /// Remove the persisted currency preference entry
    pub fn clear_preference(&self, profile: &str) -> LedgerResult<()> {
        let path = self.paths.currency_file(profile);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| LedgerError::Store(e.to_string()))?;
        }
        Ok(())
    }
}

impl TransactionStore for LocalStore {
    fn load_transactions(&self, profile: &str) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = self.read_list(profile)?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    fn add_transaction(&self, new: NewTransaction, profile: &str) -> LedgerResult<Transaction> {
        let transaction = Transaction::from_new(TransactionId::generate(), new);

        let mut transactions = self.read_list(profile)?;
        transactions.insert(0, transaction.clone());
        self.write_list(transactions, profile)?;

        Ok(transaction)
    }

    fn delete_transaction(&self, id: &TransactionId, profile: &str) -> LedgerResult<()> {
        // Deleting an unknown identifier succeeds silently
        let mut transactions = self.read_list(profile)?;
        transactions.retain(|t| &t.id != id);
        self.write_list(transactions, profile)
    }
}

impl PreferenceStore for LocalStore {
    fn load_preference(&self, profile: &str) -> LedgerResult<Option<CurrencyInfo>> {
        let path = self.paths.currency_file(profile);
        match read_json_opt::<CurrencyInfo, _>(&path) {
            Ok(info) => Ok(info),
            Err(LedgerError::Parse(msg)) => {
                warn!("corrupt currency preference, using default: {}", msg);
                Ok(None)
            }
            Err(e) => Err(LedgerError::Store(e.to_string())),
        }
    }

    fn save_preference(&self, info: CurrencyInfo, profile: &str) -> LedgerResult<()> {
        let path = self.paths.currency_file(profile);
        write_json_atomic(&path, &info).map_err(|e| LedgerError::Store(e.to_string()))
    }
}
