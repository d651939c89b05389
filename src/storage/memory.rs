//! In-memory backend
//!
//! Implements the store contract over process memory. Used by tests and
//! as the stand-in for a remote table-store backend; `fail_next` lets
//! tests exercise store-failure paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{PreferenceStore, TransactionStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CurrencyInfo, NewTransaction, Transaction, TransactionId};

#[derive(Debug, Default)]
struct ProfileData {
    transactions: Vec<Transaction>,
    preference: Option<CurrencyInfo>,
}

/// Store backed by a mutex-guarded map of profiles
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<String, ProfileData>>,
    preference_saves: AtomicUsize,
    fail_next: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store call fail with a `Store` error
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// How many preference writes have reached this store
    pub fn preference_save_count(&self) -> usize {
        self.preference_saves.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> LedgerResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(LedgerError::Store("injected failure".into()))
        } else {
            Ok(())
        }
    }
}

impl TransactionStore for MemoryStore {
    fn load_transactions(&self, profile: &str) -> LedgerResult<Vec<Transaction>> {
        self.check_failure()?;
        let profiles = self.profiles.lock().expect("store mutex poisoned");
        let mut transactions = profiles
            .get(profile)
            .map(|p| p.transactions.clone())
            .unwrap_or_default();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    fn add_transaction(&self, new: NewTransaction, profile: &str) -> LedgerResult<Transaction> {
        self.check_failure()?;
        let transaction = Transaction::from_new(TransactionId::generate(), new);

        let mut profiles = self.profiles.lock().expect("store mutex poisoned");
        profiles
            .entry(profile.to_string())
            .or_default()
            .transactions
            .insert(0, transaction.clone());

        Ok(transaction)
    }

    fn delete_transaction(&self, id: &TransactionId, profile: &str) -> LedgerResult<()> {
        self.check_failure()?;
        let mut profiles = self.profiles.lock().expect("store mutex poisoned");
        if let Some(data) = profiles.get_mut(profile) {
            data.transactions.retain(|t| &t.id != id);
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryStore {
    fn load_preference(&self, profile: &str) -> LedgerResult<Option<CurrencyInfo>> {
        self.check_failure()?;
        let profiles = self.profiles.lock().expect("store mutex poisoned");
        Ok(profiles.get(profile).and_then(|p| p.preference))
    }

    fn save_preference(&self, info: CurrencyInfo, profile: &str) -> LedgerResult<()> {
        self.check_failure()?;
        let mut profiles = self.profiles.lock().expect("store mutex poisoned");
        profiles.entry(profile.to_string()).or_default().preference = Some(info);
        self.preference_saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
