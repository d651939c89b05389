//! Ledger orchestration service
//!
//! Thin layer between user intents and the transaction store: validates
//! submissions, coerces amounts under the active currency policy, and
//! keeps an in-memory cache of the collection that is optimistically
//! updated on add/delete. A store failure surfaces to the caller and
//! leaves the cache untouched, so the view stays consistent with
//! confirmed-persisted state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Category, CurrencyInfo, NewTransaction, Transaction, TransactionId, TransactionKind,
};
use crate::storage::TransactionStore;

/// Raw add-form fields before validation
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    /// Amount as entered, e.g. "12.50"
    pub amount: String,
    pub description: String,
    pub category: Option<Category>,
    /// Defaults to now when not selected
    pub date: Option<DateTime<Utc>>,
    pub kind: TransactionKind,
}

/// Orchestrates transaction CRUD against a backing store
pub struct LedgerService<S: TransactionStore> {
    store: Arc<S>,
    profile: String,
    transactions: Vec<Transaction>,
}

impl<S: TransactionStore> LedgerService<S> {
    pub fn new(store: Arc<S>, profile: impl Into<String>) -> Self {
        Self {
            store,
            profile: profile.into(),
            transactions: Vec::new(),
        }
    }

    /// Refresh the cache from the store (date descending)
    pub fn load(&mut self) -> LedgerResult<()> {
        self.transactions = self.store.load_transactions(&self.profile)?;
        Ok(())
    }

    /// Snapshot of the cached collection
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validate and submit a draft; on success the stored transaction is
    /// prepended to the cache and returned
    pub fn add(
        &mut self,
        draft: TransactionDraft,
        currency: CurrencyInfo,
    ) -> LedgerResult<Transaction> {
        let new = validate_draft(draft, currency)?;

        let stored = self.store.add_transaction(new, &self.profile)?;
        info!("added transaction {}", stored.id);
        self.transactions.insert(0, stored.clone());

        Ok(stored)
    }

    /// Delete by identifier from the store, then from the cache
    ///
    /// Removing an identifier absent from the cache is a cache-level
    /// no-op; a store failure propagates with the cache unchanged.
    pub fn delete(&mut self, id: &TransactionId) -> LedgerResult<()> {
        self.store.delete_transaction(id, &self.profile)?;
        info!("deleted transaction {}", id);
        self.transactions.retain(|t| &t.id != id);
        Ok(())
    }
}

/// Check the draft's required fields and coerce the amount
///
/// All-or-nothing: any missing or malformed field rejects the submission
/// before the store is touched.
fn validate_draft(draft: TransactionDraft, currency: CurrencyInfo) -> LedgerResult<NewTransaction> {
    if draft.amount.trim().is_empty() {
        return Err(LedgerError::validation("amount", "is required"));
    }

    let description = draft.description.trim();
    if description.is_empty() {
        return Err(LedgerError::validation("description", "is required"));
    }

    let category = draft
        .category
        .ok_or_else(|| LedgerError::validation("category", "is required"))?;

    let amount = currency.parse_amount(&draft.amount)?;
    if amount.is_negative() {
        return Err(LedgerError::validation(
            "amount",
            "must not be negative (use the transaction type for direction)",
        ));
    }

    Ok(NewTransaction {
        amount,
        description: description.to_string(),
        category,
        date: draft.date.unwrap_or_else(Utc::now),
        kind: draft.kind,
    })
}
