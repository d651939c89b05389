//! Storage layer for pocket-ledger
//!
//! Defines the store contract the rest of the application depends on,
//! plus two backends: local JSON files and an in-memory store. Any
//! remote table-store backend slots in by implementing the same traits.

pub mod file_io;
pub mod local;
pub mod memory;

pub use file_io::{read_json_opt, write_json_atomic};
pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::error::LedgerResult;
use crate::models::{CurrencyInfo, NewTransaction, Transaction, TransactionId};

/// Durable storage for a profile's transaction collection
///
/// Implementations are interchangeable: the service layer never knows
/// which backend it is talking to. Every method maps a failure to
/// `LedgerError::Store`.
pub trait TransactionStore: Send + Sync {
    /// Load the full collection for a profile, ordered by date descending
    fn load_transactions(&self, profile: &str) -> LedgerResult<Vec<Transaction>>;

    /// Append one transaction; the store assigns the identifier
    fn add_transaction(&self, new: NewTransaction, profile: &str) -> LedgerResult<Transaction>;

    /// Remove one transaction by identifier
    ///
    /// Deleting an unknown identifier is implementation-defined; backends
    /// document whether it succeeds silently or fails.
    fn delete_transaction(&self, id: &TransactionId, profile: &str) -> LedgerResult<()>;
}

/// Durable storage for a profile's currency preference
pub trait PreferenceStore: Send + Sync {
    /// Load the stored preference; `None` means no preference has been
    /// saved yet (distinct from an error) and callers default to USD
    fn load_preference(&self, profile: &str) -> LedgerResult<Option<CurrencyInfo>>;

    /// Create or replace the preference for a profile
    fn save_preference(&self, info: CurrencyInfo, profile: &str) -> LedgerResult<()>;
}
