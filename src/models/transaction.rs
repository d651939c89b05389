//! Transaction model
//!
//! A transaction is a single dated money movement, either an expense
//! (outflow) or income (inflow). Transactions are immutable after
//! creation: there is no edit operation, only add and delete.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::category::Category;
use super::money::Money;

/// Opaque transaction identifier
///
/// A backing store may assign its own identifiers; the local backend
/// generates UUID v4 strings. Wrapped in a newtype so transaction IDs
/// cannot be confused with other strings at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a new collision-resistant local identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier assigned by a backing store
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The direction of a transaction
///
/// Amounts are magnitudes; the kind carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier within the owning collection
    pub id: TransactionId,

    /// Amount as a magnitude (always >= 0; direction is in `kind`)
    pub amount: Money,

    /// What the money moved for (non-empty)
    pub description: String,

    /// Category from the closed set
    pub category: Category,

    /// When the movement happened (ISO-8601 on the wire)
    pub date: DateTime<Utc>,

    /// Expense or income
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Build a stored transaction from a submission and an assigned ID
    pub fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            amount: new.amount,
            description: new.description,
            category: new.category,
            date: new.date,
            kind: new.kind,
        }
    }

    /// The calendar day this transaction belongs to (grouping key)
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with the kind's sign applied (income +, expense -)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// A transaction submission before the store has assigned an identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}
