//! Add and delete commands

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;

use crate::config::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, TransactionId, TransactionKind};
use crate::services::{LedgerService, PreferenceService, TransactionDraft};
use crate::storage::LocalStore;

/// Arguments for `pocket add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount, e.g. "12.50" (whole units only for currencies without decimals)
    #[arg(short, long)]
    pub amount: String,

    /// What the money moved for
    #[arg(short, long)]
    pub description: String,

    /// Category: Food & Dining, Transportation, Shopping, Entertainment,
    /// Bills & Utilities, Healthcare, Education, Travel, Income, Other
    #[arg(short, long)]
    pub category: String,

    /// Record as income instead of an expense
    #[arg(long)]
    pub income: bool,

    /// Transaction date (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `pocket delete`
#[derive(Args)]
pub struct DeleteArgs {
    /// Identifier of the transaction to remove (shown by `pocket list`)
    pub id: String,
}

/// Handle `pocket add`
pub fn handle_add(paths: &LedgerPaths, profile: &str, args: AddArgs) -> LedgerResult<()> {
    let store = Arc::new(LocalStore::new(paths.clone()));

    let mut preferences = PreferenceService::new(Arc::clone(&store), profile);
    preferences.load()?;
    let currency = preferences.current();

    let draft = TransactionDraft {
        amount: args.amount,
        description: args.description,
        category: Some(args.category.parse::<Category>()?),
        date: args.date.as_deref().map(parse_date).transpose()?,
        kind: if args.income {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        },
    };

    let mut ledger = LedgerService::new(store, profile);
    let stored = ledger.add(draft, currency)?;

    let verb = match stored.kind {
        TransactionKind::Expense => "spent on",
        TransactionKind::Income => "earned from",
    };
    println!(
        "{} added: {} {} {}",
        stored.kind,
        currency.format(stored.amount),
        verb,
        stored.description
    );
    println!("  Date:     {}", stored.date.format("%Y-%m-%d"));
    println!("  Category: {}", stored.category);
    println!("  ID:       {}", stored.id);

    Ok(())
}

/// Handle `pocket delete`
pub fn handle_delete(paths: &LedgerPaths, profile: &str, args: DeleteArgs) -> LedgerResult<()> {
    let store = Arc::new(LocalStore::new(paths.clone()));
    let mut ledger = LedgerService::new(store, profile);

    ledger.delete(&TransactionId::from_string(args.id))?;
    println!("Transaction deleted.");

    Ok(())
}

/// Parse a user-entered date: full RFC 3339, or a plain calendar date
/// taken as midnight UTC
fn parse_date(input: &str) -> LedgerResult<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc())
        .map_err(|_| {
            LedgerError::validation(
                "date",
                format!("'{}' is not a YYYY-MM-DD or RFC 3339 date", input),
            )
        })
}
