//! Month history display formatting
//!
//! Renders the day-grouped month view: a month header, one block per
//! day with its signed daily total, and one row per transaction.

use chrono::NaiveDate;

use crate::models::{CurrencyInfo, Transaction};
use crate::reports::MonthView;

/// Format a day header, e.g. "Tuesday, March 5"
fn format_day_header(day: NaiveDate) -> String {
    day.format("%A, %B %-d").to_string()
}

/// Format a single transaction row
fn format_row(txn: &Transaction, currency: &CurrencyInfo) -> String {
    let amount = if txn.is_expense() {
        format!("-{}", currency.format(txn.amount))
    } else {
        format!("+{}", currency.format(txn.amount))
    };

    format!(
        "  {:>12}  {:<28} {:<18} {}",
        amount,
        truncate(&txn.description, 28),
        txn.category.name(),
        txn.id
    )
}

/// Format the full month view
pub fn format_month_view(view: &MonthView, currency: CurrencyInfo) -> String {
    let label = view.window.label();
    let mut output = String::new();

    output.push_str(&label);
    output.push('\n');
    output.push_str(&"=".repeat(label.len()));
    output.push('\n');

    if view.is_empty() {
        output.push_str(&format!("No transactions found for {}.\n", label));
        return output;
    }

    for group in &view.groups {
        output.push('\n');
        output.push_str(&format!(
            "{:<48} {:>12}\n",
            format_day_header(group.day),
            currency.format_signed(group.daily_total())
        ));
        output.push_str(&"-".repeat(62));
        output.push('\n');

        for txn in &group.entries {
            output.push_str(&format_row(txn, &currency));
            output.push('\n');
        }
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Category, Currency, Money, NewTransaction, TransactionId, TransactionKind,
    };
    use crate::reports::{HistoryFilter, MonthWindow, SortBy};
    use chrono::{TimeZone, Utc};

    fn march_view(transactions: &[Transaction]) -> MonthView {
        MonthView::build(
            transactions,
            MonthWindow::containing(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
            HistoryFilter::All,
            SortBy::Date,
        )
    }

    fn txn(cents: i64, kind: TransactionKind, day: u32, description: &str) -> Transaction {
        Transaction::from_new(
            TransactionId::generate(),
            NewTransaction {
                amount: Money::from_cents(cents),
                description: description.to_string(),
                category: Category::FoodAndDining,
                date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
                kind,
            },
        )
    }

    #[test]
    fn test_empty_month_message() {
        let output = format_month_view(&march_view(&[]), Currency::Usd.info());
        assert!(output.contains("March 2024"));
        assert!(output.contains("No transactions found for March 2024."));
    }

    #[test]
    fn test_day_blocks_with_signed_totals() {
        let transactions = vec![
            txn(5000, TransactionKind::Expense, 5, "lunch"),
            txn(200_000, TransactionKind::Income, 1, "salary"),
        ];
        let output = format_month_view(&march_view(&transactions), Currency::Usd.info());

        assert!(output.contains("Tuesday, March 5"));
        assert!(output.contains("Friday, March 1"));
        assert!(output.contains("-$50.00"));
        assert!(output.contains("+$2000.00"));
        // day 5 renders before day 1
        let pos5 = output.find("March 5").unwrap();
        let pos1 = output.find("March 1").unwrap();
        assert!(pos5 < pos1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description here", 10), "a very lo…");
    }
}
