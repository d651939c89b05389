//! Statistics summary
//!
//! Overall and current-month totals over a snapshot of the transaction
//! collection. Pure computation: no mutation, no I/O.

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, Transaction};

/// Display classification of a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSign {
    Positive,
    Negative,
    Zero,
}

/// Aggregated totals over a transaction collection
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts (as a magnitude)
    pub total_expenses: Money,
    /// `total_income - total_expenses`, exactly
    pub balance: Money,
    /// Income restricted to the reference date's calendar month
    pub monthly_income: Money,
    /// Expenses restricted to the reference date's calendar month
    pub monthly_expenses: Money,
    /// Total number of transactions
    pub transaction_count: usize,
    /// Number of expense transactions
    pub expense_count: usize,
    /// Number of income transactions
    pub income_count: usize,
}

impl StatsSummary {
    /// Compute the summary for a collection, with monthly subtotals taken
    /// over the calendar month containing `reference`
    pub fn compute(transactions: &[Transaction], reference: NaiveDate) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut monthly_income = Money::zero();
        let mut monthly_expenses = Money::zero();
        let mut expense_count = 0;
        let mut income_count = 0;

        for txn in transactions {
            let day = txn.day();
            let in_month =
                day.month() == reference.month() && day.year() == reference.year();

            if txn.is_income() {
                income_count += 1;
                total_income += txn.amount;
                if in_month {
                    monthly_income += txn.amount;
                }
            } else {
                expense_count += 1;
                total_expenses += txn.amount;
                if in_month {
                    monthly_expenses += txn.amount;
                }
            }
        }

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            monthly_income,
            monthly_expenses,
            transaction_count: transactions.len(),
            expense_count,
            income_count,
        }
    }

    /// Classification of the overall balance for display purposes
    pub fn balance_sign(&self) -> BalanceSign {
        if self.balance.is_positive() {
            BalanceSign::Positive
        } else if self.balance.is_negative() {
            BalanceSign::Negative
        } else {
            BalanceSign::Zero
        }
    }
}
