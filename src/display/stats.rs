//! Statistics display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CurrencyInfo;
use crate::reports::{BalanceSign, StatsSummary};

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Stat")]
    stat: &'static str,
    #[tabled(rename = "Overall")]
    overall: String,
    #[tabled(rename = "This Month")]
    this_month: String,
}

/// Format the stats overview as a table with a balance footnote
pub fn format_stats(summary: &StatsSummary, currency: CurrencyInfo) -> String {
    let rows = vec![
        StatRow {
            stat: "Balance",
            overall: currency.format(summary.balance),
            this_month: String::new(),
        },
        StatRow {
            stat: "Income",
            overall: currency.format(summary.total_income),
            this_month: currency.format(summary.monthly_income),
        },
        StatRow {
            stat: "Expenses",
            overall: currency.format(summary.total_expenses),
            this_month: currency.format(summary.monthly_expenses),
        },
        StatRow {
            stat: "Transactions",
            overall: summary.transaction_count.to_string(),
            this_month: String::new(),
        },
    ];

    let table = Table::new(rows).with(Style::sharp()).to_string();

    let balance_note = match summary.balance_sign() {
        BalanceSign::Positive => "Positive balance",
        BalanceSign::Negative => "Negative balance",
        BalanceSign::Zero => "Balanced",
    };

    format!(
        "{}\n{} · {} expenses, {} income\n",
        table, balance_note, summary.expense_count, summary.income_count
    )
}
