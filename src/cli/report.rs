//! List and stats commands

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use clap::{Args, ValueEnum};

use crate::config::LedgerPaths;
use crate::display::{format_month_view, format_stats};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::reports::{month_categories, HistoryFilter, MonthView, MonthWindow, SortBy, StatsSummary};
use crate::services::{LedgerService, PreferenceService};
use crate::storage::LocalStore;

/// Sort order for the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Date,
    Amount,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => SortBy::Date,
            SortArg::Amount => SortBy::Amount,
        }
    }
}

/// Arguments for `pocket list`
#[derive(Args)]
pub struct ListArgs {
    /// Month to browse as YYYY-MM; defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Narrow to "expenses", "income", or a category name
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Sort within the month (descending)
    #[arg(short, long, value_enum, default_value = "date")]
    pub sort: SortArg,
}

/// Handle `pocket list`
pub fn handle_list(paths: &LedgerPaths, profile: &str, args: ListArgs) -> LedgerResult<()> {
    let store = Arc::new(LocalStore::new(paths.clone()));

    let mut preferences = PreferenceService::new(Arc::clone(&store), profile);
    preferences.load()?;
    let currency = preferences.current();

    let mut ledger = LedgerService::new(store, profile);
    ledger.load()?;

    let today = Utc::now().date_naive();
    let window = match args.filter_month(today)? {
        Some(window) => window,
        None => MonthWindow::containing(today),
    };

    let filter = match args.filter.as_deref() {
        None => HistoryFilter::All,
        Some(raw) => parse_filter(raw)?,
    };

    let view = MonthView::build(ledger.transactions(), window, filter, args.sort.into());
    print!("{}", format_month_view(&view, currency));

    let categories = month_categories(ledger.transactions(), window);
    if !categories.is_empty() {
        let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
        println!("\nCategories this month: {}", names.join(", "));
    }

    Ok(())
}

impl ListArgs {
    /// Parse `--month`, clamping requests beyond the current month
    fn filter_month(&self, today: NaiveDate) -> LedgerResult<Option<MonthWindow>> {
        let Some(raw) = self.month.as_deref() else {
            return Ok(None);
        };

        let invalid = || {
            LedgerError::validation("month", format!("'{}' is not a YYYY-MM month", raw))
        };

        let (year_str, month_str) = raw.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

        // no browsing future months
        if (year, month) > (today.year(), today.month()) {
            return Ok(Some(MonthWindow::containing(today)));
        }
        Ok(Some(MonthWindow::containing(first_day)))
    }
}

fn parse_filter(raw: &str) -> LedgerResult<HistoryFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(HistoryFilter::All),
        "expense" | "expenses" => Ok(HistoryFilter::Expenses),
        "income" => Ok(HistoryFilter::Income),
        _ => Ok(HistoryFilter::Category(raw.parse::<Category>()?)),
    }
}

/// Handle `pocket stats`
pub fn handle_stats(paths: &LedgerPaths, profile: &str) -> LedgerResult<()> {
    let store = Arc::new(LocalStore::new(paths.clone()));

    let mut preferences = PreferenceService::new(Arc::clone(&store), profile);
    preferences.load()?;
    let currency = preferences.current();

    let mut ledger = LedgerService::new(store, profile);
    ledger.load()?;

    let summary = StatsSummary::compute(ledger.transactions(), Utc::now().date_naive());
    print!("{}", format_stats(&summary, currency));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_args(month: &str) -> ListArgs {
        ListArgs {
            month: Some(month.to_string()),
            filter: None,
            sort: SortArg::Date,
        }
    }

    #[test]
    fn test_month_parsing() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let window = list_args("2024-03").filter_month(today).unwrap().unwrap();
        assert_eq!(window.year(), 2024);
        assert_eq!(window.month(), 3);
    }

    #[test]
    fn test_future_month_clamps_to_current() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let window = list_args("2025-01").filter_month(today).unwrap().unwrap();
        assert_eq!(window.year(), 2024);
        assert_eq!(window.month(), 6);
    }

    #[test]
    fn test_invalid_month_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        assert!(list_args("2024-13").filter_month(today).is_err());
        assert!(list_args("march").filter_month(today).is_err());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(parse_filter("all").unwrap(), HistoryFilter::All);
        assert_eq!(parse_filter("expenses").unwrap(), HistoryFilter::Expenses);
        assert_eq!(parse_filter("income").unwrap(), HistoryFilter::Income);
        assert_eq!(
            parse_filter("Food & Dining").unwrap(),
            HistoryFilter::Category(Category::FoodAndDining)
        );
        assert!(parse_filter("nonsense").is_err());
    }
}
