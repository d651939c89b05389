//! Month-by-month transaction history
//!
//! The browsable history is scoped to one calendar month at a time.
//! Within the window, transactions are filtered, stably sorted, and
//! partitioned into day groups with per-day totals. Pure computation
//! over a snapshot: no mutation, no I/O.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Money, Transaction};

/// The calendar month currently selected for browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    year: i32,
    /// 1-12
    month: u32,
}

impl MonthWindow {
    /// The window containing a given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move back one month, rolling the year at the January boundary
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Move forward one month, rolling the year at the December boundary
    ///
    /// Forward navigation stops at the month containing `today`: calling
    /// this on the current window returns it unchanged.
    pub fn next(self, today: NaiveDate) -> Self {
        if self.is_current(today) {
            return self;
        }
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Whether this window is the month containing `today`
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.year == today.year() && self.month == today.month()
    }

    /// Whether a date falls inside this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.year == date.year() && self.month == date.month()
    }

    /// Header label, e.g. "March 2024"
    pub fn label(&self) -> String {
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        format!("{} {}", MONTHS[(self.month - 1) as usize], self.year)
    }
}

/// Selector narrowing the month's transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Expenses,
    Income,
    Category(Category),
}

impl HistoryFilter {
    fn matches(&self, txn: &Transaction) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Expenses => txn.is_expense(),
            HistoryFilter::Income => txn.is_income(),
            HistoryFilter::Category(category) => txn.category == *category,
        }
    }
}

/// Sort key applied to the filtered set before grouping
///
/// Both orders are descending and stable (ties keep their prior order),
/// so within-day ordering follows the chosen key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Date,
    Amount,
}

/// One calendar day's transactions within the month view
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub entries: Vec<Transaction>,
}

impl DayGroup {
    /// Net movement for the day: income minus expenses, signed
    pub fn daily_total(&self) -> Money {
        self.entries.iter().map(|t| t.signed_amount()).sum()
    }

    /// Display class for the daily total (zero counts as positive)
    pub fn is_positive(&self) -> bool {
        !self.daily_total().is_negative()
    }
}

/// The filtered, sorted, day-grouped view of one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub window: MonthWindow,
    /// Day groups, always ordered by date descending
    pub groups: Vec<DayGroup>,
}

impl MonthView {
    /// Build the view for a window over a snapshot of the collection
    pub fn build(
        transactions: &[Transaction],
        window: MonthWindow,
        filter: HistoryFilter,
        sort_by: SortBy,
    ) -> Self {
        let mut selected: Vec<Transaction> = transactions
            .iter()
            .filter(|t| window.contains(t.day()) && filter.matches(t))
            .cloned()
            .collect();

        match sort_by {
            SortBy::Date => selected.sort_by(|a, b| b.date.cmp(&a.date)),
            SortBy::Amount => selected.sort_by(|a, b| b.amount.cmp(&a.amount)),
        }

        // Partition the sorted set by day; push order preserves the sort
        // within each group, and reversing the map iteration gives the
        // date-descending group order
        let mut by_day: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
        for txn in selected {
            by_day.entry(txn.day()).or_default().push(txn);
        }

        let groups = by_day
            .into_iter()
            .rev()
            .map(|(day, entries)| DayGroup { day, entries })
            .collect();

        Self { window, groups }
    }

    /// The explicit "no transactions this month" state: true when the
    /// window has no transactions or the filter matched none
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of transactions across all groups
    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// Distinct categories present in the window's transactions (for the
/// filter UI); lifetime categories outside the window do not appear
pub fn month_categories(transactions: &[Transaction], window: MonthWindow) -> Vec<Category> {
    let mut present: Vec<Category> = transactions
        .iter()
        .filter(|t| window.contains(t.day()))
        .map(|t| t.category)
        .collect();
    present.sort();
    present.dedup();
    present
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn txn(
        amount_cents: i64,
        kind: TransactionKind,
        category: Category,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    ) -> Transaction {
        Transaction::from_new(
            TransactionId::generate(),
            NewTransaction {
                amount: Money::from_cents(amount_cents),
                description: format!("txn-{}-{}", day, hour),
                category,
                date: Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap(),
                kind,
            },
        )
    }

    fn march_window() -> MonthWindow {
        MonthWindow::containing(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn test_window_navigation_roundtrip() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let window = MonthWindow::containing(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert_eq!(window.previous().next(today), window);
    }

    #[test]
    fn test_window_year_rollover() {
        let january = MonthWindow::containing(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        let december = january.previous();

        assert_eq!(december.year(), 2023);
        assert_eq!(december.month(), 12);

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(december.next(today), january);
    }

    #[test]
    fn test_forward_navigation_clamped_at_current_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let current = MonthWindow::containing(today);

        assert_eq!(current.next(today), current);
        assert!(current.is_current(today));
    }

    #[test]
    fn test_window_label() {
        assert_eq!(march_window().label(), "March 2024");
        let jan = MonthWindow::containing(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(jan.label(), "January 2025");
    }

    #[test]
    fn test_view_scopes_to_month() {
        let transactions = vec![
            txn(1000, TransactionKind::Expense, Category::Other, 2024, 3, 5, 9),
            txn(2000, TransactionKind::Expense, Category::Other, 2024, 2, 5, 9),
        ];

        let view = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::All,
            SortBy::Date,
        );

        assert_eq!(view.transaction_count(), 1);
        assert_eq!(view.groups[0].entries[0].amount.cents(), 1000);
    }

    #[test]
    fn test_groups_ordered_date_descending() {
        let transactions = vec![
            txn(5000, TransactionKind::Expense, Category::FoodAndDining, 2024, 3, 5, 12),
            txn(200_000, TransactionKind::Income, Category::Income, 2024, 3, 1, 9),
        ];

        let view = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::All,
            SortBy::Date,
        );

        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].day, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(view.groups[1].day, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_group_order_is_date_descending_even_when_sorting_by_amount() {
        let transactions = vec![
            txn(100, TransactionKind::Expense, Category::Other, 2024, 3, 2, 9),
            txn(900_000, TransactionKind::Expense, Category::Other, 2024, 3, 1, 9),
        ];

        let view = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::All,
            SortBy::Amount,
        );

        // the big amount lives on the earlier day; day order still wins
        assert_eq!(view.groups[0].day, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(view.groups[1].day, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_within_day_order_follows_sort_key() {
        let transactions = vec![
            txn(100, TransactionKind::Expense, Category::Other, 2024, 3, 5, 8),
            txn(300, TransactionKind::Expense, Category::Other, 2024, 3, 5, 12),
            txn(200, TransactionKind::Expense, Category::Other, 2024, 3, 5, 18),
        ];

        let by_amount = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::All,
            SortBy::Amount,
        );
        let amounts: Vec<i64> = by_amount.groups[0]
            .entries
            .iter()
            .map(|t| t.amount.cents())
            .collect();
        assert_eq!(amounts, vec![300, 200, 100]);

        let by_date = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::All,
            SortBy::Date,
        );
        let hours: Vec<u32> = by_date.groups[0]
            .entries
            .iter()
            .map(|t| {
                use chrono::Timelike;
                t.date.hour()
            })
            .collect();
        assert_eq!(hours, vec![18, 12, 8]);
    }

    #[test]
    fn test_stability_across_reruns() {
        let transactions = vec![
            txn(500, TransactionKind::Expense, Category::Other, 2024, 3, 5, 9),
            txn(500, TransactionKind::Expense, Category::Shopping, 2024, 3, 5, 9),
            txn(500, TransactionKind::Income, Category::Income, 2024, 3, 2, 9),
        ];

        let first = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::All,
            SortBy::Amount,
        );
        let second = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::All,
            SortBy::Amount,
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_filters() {
        let transactions = vec![
            txn(1000, TransactionKind::Expense, Category::FoodAndDining, 2024, 3, 5, 9),
            txn(2000, TransactionKind::Income, Category::Income, 2024, 3, 5, 10),
        ];

        let expenses = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::Expenses,
            SortBy::Date,
        );
        assert_eq!(expenses.transaction_count(), 1);
        assert!(expenses.groups[0].entries[0].is_expense());

        let income = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::Income,
            SortBy::Date,
        );
        assert_eq!(income.transaction_count(), 1);
        assert!(income.groups[0].entries[0].is_income());

        let food = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::Category(Category::FoodAndDining),
            SortBy::Date,
        );
        assert_eq!(food.transaction_count(), 1);

        let travel = MonthView::build(
            &transactions,
            march_window(),
            HistoryFilter::Category(Category::Travel),
            SortBy::Date,
        );
        assert!(travel.is_empty());
    }

    #[test]
    fn test_empty_states() {
        let view = MonthView::build(&[], march_window(), HistoryFilter::All, SortBy::Date);
        assert!(view.is_empty());
        assert_eq!(view.transaction_count(), 0);
    }

    #[test]
    fn test_daily_total_sign() {
        let surplus = DayGroup {
            day: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            entries: vec![
                txn(2000, TransactionKind::Income, Category::Income, 2024, 3, 5, 9),
                txn(500, TransactionKind::Expense, Category::Other, 2024, 3, 5, 10),
            ],
        };
        assert_eq!(surplus.daily_total().cents(), 1500);
        assert!(surplus.is_positive());

        let deficit = DayGroup {
            day: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            entries: vec![
                txn(2000, TransactionKind::Expense, Category::Other, 2024, 3, 5, 9),
                txn(500, TransactionKind::Income, Category::Income, 2024, 3, 5, 10),
            ],
        };
        assert_eq!(deficit.daily_total().cents(), -1500);
        assert!(!deficit.is_positive());

        let even = DayGroup {
            day: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            entries: vec![
                txn(500, TransactionKind::Expense, Category::Other, 2024, 3, 5, 9),
                txn(500, TransactionKind::Income, Category::Income, 2024, 3, 5, 10),
            ],
        };
        assert!(even.daily_total().is_zero());
        assert!(even.is_positive());
    }

    #[test]
    fn test_month_categories_are_window_scoped_and_distinct() {
        let transactions = vec![
            txn(100, TransactionKind::Expense, Category::FoodAndDining, 2024, 3, 5, 9),
            txn(200, TransactionKind::Expense, Category::FoodAndDining, 2024, 3, 6, 9),
            txn(300, TransactionKind::Income, Category::Income, 2024, 3, 1, 9),
            // previous month: excluded
            txn(400, TransactionKind::Expense, Category::Travel, 2024, 2, 10, 9),
        ];

        let categories = month_categories(&transactions, march_window());

        assert_eq!(categories.len(), 2);
        assert!(categories.contains(&Category::FoodAndDining));
        assert!(categories.contains(&Category::Income));
        assert!(!categories.contains(&Category::Travel));
    }
}
