//! Aggregation over transaction collections
//!
//! Pure functions and value types: statistics totals and the
//! month-windowed, filtered, grouped history view.

pub mod history;
pub mod stats;

pub use history::{month_categories, DayGroup, HistoryFilter, MonthView, MonthWindow, SortBy};
pub use stats::{BalanceSign, StatsSummary};
