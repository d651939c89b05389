//! Transaction categories
//!
//! A fixed closed set of ten values. This is configuration data rather
//! than an extensible axis: adding a value touches only this file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// The closed category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Income")]
    Income,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::Income,
        Category::Other,
    ];

    /// The display name (also the persisted form)
    pub const fn name(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                LedgerError::validation(
                    "category",
                    format!(
                        "Unknown category: '{}'. Run 'pocket add --help' for the list",
                        needle
                    ),
                )
            })
    }
}
