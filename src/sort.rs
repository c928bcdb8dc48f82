// Sort order policy for the task list

use crate::models::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The four orderings the list UI offers.
///
/// Each variant pairs a pure comparison over two tasks with the fixed menu
/// label the UI shows for it. Titles compare case-sensitively; due dates
/// compare lexically (the field is free text, not a parsed date).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    NameAscending,
    NameDescending,
    DateAscending,
    DateDescending,
}

impl SortOrder {
    /// Every order, in menu presentation order
    pub const ALL: [SortOrder; 4] = [
        SortOrder::NameAscending,
        SortOrder::NameDescending,
        SortOrder::DateAscending,
        SortOrder::DateDescending,
    ];

    /// Human-readable label for the sort menu
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::NameAscending => "Sort By Name (A-Z)",
            SortOrder::NameDescending => "Sort By Name (Z-A)",
            SortOrder::DateAscending => "Sort By Date (Earliest first)",
            SortOrder::DateDescending => "Sort By Date (Latest first)",
        }
    }

    /// Total order over two tasks
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortOrder::NameAscending => a.title.cmp(&b.title),
            SortOrder::NameDescending => b.title.cmp(&a.title),
            SortOrder::DateAscending => a.due_date.cmp(&b.due_date),
            SortOrder::DateDescending => b.due_date.cmp(&a.due_date),
        }
    }

    /// Kebab-case token used by the CLI and the config file
    pub fn token(self) -> &'static str {
        match self {
            SortOrder::NameAscending => "name-ascending",
            SortOrder::NameDescending => "name-descending",
            SortOrder::DateAscending => "date-ascending",
            SortOrder::DateDescending => "date-descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Error returned when a sort order token fails to parse
#[derive(Debug, thiserror::Error)]
#[error("unknown sort order: {0}")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-ascending" | "name-asc" => Ok(SortOrder::NameAscending),
            "name-descending" | "name-desc" => Ok(SortOrder::NameDescending),
            "date-ascending" | "date-asc" => Ok(SortOrder::DateAscending),
            "date-descending" | "date-desc" => Ok(SortOrder::DateDescending),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}
