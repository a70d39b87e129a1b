//! Range selection controlling series length and label cadence

use serde::{Deserialize, Serialize};

/// The user-chosen span for both the usage and cost series
///
/// The selection determines how many points each series holds and how
/// the labels are spaced: 30 consecutive days or 12 consecutive months,
/// always ending at "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RangeSelection {
    /// Last 30 days, one point per day
    #[default]
    ThirtyDays,
    /// Last 12 months, one point per month
    TwelveMonths,
}

impl RangeSelection {
    /// Number of points a series holds under this selection
    pub fn point_count(&self) -> usize {
        match self {
            RangeSelection::ThirtyDays => 30,
            RangeSelection::TwelveMonths => 12,
        }
    }

    /// Label shown in the range selector
    pub fn display_name(&self) -> &'static str {
        match self {
            RangeSelection::ThirtyDays => "Last 30 Days",
            RangeSelection::TwelveMonths => "Last 12 Months",
        }
    }

    /// All selectable ranges, in selector order
    pub fn all() -> [RangeSelection; 2] {
        [RangeSelection::ThirtyDays, RangeSelection::TwelveMonths]
    }

    /// Selector index, matching the order of `all()`
    pub fn index(&self) -> usize {
        match self {
            RangeSelection::ThirtyDays => 0,
            RangeSelection::TwelveMonths => 1,
        }
    }

    /// Range for a selector index, defaulting to 30 days for out-of-range input
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => RangeSelection::TwelveMonths,
            _ => RangeSelection::ThirtyDays,
        }
    }
}
