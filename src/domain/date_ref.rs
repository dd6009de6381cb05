//! Date reference parsing and resolution

use crate::error::{Result, TimesheetError};
use chrono::{Duration, NaiveDate};

/// Which day a new timesheet covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Specific date (YYYY-MM-DD)
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateReference::SpecificDate)
                .map_err(|_| TimesheetError::InvalidDate(input.to_string())),
        }
    }

    /// Resolve this reference against the given current date
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::SpecificDate(date) => *date,
        }
    }
}
