//! Timesheet file naming convention
//!
//! The first timesheet for a date is `YYYY-MM-DD.md`; later ones for the
//! same date get a numeric suffix starting at 2 (`YYYY-MM-DD-2.md`).

use chrono::NaiveDate;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

const EXTENSION: &str = ".md";

fn filename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:-([1-9]\d*))?\.md$")
            .expect("timesheet filename pattern is valid")
    })
}

/// Name of a single timesheet file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimesheetName {
    pub date: NaiveDate,
    /// 1 for the unsuffixed file, 2.. for collisions
    pub sequence: u32,
}

impl TimesheetName {
    pub fn new(date: NaiveDate, sequence: u32) -> Self {
        TimesheetName {
            date,
            sequence: sequence.max(1),
        }
    }

    /// First name for a date
    pub fn first(date: NaiveDate) -> Self {
        TimesheetName::new(date, 1)
    }

    /// Next name for the same date
    pub fn next(&self) -> Self {
        TimesheetName::new(self.date, self.sequence + 1)
    }

    /// Parse a filename; returns None for anything that is not a timesheet
    pub fn parse(filename: &str) -> Option<Self> {
        let caps = filename_pattern().captures(filename)?;
        let date = NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok()?;
        let sequence = match caps.get(2) {
            Some(m) => m.as_str().parse::<u32>().ok()?,
            None => 1,
        };
        // "-1" would alias the unsuffixed name
        if sequence == 1 && caps.get(2).is_some() {
            return None;
        }
        Some(TimesheetName { date, sequence })
    }

    /// Filename without extension, e.g. `2025-01-17-2`
    pub fn stem(&self) -> String {
        if self.sequence <= 1 {
            self.date.format("%Y-%m-%d").to_string()
        } else {
            format!("{}-{}", self.date.format("%Y-%m-%d"), self.sequence)
        }
    }

    pub fn filename(&self) -> String {
        format!("{}{}", self.stem(), EXTENSION)
    }

    /// Human label shown in the selector, e.g. `17 January 2025 (2)`
    pub fn label(&self) -> String {
        let base = self.date.format("%-d %B %Y").to_string();
        if self.sequence <= 1 {
            base
        } else {
            format!("{} ({})", base, self.sequence)
        }
    }
}

impl Ord for TimesheetName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for TimesheetName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
