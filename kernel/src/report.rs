// Human-readable reports for the record and summary operations.

use std::fmt;

use crate::log::{Kwh, Reading, DATE_FORMAT};
use crate::stats::UsageStats;

pub const FIRST_ENTRY_NOTICE: &str = "First entry saved. No previous data to compare.";
pub const NO_ENTRIES_NOTICE: &str = "⚠ No entries found in log.";

/// Comparison of a newly recorded reading against the log.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    pub previous: Reading,
    pub current: Reading,
    pub baseline: Reading,
    pub interval: UsageStats,
    pub overall: UsageStats,
}

/// Latest reading with its lifetime trend.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub last: Reading,
    pub overall: UsageStats,
}

impl fmt::Display for RecordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== New Entry ==========")?;
        writeln!(f, "Previous Date : {}", self.previous)?;
        writeln!(f, "Current Date  : {}", self.current)?;
        writeln!(f, "Days Passed   : {} days", self.interval.days)?;
        writeln!(f, "Units Consumed: {} kWh", Kwh(self.interval.units))?;
        writeln!(f, "Interval Avg  : {:.2} kWh/day", self.interval.avg_per_day)?;
        writeln!(
            f,
            "Overall Avg   : {:.2} kWh/day (since {})",
            self.overall.avg_per_day,
            self.baseline.date.format(DATE_FORMAT)
        )?;
        write!(f, "===============================")
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== Latest Reading ==========")?;
        writeln!(f, "Last Date     : {}", self.last)?;
        writeln!(
            f,
            "Since Start   : {} kWh over {} days",
            Kwh(self.overall.units),
            self.overall.days
        )?;
        writeln!(f, "Overall Avg   : {:.2} kWh/day", self.overall.avg_per_day)?;
        write!(f, "===================================")
    }
}
