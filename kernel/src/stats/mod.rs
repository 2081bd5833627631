// Consumption Statistics
//
// Derives day counts, unit deltas and average daily usage between
// two readings. Pure and side-effect free.

use crate::log::Reading;

/// Usage between two readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageStats {
    /// Whole days between the readings. Negative if they are out of order.
    pub days: i64,

    /// kWh consumed over the span.
    pub units: f64,

    /// kWh per day. Equals `units` when `days <= 0`.
    pub avg_per_day: f64,
}

impl UsageStats {
    /// Both readings fall on the same day, or the later one predates the
    /// earlier.
    pub fn is_degenerate(&self) -> bool {
        self.days <= 0
    }
}

fn usage_between(from: &Reading, to: &Reading) -> UsageStats {
    let days = to.date.signed_duration_since(from.date).num_days();
    let units = to.value - from.value;
    let avg_per_day = if days > 0 { units / days as f64 } else { units };

    UsageStats {
        days,
        units,
        avg_per_day,
    }
}

/// Usage between two consecutive readings.
pub fn interval_stats(previous: &Reading, current: &Reading) -> UsageStats {
    usage_between(previous, current)
}

/// Usage since the baseline reading.
pub fn overall_stats(first: &Reading, last: &Reading) -> UsageStats {
    usage_between(first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(day: u32, month: u32, value: f64) -> Reading {
        Reading::new(NaiveDate::from_ymd_opt(2024, month, day).unwrap(), value)
    }

    #[test]
    fn ten_day_interval() {
        let stats = interval_stats(&reading(1, 1, 100.0), &reading(11, 1, 155.0));

        assert_eq!(stats.days, 10);
        assert_eq!(stats.units, 55.0);
        assert_eq!(stats.avg_per_day, 5.5);
        assert!(!stats.is_degenerate());
    }

    #[test]
    fn same_day_average_is_raw_delta() {
        let stats = interval_stats(&reading(5, 3, 200.0), &reading(5, 3, 212.5));

        assert_eq!(stats.days, 0);
        assert_eq!(stats.avg_per_day, stats.units);
        assert_eq!(stats.units, 12.5);
        assert!(stats.is_degenerate());
    }

    #[test]
    fn spans_month_and_leap_day() {
        let stats = overall_stats(&reading(28, 2, 0.0), &reading(1, 3, 4.0));

        assert_eq!(stats.days, 2);
        assert_eq!(stats.avg_per_day, 2.0);
    }

    #[test]
    fn out_of_order_readings_are_not_rejected() {
        let stats = interval_stats(&reading(11, 1, 155.0), &reading(1, 1, 100.0));

        assert_eq!(stats.days, -10);
        assert_eq!(stats.units, -55.0);
        assert_eq!(stats.avg_per_day, -55.0);
    }

    #[test]
    fn single_reading_has_zero_overall_usage() {
        let only = reading(1, 1, 100.0);
        let stats = overall_stats(&only, &only);

        assert_eq!(
            stats,
            UsageStats {
                days: 0,
                units: 0.0,
                avg_per_day: 0.0,
            }
        );
    }
}
