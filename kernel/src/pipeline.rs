// Entry Pipelines
//
// The two operations exposed to users:
// record:  load → compare → append
// summary: load → overall trend

use log::{debug, info, warn};

use crate::log::{LogError, Reading, ReadingStore};
use crate::report::{RecordReport, SummaryReport};
use crate::stats::{interval_stats, overall_stats, UsageStats};

/// What recording a reading produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The log was empty; nothing to compare against.
    FirstEntry,

    /// The reading was compared against the previous and baseline readings.
    Compared(RecordReport),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("log store error: {0}")]
    Log(#[from] LogError),
}

fn warn_if_regressed(label: &str, stats: &UsageStats) {
    if stats.is_degenerate() {
        if stats.days < 0 {
            warn!("{label}: reading is dated {} days before its predecessor", -stats.days);
        } else {
            debug!("{label}: same-day readings, average is the raw delta");
        }
    }
    if stats.units < 0.0 {
        warn!("{label}: meter went backwards by {} kWh", -stats.units);
    }
}

/// Record a new reading and report how it compares to the log.
///
/// The comparison is computed against the log as it was before the
/// append, but the append happens before the report is returned, so a
/// failed append yields no report. Ordering is not validated.
pub fn record_reading<S: ReadingStore>(
    store: &mut S,
    reading: Reading,
) -> Result<RecordOutcome, PipelineError> {
    let readings = store.read_all()?;

    let outcome = match (readings.first(), readings.last()) {
        (Some(baseline), Some(previous)) => {
            let interval = interval_stats(previous, &reading);
            let overall = overall_stats(baseline, &reading);
            warn_if_regressed("interval", &interval);

            RecordOutcome::Compared(RecordReport {
                previous: *previous,
                current: reading,
                baseline: *baseline,
                interval,
                overall,
            })
        }
        _ => RecordOutcome::FirstEntry,
    };

    store.append(&reading)?;
    info!("recorded {reading} ({} readings in log)", readings.len() + 1);

    Ok(outcome)
}

/// Summarise the most recent reading against the baseline.
///
/// Returns `None` for an empty log.
pub fn latest_summary<S: ReadingStore>(store: &S) -> Result<Option<SummaryReport>, PipelineError> {
    let readings = store.read_all()?;

    let (Some(first), Some(last)) = (readings.first(), readings.last()) else {
        return Ok(None);
    };

    let overall = overall_stats(first, last);
    warn_if_regressed("overall", &overall);

    Ok(Some(SummaryReport {
        last: *last,
        overall,
    }))
}
