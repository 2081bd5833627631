// Meter Reading Log
//
// The append-only sequence of (date, kWh) readings and the strict
// decoders shared by stored rows and interactive input.

use chrono::NaiveDate;
use std::fmt;
use std::num::ParseFloatError;

pub mod file;
pub mod store;

pub use file::CsvFileStore;
pub use store::{InMemoryLogStore, ReadingStore};

/// Textual date format used on disk and at the prompt.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A single log record: cumulative kWh on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub date: NaiveDate,
    pub value: f64,
}

impl Reading {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Decode a reading from its textual date and value.
    ///
    /// Surrounding whitespace is ignored. Either field failing to decode
    /// rejects the whole reading.
    pub fn parse(date: &str, value: &str) -> Result<Self, InputError> {
        Ok(Self {
            date: parse_date(date)?,
            value: parse_kwh(value)?,
        })
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} kWh)",
            self.date.format(DATE_FORMAT),
            Kwh(self.value)
        )
    }
}

/// kWh amount rendered in shortest round-trip form, keeping a trailing
/// `.0` on integral values (`100.0`, `55.0`, `0.1`). Exponents carry a
/// sign and at least two digits (`1e+16`, `1.5e-07`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kwh(pub f64);

impl fmt::Display for Kwh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = format!("{:?}", self.0);
        match repr.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&repr),
        }
    }
}

/// Rejected date or reading text.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("invalid date `{input}` (expected DD-MM-YYYY): {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid kWh reading `{input}`: {source}")]
    InvalidReading {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing `{field}` column")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: {source}")]
    Decode {
        row: usize,
        #[source]
        source: InputError,
    },
}

pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| InputError::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

pub fn parse_kwh(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|source| InputError::InvalidReading {
            input: trimmed.to_string(),
            source,
        })
}
