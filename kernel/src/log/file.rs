// CSV File Store
//
// Persists the reading log as a delimited text file:
//
//     date,kwh
//     01-01-2024,100.0
//     11-01-2024,155.0
//
// Rows are decoded positionally; the first row is always the header.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::store::ReadingStore;
use super::{Kwh, LogError, Reading, DATE_FORMAT};
use crate::config::StoreConfig;

const HEADER: [&str; 2] = ["date", "kwh"];

/// File-backed reading log.
///
/// No locking is performed: concurrent writers may interleave rows.
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.log_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_append(&self) -> Result<File, LogError> {
        Ok(OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?)
    }
}

impl ReadingStore for CsvFileStore {
    fn read_all(&self) -> Result<Vec<Reading>, LogError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, log is empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut readings = Vec::new();
        for (idx, record) in rdr.records().enumerate() {
            let record = record?;
            let row = idx + 1;

            let date = record
                .get(0)
                .ok_or(LogError::MissingField { row, field: "date" })?;
            let kwh = record
                .get(1)
                .ok_or(LogError::MissingField { row, field: "kwh" })?;

            let reading =
                Reading::parse(date, kwh).map_err(|source| LogError::Decode { row, source })?;
            readings.push(reading);
        }

        debug!(
            "loaded {} readings from {}",
            readings.len(),
            self.path.display()
        );
        Ok(readings)
    }

    fn init(&mut self) -> Result<(), LogError> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        if !needs_header {
            return Ok(());
        }

        debug!("writing header to {}", self.path.display());
        let mut wtr = csv::Writer::from_writer(self.open_for_append()?);
        wtr.write_record(HEADER)?;
        wtr.flush()?;
        Ok(())
    }

    fn append(&mut self, reading: &Reading) -> Result<(), LogError> {
        self.init()?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(self.open_for_append()?);
        wtr.write_record([
            reading.date.format(DATE_FORMAT).to_string(),
            Kwh(reading.value).to_string(),
        ])?;
        wtr.flush()?;

        debug!("appended {} to {}", reading, self.path.display());
        Ok(())
    }
}
