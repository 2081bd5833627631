// Reading Log Storage Abstraction
//
// Defines the durability contract for the reading log.

use super::{LogError, Reading};

/// Storage backend for the reading log.
///
/// Properties required from implementations:
/// - Append-only
/// - Ordered by insertion
///
/// Implementations MUST NOT reorder, edit, or drop stored readings.
/// Chronological order is assumed, not checked.
pub trait ReadingStore {
    /// Load all readings in insertion order.
    ///
    /// A store that has never been written to yields an empty log.
    fn read_all(&self) -> Result<Vec<Reading>, LogError>;

    /// Prepare the backing storage (e.g. write a header).
    ///
    /// Must be idempotent.
    fn init(&mut self) -> Result<(), LogError>;

    /// Append a reading after all existing ones.
    fn append(&mut self, reading: &Reading) -> Result<(), LogError>;
}

/// Volatile store, used for dry runs and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLogStore {
    readings: Vec<Reading>,
    initialized: bool,
}

impl InMemoryLogStore {
    /// Seed a store with existing readings.
    pub fn with_readings(readings: Vec<Reading>) -> Self {
        Self {
            readings,
            initialized: true,
        }
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl ReadingStore for InMemoryLogStore {
    fn read_all(&self) -> Result<Vec<Reading>, LogError> {
        Ok(self.readings.clone())
    }

    fn init(&mut self) -> Result<(), LogError> {
        self.initialized = true;
        Ok(())
    }

    fn append(&mut self, reading: &Reading) -> Result<(), LogError> {
        self.init()?;
        self.readings.push(*reading);
        Ok(())
    }
}
