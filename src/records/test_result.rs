use super::TestRecord;
use crate::Result;
use crate::decode::{DecodeError, decode};
use crate::metrics::Summary;
use crate::reports::export_csv;
use camino::Utf8Path;

/// The ordered records of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct TestResult {
    records: Vec<TestRecord>,
}

impl TestResult {
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    #[must_use]
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Replace the current records with those decoded from `json`.
    ///
    /// On failure the previous records are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `json` cannot be decoded.
    pub fn parse_json(&mut self, json: &str) -> Result<(), DecodeError> {
        self.records = decode(json)?;
        Ok(())
    }

    /// Write the records to `path` as a CSV table, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export_to_csv(&self, path: &Utf8Path, timestamp_format: &str) -> Result<()> {
        export_csv(&self.records, path, timestamp_format)
    }

    /// Aggregate statistics over the records.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }
}

impl From<Vec<TestRecord>> for TestResult {
    fn from(records: Vec<TestRecord>) -> Self {
        Self { records }
    }
}
