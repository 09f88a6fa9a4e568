use chrono::NaiveDateTime;

/// Text substituted when a record's name or status is absent.
pub const DATA_ERROR: &str = "DataError";

/// One test-case execution.
///
/// The string fields and the numeric field normalize differently:
///
/// - `name` and `status` are stored exactly as assigned, including absence. Reading an
///   absent value yields [`DATA_ERROR`], but the stored state stays absent.
/// - `execution_time` is clamped to be non-negative when it is assigned, so the stored
///   value itself is always `>= 0`.
/// - `timestamp` is stored as given. Records without one carry [`NaiveDateTime::MIN`].
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    name: Option<String>,
    status: Option<String>,
    execution_time: f64,
    timestamp: NaiveDateTime,
}

impl TestRecord {
    /// Create a record, applying the same normalization as the individual setters.
    #[must_use]
    pub fn new(
        name: impl Into<Option<String>>,
        status: impl Into<Option<String>>,
        execution_time: f64,
        timestamp: NaiveDateTime,
    ) -> Self {
        let mut record = Self::default();
        record.set_name(name);
        record.set_status(status);
        record.set_execution_time(execution_time);
        record.set_timestamp(timestamp);
        record
    }

    /// The test name, or [`DATA_ERROR`] if none was assigned.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DATA_ERROR)
    }

    /// The name exactly as stored.
    #[must_use]
    pub fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<Option<String>>) {
        self.name = name.into();
    }

    /// The outcome, or [`DATA_ERROR`] if none was assigned.
    ///
    /// Only `"pass"` and `"fail"` are meaningful, but any text is kept.
    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DATA_ERROR)
    }

    /// The status exactly as stored.
    #[must_use]
    pub fn raw_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<Option<String>>) {
        self.status = status.into();
    }

    /// Execution time in seconds, never negative.
    #[must_use]
    pub const fn execution_time(&self) -> f64 {
        self.execution_time
    }

    /// Assign the execution time, storing `0` for anything that is not strictly positive.
    ///
    /// NaN and negative zero also collapse to `0`.
    pub fn set_execution_time(&mut self, seconds: f64) {
        self.execution_time = if seconds > 0.0 { seconds } else { 0.0 };
    }

    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub const fn set_timestamp(&mut self, timestamp: NaiveDateTime) {
        self.timestamp = timestamp;
    }

    /// Whether the stored status is exactly `"pass"`.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status() == "pass"
    }

    /// Whether the stored status is exactly `"fail"`.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status() == "fail"
    }
}

impl Default for TestRecord {
    fn default() -> Self {
        Self {
            name: None,
            status: None,
            execution_time: 0.0,
            timestamp: NaiveDateTime::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_default_record_reads_sentinels() {
        let record = TestRecord::default();
        assert_eq!(record.name(), DATA_ERROR);
        assert_eq!(record.status(), DATA_ERROR);
        assert!(record.execution_time().abs() < f64::EPSILON);
        assert_eq!(record.timestamp(), NaiveDateTime::MIN);
    }

    #[test]
    fn test_absent_name_reads_data_error_but_stays_absent() {
        let mut record = TestRecord::new("t1".to_string(), "pass".to_string(), 1.0, ts(0, 0, 0));
        record.set_name(None);
        assert_eq!(record.name(), DATA_ERROR);
        assert_eq!(record.raw_name(), None);

        record.set_status(None);
        assert_eq!(record.status(), DATA_ERROR);
        assert_eq!(record.raw_status(), None);
    }

    #[test]
    fn test_literal_data_error_is_distinct_from_absent() {
        let record = TestRecord::new(DATA_ERROR.to_string(), None, 1.0, ts(0, 0, 0));
        assert_eq!(record.raw_name(), Some(DATA_ERROR));
        assert_eq!(record.raw_status(), None);
    }

    #[test]
    fn test_execution_time_is_clamped_on_every_assignment() {
        let mut record = TestRecord::new("t".to_string(), "pass".to_string(), -3.0, ts(0, 0, 0));
        assert!(record.execution_time().abs() < f64::EPSILON);

        record.set_execution_time(2.5);
        assert!((record.execution_time() - 2.5).abs() < f64::EPSILON);

        record.set_execution_time(-0.001);
        assert!(record.execution_time().abs() < f64::EPSILON);
    }

    #[test]
    fn test_execution_time_floor_holds_for_edge_values() {
        for value in [f64::NEG_INFINITY, f64::MIN, -1.0, -0.0, 0.0, f64::NAN] {
            let mut record = TestRecord::default();
            record.set_execution_time(value);
            assert!(record.execution_time() >= 0.0, "{value} was stored as {}", record.execution_time());
            assert!(record.execution_time().is_sign_positive());
        }

        let mut record = TestRecord::default();
        record.set_execution_time(f64::INFINITY);
        assert!(record.execution_time().is_infinite());
    }

    #[test]
    fn test_status_matching_is_case_sensitive() {
        let passed = TestRecord::new("a".to_string(), "pass".to_string(), 0.0, ts(0, 0, 0));
        let shouting = TestRecord::new("b".to_string(), "PASS".to_string(), 0.0, ts(0, 0, 0));
        let failed = TestRecord::new("c".to_string(), "fail".to_string(), 0.0, ts(0, 0, 0));
        let skipped = TestRecord::new("d".to_string(), "skip".to_string(), 0.0, ts(0, 0, 0));

        assert!(passed.is_passed() && !passed.is_failed());
        assert!(!shouting.is_passed() && !shouting.is_failed());
        assert!(failed.is_failed() && !failed.is_passed());
        assert!(!skipped.is_passed() && !skipped.is_failed());
    }

    #[test]
    fn test_timestamp_is_stored_verbatim() {
        let mut record = TestRecord::default();
        record.set_timestamp(ts(12, 34, 56));
        assert_eq!(record.timestamp(), ts(12, 34, 56));
    }
}
