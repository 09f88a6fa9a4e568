use crate::records::TestRecord;

/// Counts and execution-time statistics for a collection of records.
///
/// The execution-time statistics are `None` when there are no records, since a mean,
/// minimum, or maximum of nothing is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub average: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl Summary {
    #[must_use]
    pub fn from_records(records: &[TestRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        let mut sum = 0.0;
        for record in records {
            if record.is_passed() {
                summary.passed += 1;
            } else if record.is_failed() {
                summary.failed += 1;
            }

            let time = record.execution_time();
            sum += time;
            summary.minimum = Some(summary.minimum.map_or(time, |min| min.min(time)));
            summary.maximum = Some(summary.maximum.map_or(time, |max| max.max(time)));
        }

        if !records.is_empty() {
            #[expect(clippy::cast_precision_loss, reason = "record counts are far below 2^52")]
            let count = records.len() as f64;
            summary.average = Some(sum / count);
        }

        summary
    }

    /// Records whose status is neither `"pass"` nor `"fail"`.
    ///
    /// Saturates at zero for a hand-built summary whose counts do not add up.
    #[must_use]
    pub const fn unrecognized(&self) -> usize {
        self.total.saturating_sub(self.passed).saturating_sub(self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn record(status: Option<&str>, seconds: f64) -> TestRecord {
        TestRecord::new("t".to_string(), status.map(str::to_string), seconds, NaiveDateTime::MIN)
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.average, None);
        assert_eq!(summary.minimum, None);
        assert_eq!(summary.maximum, None);
    }

    #[test]
    fn test_two_record_example() {
        let summary = Summary::from_records(&[record(Some("pass"), 1.5), record(Some("fail"), -3.0)]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.average, Some(0.75));
        assert_eq!(summary.minimum, Some(0.0));
        assert_eq!(summary.maximum, Some(1.5));
    }

    #[test]
    fn test_unrecognized_statuses_count_only_toward_total() {
        let summary = Summary::from_records(&[
            record(Some("pass"), 1.0),
            record(Some("Pass"), 2.0),
            record(Some("skipped"), 3.0),
            record(None, 4.0),
        ]);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.unrecognized(), 3);
        assert_eq!(summary.average, Some(2.5));
        assert_eq!(summary.minimum, Some(1.0));
        assert_eq!(summary.maximum, Some(4.0));
    }

    #[test]
    fn test_unrecognized_saturates_on_inconsistent_counts() {
        let summary = Summary {
            total: 1,
            passed: 2,
            failed: 3,
            ..Summary::default()
        };
        assert_eq!(summary.unrecognized(), 0);
    }

    #[test]
    fn test_single_record() {
        let summary = Summary::from_records(&[record(Some("fail"), 0.25)]);
        assert_eq!(summary.average, Some(0.25));
        assert_eq!(summary.minimum, Some(0.25));
        assert_eq!(summary.maximum, Some(0.25));
    }
}
