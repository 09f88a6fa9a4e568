use crate::Result;
use crate::metrics::Summary;
use core::fmt::Write;
use serde::{Deserialize, Serialize};

/// What to print for the execution-time statistics when there are no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum EmptySummaryPolicy {
    /// Print `N/A`
    #[default]
    #[serde(rename = "n/a")]
    NotAvailable,

    /// Print `0`
    #[serde(rename = "zero")]
    Zero,
}

pub fn generate<W: Write>(summary: &Summary, empty_policy: EmptySummaryPolicy, writer: &mut W) -> Result<()> {
    let stat = |value: Option<f64>| match (value, empty_policy) {
        (Some(v), _) => v.to_string(),
        (None, EmptySummaryPolicy::NotAvailable) => "N/A".to_string(),
        (None, EmptySummaryPolicy::Zero) => "0".to_string(),
    };

    writeln!(writer, "Total number of test cases executed: {}.", summary.total)?;
    writeln!(writer, "Number of test cases passed: {}.", summary.passed)?;
    writeln!(writer, "Number of test cases failed: {}.", summary.failed)?;
    writeln!(writer, "Average execution time for all test cases: {} seconds.", stat(summary.average))?;
    writeln!(writer, "Minimum execution time among all test cases: {} seconds.", stat(summary.minimum))?;
    writeln!(writer, "Maximum execution time among all test cases: {} seconds.", stat(summary.maximum))?;

    Ok(())
}
