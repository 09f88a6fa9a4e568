use crate::Result;
use crate::records::TestRecord;
use camino::Utf8Path;
use core::fmt::Write;
use ohno::IntoAppError;
use std::fs;

const LOG_TARGET: &str = "       csv";

/// First line of every exported table.
pub const CSV_HEADER: &str = "Name,Status,ExecutionTime,Timestamp";

/// How timestamps are rendered unless configured otherwise.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render records as a CSV table.
///
/// Fields are written verbatim, without quoting or escaping. A name or status containing
/// a comma or a line break therefore produces a row that does not split into four columns.
pub fn generate<W: Write>(records: &[TestRecord], timestamp_format: &str, writer: &mut W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{}",
            record.name(),
            record.status(),
            record.execution_time(),
            record.timestamp().format(timestamp_format)
        )?;
    }

    Ok(())
}

/// Render records as a CSV table and write it to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the table cannot be rendered or the file cannot be written.
pub fn export(records: &[TestRecord], path: &Utf8Path, timestamp_format: &str) -> Result<()> {
    let mut csv_output = String::new();
    generate(records, timestamp_format, &mut csv_output)?;

    fs::write(path, csv_output).into_app_err_with(|| format!("writing CSV table to '{path}'"))?;
    log::info!(target: LOG_TARGET, "Wrote {} record(s) to '{path}'", records.len());

    Ok(())
}
