//! Decoding of serialized test execution records
//!
//! The input is a JSON array of objects shaped like:
//!
//! ```json
//! [{"Name": "t1", "Status": "pass", "ExecutionTime": 1.5, "Timestamp": "2024-01-01T00:00:00"}]
//! ```
//!
//! Keys are matched without regard to ASCII case and unknown keys are ignored. Each object
//! is mapped into a [`TestRecord`](crate::records::TestRecord), which applies its
//! normalization rules as the fields are assigned. Missing keys fall back to the record's
//! sentinels, as does a `null` name or status. A `null` execution time or timestamp, or any
//! value that cannot be converted, fails the whole decode.

mod decode_error;

pub use decode_error::DecodeError;

use crate::records::TestRecord;
use chrono::{DateTime, NaiveDateTime};
use core::fmt;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

const LOG_TARGET: &str = "    decode";

/// The layout accepted for `Timestamp` values, with optional fractional seconds.
pub const TIMESTAMP_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The recognized keys of a record object, matched without regard to ASCII case.
#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Status,
    ExecutionTime,
    Timestamp,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        [
            ("Name", Self::Name),
            ("Status", Self::Status),
            ("ExecutionTime", Self::ExecutionTime),
            ("Timestamp", Self::Timestamp),
        ]
        .into_iter()
        .find_map(|(name, field)| key.eq_ignore_ascii_case(name).then_some(field))
    }
}

/// A record object as it appears in the input, before normalization.
///
/// `name` and `status` accept `null`. `execution_time` and `timestamp` are `None` only when
/// the key is missing, since a `null` there fails to deserialize.
#[derive(Debug, Default)]
struct RawTestRecord {
    name: Option<String>,
    status: Option<String>,
    execution_time: Option<f64>,
    timestamp: Option<String>,
}

impl<'de> Deserialize<'de> for RawTestRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawTestRecordVisitor)
    }
}

struct RawTestRecordVisitor;

impl<'de> Visitor<'de> for RawTestRecordVisitor {
    type Value = RawTestRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a test record object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut raw = RawTestRecord::default();

        // Repeated keys overwrite earlier ones
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Some(Field::Name) => raw.name = map.next_value()?,
                Some(Field::Status) => raw.status = map.next_value()?,
                Some(Field::ExecutionTime) => raw.execution_time = Some(map.next_value()?),
                Some(Field::Timestamp) => raw.timestamp = Some(map.next_value()?),
                None => {
                    let _: IgnoredAny = map.next_value()?;
                }
            }
        }

        Ok(raw)
    }
}

/// Decode a JSON document into records, preserving input order.
///
/// Blank input, the `null` literal, and `[]` all produce an empty collection. A leading
/// byte order mark is ignored.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the document is malformed, is not an array of objects,
/// contains a `null` element, or carries a field value that cannot be converted.
pub fn decode(text: &str) -> Result<Vec<TestRecord>, DecodeError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        log::debug!(target: LOG_TARGET, "Input is blank, no records to decode");
        return Ok(Vec::new());
    }

    let Some(raw_records) = serde_json::from_str::<Option<Vec<Option<RawTestRecord>>>>(text)? else {
        log::debug!(target: LOG_TARGET, "Input is null, no records to decode");
        return Ok(Vec::new());
    };

    let records = raw_records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.ok_or(DecodeError::NullRecord { index }).and_then(|raw| into_record(index, raw)))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(target: LOG_TARGET, "Decoded {} record(s)", records.len());
    Ok(records)
}

fn into_record(index: usize, raw: RawTestRecord) -> Result<TestRecord, DecodeError> {
    let timestamp = match raw.timestamp {
        Some(value) => parse_timestamp(&value).map_err(|source| DecodeError::InvalidTimestamp { index, value, source })?,
        None => NaiveDateTime::MIN,
    };

    if raw.name.is_none() || raw.status.is_none() {
        log::warn!(target: LOG_TARGET, "Record {index} is missing its name or status");
    }

    Ok(TestRecord::new(raw.name, raw.status, raw.execution_time.unwrap_or_default(), timestamp))
}

/// Parse a timestamp in `yyyy-MM-ddTHH:mm:ss` form.
///
/// Fractional seconds are accepted, as are RFC 3339 values with an offset, whose local
/// wall-clock time is kept.
fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    match NaiveDateTime::parse_from_str(text, TIMESTAMP_INPUT_FORMAT) {
        Ok(timestamp) => Ok(timestamp),
        Err(e) => DateTime::parse_from_rfc3339(text).map(|dt| dt.naive_local()).or(Err(e)),
    }
}
