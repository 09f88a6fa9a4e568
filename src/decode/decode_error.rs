use core::fmt;

/// Reasons a serialized record collection could not be decoded.
///
/// Any of these aborts the run; no partially decoded collection is ever returned.
#[derive(Debug)]
pub enum DecodeError {
    /// The input is not valid JSON, is not an array of objects, or a field has the wrong type.
    Syntax(serde_json::Error),

    /// The array contains a `null` where a record object was expected.
    NullRecord { index: usize },

    /// A record's `Timestamp` is a string that is not a recognized date-time.
    InvalidTimestamp {
        index: usize,
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "invalid test record data: {e}"),
            Self::NullRecord { index } => write!(f, "record {index} is null"),
            Self::InvalidTimestamp { index, value, source } => {
                write!(f, "record {index} has an invalid timestamp '{value}': {source}")
            }
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::NullRecord { .. } => None,
            Self::InvalidTimestamp { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Syntax(e)
    }
}
