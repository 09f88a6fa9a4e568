//! Test execution records and the per-run collection that owns them
//!
//! A [`TestRecord`] normalizes its own fields as they are assigned or read, so every
//! consumer downstream (export, metrics) can rely on its invariants without re-checking.
//! A [`TestResult`] holds the records of one run in input order and drives the
//! decode, export, and summary steps over them.

mod test_record;
mod test_result;

pub use test_record::{DATA_ERROR, TestRecord};
pub use test_result::TestResult;
