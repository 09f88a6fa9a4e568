//! Report generation for analyzed test records
//!
//! # Implementation Model
//!
//! Two generators are provided, each writing into a `core::fmt::Write` sink so they can
//! be exercised without touching the filesystem or the terminal:
//! - **CSV**: the record table, one row per record in input order
//! - **Console**: the six-line summary of a [`Summary`](crate::metrics::Summary)
//!
//! [`export_csv`] wraps the CSV generator with the file write, rendering the whole table
//! in memory first so a formatting failure never leaves a half-written file behind.

mod console;
mod csv;

pub use console::{EmptySummaryPolicy, generate as generate_console};
pub use csv::{CSV_HEADER, DEFAULT_TIMESTAMP_FORMAT, export as export_csv, generate as generate_csv};
