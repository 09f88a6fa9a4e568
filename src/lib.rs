#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for test-result-analysis
//!
//! Reads a JSON array of test execution records, normalizes malformed fields, writes the
//! records to a CSV table, and prints summary statistics.
//!
//! # Module Organization
//!
//! - [`records`]: The normalized record type and the per-run collection
//! - [`decode`]: JSON decoding into records
//! - [`metrics`]: Aggregate statistics over records
//! - [`reports`]: CSV and console rendering
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod decode;
pub mod metrics;
pub mod records;
pub mod reports;

pub use crate::commands::{Host, run};
