//! Command-line interface and orchestration
//!
//! # Execution Flow
//!
//! The `run` function parses the command line with clap and hands the resulting
//! arguments to `analyze`, which drives the pipeline strictly in order:
//!
//! 1. Check the positional arity and that the input file exists
//! 2. Load the optional configuration file
//! 3. Read and decode the input records
//! 4. Export the CSV table
//! 5. Print the summary
//!
//! A failing stage stops the run; nothing after it executes. All output goes through a
//! [`Host`] so the whole flow can be driven from tests with in-memory buffers.

mod analyze;
mod common;
mod config;
mod host;
mod run;

pub use analyze::{AnalyzeArgs, USAGE, analyze};
pub use common::{LogLevel, init_logging};
pub use config::{Config, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use run::run;
