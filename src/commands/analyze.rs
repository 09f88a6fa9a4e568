use super::Host;
use super::common::LogLevel;
use super::config::Config;
use crate::Result;
use crate::records::TestResult;
use crate::reports::generate_console;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "   analyze";

/// Printed when the positional arguments are not exactly an input and an output path.
pub const USAGE: &str = "Usage: testResultAnalysis <inputJsonFilePath> <outputCsvFilePath>";

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of test execution records
    #[arg(value_name = "inputJsonFilePath")]
    pub input: Option<Utf8PathBuf>,

    /// CSV file to write the normalized records to (replaced if it exists)
    #[arg(value_name = "outputCsvFilePath")]
    pub output: Option<Utf8PathBuf>,

    /// Surplus positional arguments, kept only so the arity check can reject them
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    pub extra: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Decode the input records, export them as CSV, and print their summary.
///
/// Missing or extra paths and a nonexistent input file are reported on the output
/// stream and are not errors. Any later failure stops the run at that stage: a decode
/// failure leaves the output file untouched, and the summary is only printed once the
/// table has been written.
///
/// # Errors
///
/// Returns an error if the configuration, the input, or the output cannot be processed
pub fn analyze<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    let (Some(input), Some(output), []) = (&args.input, &args.output, args.extra.as_slice()) else {
        let _ = writeln!(host.output(), "{USAGE}");
        return Ok(());
    };

    if !input.is_file() {
        let _ = writeln!(host.output(), "File not found: {input}");
        return Ok(());
    }

    match analyze_inner(host, input, output, args.config.as_deref()) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Analysis failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

fn analyze_inner<H: Host>(host: &mut H, input: &Utf8Path, output: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    log::info!(target: LOG_TARGET, "Reading test records from '{input}'");
    let json = fs::read_to_string(input).into_app_err_with(|| format!("reading test records from '{input}'"))?;

    let mut test_result = TestResult::new();
    test_result
        .parse_json(&json)
        .into_app_err_with(|| format!("decoding test records from '{input}'"))?;

    test_result.export_to_csv(output, &config.timestamp_format)?;

    let summary = test_result.summary();
    if summary.unrecognized() > 0 {
        log::warn!(
            target: LOG_TARGET,
            "{} record(s) have a status other than 'pass' or 'fail'",
            summary.unrecognized()
        );
    }

    let mut console_output = String::new();
    generate_console(&summary, config.empty_summary, &mut console_output)?;
    write!(host.output(), "{console_output}").into_app_err("writing summary")?;

    Ok(())
}
