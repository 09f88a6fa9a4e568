//! Command-line parsing and dispatch

use super::analyze::{AnalyzeArgs, USAGE, analyze};
use super::common::init_logging;
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::error::ErrorKind;
use ohno::IntoAppError;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "testResultAnalysis", version, long_about = None)]
#[command(about = "Normalize test execution records, export them as CSV, and summarize them")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

/// Parse command-line arguments and run the analysis
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if an option is malformed or if the analysis fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(host.output(), "{}", e.render());
            return Ok(());
        }
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            // An unrecognized word counts toward the arity, like any other argument
            let _ = writeln!(host.output(), "{USAGE}");
            return Ok(());
        }
        Err(e) => {
            let _ = write!(host.error(), "{}", e.render());
            host.exit(e.exit_code());
            return Err(e).into_app_err("parsing command-line arguments");
        }
    };

    init_logging(cli.args.log_level);
    analyze(host, &cli.args)
}
