//! check_yum entry point.

use std::process::ExitCode;

use check_yum::check::{check, Status};
use check_yum::cli::Cli;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs always go to stderr; stdout carries only the status line.
///
/// Log level is controlled by:
/// 1. `-v` (info), `-vv` (debug), `-vvv` and above (trace)
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("check_yum=warn")),
        1 => EnvFilter::new("check_yum=info"),
        2 => EnvFilter::new("check_yum=debug"),
        _ => EnvFilter::new("check_yum=trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Status::Ok,
                _ => Status::Unknown,
            };
            let _ = err.print();
            return ExitCode::from(code.exit_code());
        }
    };
    init_tracing(cli.verbose);

    tracing::debug!("check_yum starting with args: {:?}", cli);

    let verdict = check(&cli);

    println!("{}", verdict.render());
    ExitCode::from(verdict.status.exit_code())
}
