//! audio-lib-checker - Checks and exports the tags of an audio library.
//!
//! The `check` command runs tag quality rules over every album directory
//! and audio file below a root. The `export` command flattens the library
//! into artists, albums and tracks and writes the albums as JSON, optionally
//! extracting embedded cover art.

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod library;
pub mod metadata;
pub mod model;
pub mod report;
pub mod rules;
#[cfg(test)]
pub mod test_utils;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log levels used when `RUST_LOG` does not mention a target.
const DEFAULT_LOG_DIRECTIVES: &str = "audio_lib_checker=info,library=info,checker=info,export=info";

/// Default directives first, then `env`. A later directive for the same
/// target replaces the earlier one.
fn log_filter(env: Option<&str>) -> EnvFilter {
    let directives = match env {
        Some(env) if !env.trim().is_empty() => format!("{DEFAULT_LOG_DIRECTIVES},{env}"),
        _ => DEFAULT_LOG_DIRECTIVES.to_string(),
    };
    EnvFilter::builder().parse_lossy(directives)
}

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr, reports go to stdout
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(log_filter(env.as_deref()))
        .init();

    if !cli::run_command(&args)? {
        cli::Cli::command().print_help()?;
    }
    Ok(())
}
