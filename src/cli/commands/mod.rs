//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `check`: Tag quality rules over albums and tracks
//! - `export`: JSON export of the album graph

mod check;
mod export;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::report::{self, Style};

pub use check::cmd_check;
pub use export::cmd_export;

/// Check and export the tags of an audio library
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: the user config directory)
    #[arg(long, global = true, env = "AUDIO_LIB_CHECKER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Check your audio library files tags errors
    Check {
        /// Root directory of the library
        root: Option<PathBuf>,
        /// Check albums
        #[arg(short, long)]
        albums: bool,
        /// Check tracks
        #[arg(short, long)]
        tracks: bool,
        /// Show only errors
        #[arg(long)]
        only_errors: bool,
        /// Stop after this many errors and warnings (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Export tracks to a json file
    Export {
        /// Root directory of the library
        root: Option<PathBuf>,
        /// JSON file to write
        output: Option<PathBuf>,
        /// Extract covers
        #[arg(short, long)]
        covers: bool,
        /// Extract covers into this directory
        #[arg(long)]
        covers_path: Option<PathBuf>,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was
/// specified (the caller prints help).
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let config = config::load(cli.config.as_deref());

    match &cli.command {
        Some(Commands::Check {
            root,
            albums,
            tracks,
            only_errors,
            limit,
        }) => {
            let Some(root) = required(root.as_ref(), "A root must be specified.") else {
                return Ok(true);
            };
            let options = check::options(&config, *albums, *tracks, *only_errors, *limit);
            cmd_check(root, options)?;
            Ok(true)
        }
        Some(Commands::Export {
            root,
            output,
            covers,
            covers_path,
        }) => {
            let Some(root) = required(root.as_ref(), "A root must be specified.") else {
                return Ok(true);
            };
            let Some(output) = required(output.as_ref(), "Export file must be specified.") else {
                return Ok(true);
            };
            let options = export::options(&config, *covers, covers_path.as_ref());
            cmd_export(root, output, &options)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// A missing positional argument prints `message` and skips the command.
/// The process still exits successfully.
fn required<'a>(value: Option<&'a PathBuf>, message: &str) -> Option<&'a PathBuf> {
    if value.is_none() {
        print_styled(message, Style::Red);
    }
    value
}

pub(crate) fn print_styled(text: &str, style: Style) {
    println!("{}", report::paint(text, style, report::color_enabled()));
}
