//! Command-line interface for audio-lib-checker.
//!
//! This module provides the `check` and `export` commands.

mod commands;

pub use commands::{Cli, Commands, run_command};
