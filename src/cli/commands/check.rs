//! Tag quality check command.

use std::path::Path;
use tracing::info;

use crate::checker::{self, CheckOptions, CheckScope};
use crate::config::Config;
use crate::metadata::LoftyReader;
use crate::report::ConsoleReport;

/// Merge command-line flags over the config file defaults.
pub(super) fn options(
    config: &Config,
    albums: bool,
    tracks: bool,
    only_errors: bool,
    limit: Option<usize>,
) -> CheckOptions {
    CheckOptions {
        scope: CheckScope::from_flags(albums, tracks),
        limit: limit.unwrap_or(config.check.limit),
        only_errors: only_errors || config.check.only_errors,
    }
}

/// Check the library under `root` and print the findings.
///
/// Rule violations are reported, not returned as errors. Failing to write
/// the report is an error.
pub fn cmd_check(root: &Path, options: CheckOptions) -> anyhow::Result<()> {
    let mut report = ConsoleReport::stdout();
    let outcome = checker::check(root, &LoftyReader, &mut report, options)?;

    if outcome.limit_reached() {
        info!(target: "checker", "Check stopped early");
    }
    Ok(())
}
