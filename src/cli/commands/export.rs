//! JSON export command.

use std::path::{Path, PathBuf};

use super::print_styled;
use crate::config::Config;
use crate::export::{self, ExportOptions};
use crate::metadata::LoftyReader;
use crate::report::Style;

/// Merge command-line flags over the config file defaults.
pub(super) fn options(config: &Config, covers: bool, covers_path: Option<&PathBuf>) -> ExportOptions {
    let enabled = covers || config.export.covers;
    ExportOptions {
        covers_dir: enabled.then(|| {
            covers_path
                .cloned()
                .unwrap_or_else(|| config.export.covers_path.clone())
        }),
    }
}

/// Export the library under `root` as JSON into `output`.
///
/// Failing to write the output file or a cover aborts the command.
pub fn cmd_export(root: &Path, output: &Path, options: &ExportOptions) -> anyhow::Result<()> {
    let count = export::export(root, output, &LoftyReader, options)?;
    print_styled(
        &format!("Success: {count} albums successfully exported"),
        Style::Green,
    );
    Ok(())
}
