//! Export a library as a JSON list of albums.
//!
//! The pipeline is: read every audio file under the root ([`extract`]),
//! group the records into albums ([`flatten`]), optionally copy cover art
//! ([`cover`]), then write the albums as compact JSON ([`write_json`]).

pub mod cover;
pub mod flatten;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::library;
use crate::metadata::{TagReader, TrackTag};
use crate::model::Album;

pub use cover::CoverExporter;
pub use flatten::{FlattenContext, flatten};

/// Options of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory to copy album covers into. `None` disables cover export.
    pub covers_dir: Option<PathBuf>,
}

/// Read the tags of every audio file under `root`, in walk order.
///
/// Files that cannot be read are logged and skipped. Pictures are dropped;
/// cover export reads them again when needed.
pub fn extract<R: TagReader>(root: &Path, reader: &R) -> Vec<TrackTag> {
    library::audio_files(root)
        .iter()
        .filter_map(|path| match reader.read(path) {
            Ok(tag) => Some(tag.without_picture()),
            Err(e) => {
                warn!(target: "export", path = %path.display(), error = %e, "Error reading file");
                None
            }
        })
        .collect()
}

/// Group tag records into albums, exporting covers if requested.
pub fn transform<R: TagReader>(
    tags: &[TrackTag],
    reader: &R,
    options: &ExportOptions,
) -> Result<Vec<Album>> {
    let mut albums = flatten(tags).into_albums();

    if let Some(dir) = &options.covers_dir {
        let exporter = CoverExporter::new(dir, reader)?;
        let written = exporter.export_all(&mut albums)?;
        info!(target: "export", covers = written, dir = %exporter.dir().display(), "Covers exported");
    }

    Ok(albums)
}

/// Serialize `albums` as compact JSON into `path`.
pub fn write_json(albums: &[Album], path: &Path) -> Result<()> {
    let json = serde_json::to_vec(albums)?;
    fs::write(path, json).map_err(|e| Error::output_file(path, e))
}

/// Run the whole export and return the number of albums written.
pub fn export<R: TagReader>(
    root: &Path,
    output: &Path,
    reader: &R,
    options: &ExportOptions,
) -> Result<usize> {
    let tags = extract(root, reader);
    info!(target: "export", root = %root.display(), tracks = tags.len(), "Tags extracted");

    let albums = transform(&tags, reader, options)?;
    write_json(&albums, output)?;

    info!(target: "export", output = %output.display(), albums = albums.len(), "Export written");
    Ok(albums.len())
}
