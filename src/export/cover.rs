//! Copy embedded cover art of exported albums to disk.
//!
//! For each album the tracks are re-read in order and the first embedded
//! picture found is written as `<dir>/<uuid v4>.<ext>`. Identical covers of
//! different albums are written once per album.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::metadata::TagReader;
use crate::model::Album;

/// Writes album covers into one directory.
pub struct CoverExporter<'a, R: TagReader> {
    dir: PathBuf,
    reader: &'a R,
}

impl<'a, R: TagReader> CoverExporter<'a, R> {
    /// Create the exporter, creating `dir` (and its parents) if needed.
    pub fn new(dir: impl Into<PathBuf>, reader: &'a R) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| Error::cover_export(&dir, e))?;
        Ok(Self { dir, reader })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the first embedded picture of `album` and return its absolute path.
    ///
    /// Returns `Ok(None)` when no track carries a picture. Tracks whose tags
    /// cannot be read are skipped.
    pub fn export(&self, album: &Album) -> Result<Option<PathBuf>> {
        for track in &album.tracks {
            let Some(path) = track.path.as_deref() else {
                continue;
            };

            let tag = match self.reader.read(path) {
                Ok(tag) => tag,
                Err(e) => {
                    warn!(target: "export", path = %path.display(), error = %e, "Skipping unreadable file");
                    continue;
                }
            };

            let Some(picture) = tag.picture else {
                continue;
            };

            let file = self
                .dir
                .join(format!("{}.{}", random_id(), picture.ext));
            fs::write(&file, &picture.data).map_err(|e| Error::cover_export(&file, e))?;
            let file = std::path::absolute(&file).map_err(|e| Error::cover_export(&file, e))?;

            debug!(target: "export", album = %album.name, cover = %file.display(), "Cover written");
            return Ok(Some(file));
        }

        Ok(None)
    }

    /// Export covers of every album, storing the resulting path on each.
    pub fn export_all(&self, albums: &mut [Album]) -> Result<usize> {
        let mut written = 0;
        for album in albums.iter_mut() {
            album.cover_path = self.export(album)?;
            if album.cover_path.is_some() {
                written += 1;
            }
        }
        Ok(written)
    }
}

/// A fresh hyphenated v4 UUID.
fn random_id() -> String {
    Uuid::new_v4().to_string()
}
