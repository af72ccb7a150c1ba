//! Audio file classification and library discovery.
//!
//! Decides which files are audio tracks (by extension) and which directories
//! are "album directories" (at least one audio file directly inside), and
//! walks a library root to collect both.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recognized audio extensions, without the leading dot. Case-sensitive.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "aac", "mp4", "m4a", "ogg", "oga", "wma", "wav", "mp3", "aif", "flac",
];

/// Check an extension given with its leading dot (`".mp3"`).
pub fn is_audio_extension(ext: &str) -> bool {
    ext.strip_prefix('.')
        .is_some_and(|e| AUDIO_EXTENSIONS.contains(&e))
}

/// Check if a path has an audio file extension.
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| is_audio_extension(&format!(".{e}")))
}

/// A directory is an album directory if one of its immediate, non-directory
/// children is an audio file. Unreadable directories are not album directories.
pub fn is_album_directory(path: &Path) -> bool {
    let Ok(entries) = fs::read_dir(path) else {
        return false;
    };

    entries.filter_map(|e| e.ok()).any(|entry| {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        !is_dir && is_audio_file(&entry.path())
    })
}

/// Everything found under a library root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Album directories, in walk order
    pub albums: Vec<PathBuf>,
    /// Audio files, in walk order
    pub tracks: Vec<PathBuf>,
}

/// Walk `root` recursively and collect album directories and audio files.
///
/// Entries are visited sorted by file name so repeated runs see the same
/// order. Entries that cannot be read are logged and skipped.
pub fn discover(root: &Path) -> Discovery {
    let mut discovery = Discovery::default();

    for entry in walk(root) {
        let path = entry.path();
        if entry.file_type().is_dir() {
            if is_album_directory(path) {
                debug!(target: "library", path = %path.display(), "Album directory");
                discovery.albums.push(path.to_path_buf());
            }
        } else if is_audio_file(path) {
            discovery.tracks.push(path.to_path_buf());
        }
    }

    discovery
}

/// All audio files under `dir`, recursively, in walk order.
pub fn audio_files(dir: &Path) -> Vec<PathBuf> {
    walk(dir)
        .filter(|e| !e.file_type().is_dir())
        .filter(|e| is_audio_file(e.path()))
        .map(|e| e.into_path())
        .collect()
}

fn walk(root: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(target: "library", error = %e, "Skipping unreadable entry");
                None
            }
        })
}
