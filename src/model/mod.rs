//! Exported data model: [`Artist`], [`Album`] and [`Track`].
//!
//! These are built by [`crate::export::flatten`] from flat tag records and
//! serialized to JSON. Back-references (an album's tracks pointing at the
//! album, an artist's albums) are kept out of the JSON so the graph
//! serializes as a tree.
//!
//! # JSON Shape
//!
//! ```text
//! Album  { tracks, name?, year?, album_artist, cover_path? }
//! Track  { track, disc?, title?, artist, path? }
//! Artist { name? }
//! ```
//!
//! Fields marked `?` are omitted when empty or zero. Paths are written
//! lossily: bytes that are not valid UTF-8 become U+FFFD.

use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

fn is_zero(n: &u32) -> bool {
    *n == 0
}

fn lossy_path<S: Serializer>(path: &Option<PathBuf>, serializer: S) -> Result<S::Ok, S::Error> {
    path.as_ref()
        .map(|p| p.to_string_lossy())
        .serialize(serializer)
}

/// An artist, identified by its exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Names of the albums this artist is the album artist of
    #[serde(skip)]
    pub albums: Vec<String>,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            albums: Vec::new(),
        }
    }

    /// Register an album, once per name.
    pub fn add_album(&mut self, album: &str) {
        if !self.albums.iter().any(|a| a == album) {
            self.albums.push(album.to_string());
        }
    }
}

/// An album, identified by its exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Tracks in encounter order
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Release year, 0 when unknown
    #[serde(default, skip_serializing_if = "is_zero")]
    pub year: u32,
    #[serde(default)]
    pub album_artist: Artist,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "lossy_path"
    )]
    pub cover_path: Option<PathBuf>,
}

/// A single audio file of an album.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub track: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub disc: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Name of the album this track belongs to
    #[serde(skip)]
    pub album: String,
    #[serde(default)]
    pub artist: Artist,
    /// Absolute path of the audio file
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "lossy_path"
    )]
    pub path: Option<PathBuf>,
}
