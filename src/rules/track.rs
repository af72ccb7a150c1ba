//! Rules checked against a single file's tags.

use super::{Severity, is_unknown, is_various_artists, normalize};
use crate::metadata::TrackTag;

/// The canonical album artist for compilations.
pub const VARIOUS_ARTISTS: &str = "Various Artists";

/// A rule over one file's tags.
#[derive(Debug, Clone, Copy)]
pub struct TrackRule {
    pub name: &'static str,
    pub severity: Severity,
    pub check: fn(&TrackTag) -> Option<String>,
}

/// Track rules in evaluation (and reporting) order.
pub const TRACK_RULES: &[TrackRule] = &[
    TrackRule {
        name: "missing-title",
        severity: Severity::Error,
        check: missing_title,
    },
    TrackRule {
        name: "missing-album",
        severity: Severity::Error,
        check: missing_album,
    },
    TrackRule {
        name: "missing-album-artist",
        severity: Severity::Warning,
        check: missing_album_artist,
    },
    TrackRule {
        name: "missing-artist",
        severity: Severity::Error,
        check: missing_artist,
    },
    TrackRule {
        name: "unknown-title",
        severity: Severity::Warning,
        check: unknown_title,
    },
    TrackRule {
        name: "unknown-album",
        severity: Severity::Warning,
        check: unknown_album,
    },
    TrackRule {
        name: "unknown-album-artist",
        severity: Severity::Warning,
        check: unknown_album_artist,
    },
    TrackRule {
        name: "suspicious-various-artists",
        severity: Severity::Warning,
        check: suspicious_various_artists,
    },
    TrackRule {
        name: "unknown-artist",
        severity: Severity::Warning,
        check: unknown_artist,
    },
];

fn is_empty(s: &str) -> bool {
    normalize(s).is_empty()
}

pub fn missing_title(tag: &TrackTag) -> Option<String> {
    is_empty(&tag.title).then(|| "Track name is empty.".to_string())
}

pub fn missing_album(tag: &TrackTag) -> Option<String> {
    is_empty(&tag.album).then(|| "Album name is empty.".to_string())
}

pub fn missing_album_artist(tag: &TrackTag) -> Option<String> {
    is_empty(&tag.album_artist).then(|| "Album artist name is empty.".to_string())
}

pub fn missing_artist(tag: &TrackTag) -> Option<String> {
    is_empty(&tag.artist).then(|| "Artist name is empty.".to_string())
}

pub fn unknown_title(tag: &TrackTag) -> Option<String> {
    is_unknown(&tag.title).then(|| format!("Track name should be untitled ({}).", tag.title))
}

pub fn unknown_album(tag: &TrackTag) -> Option<String> {
    is_unknown(&tag.album).then(|| format!("Album name should be untitled ({}).", tag.album))
}

pub fn unknown_album_artist(tag: &TrackTag) -> Option<String> {
    is_unknown(&tag.album_artist)
        .then(|| format!("Album artist name should be unknow ({}).", tag.album_artist))
}

/// The album artist means "various artists" but is not spelled the canonical way.
pub fn suspicious_various_artists(tag: &TrackTag) -> Option<String> {
    (is_various_artists(&tag.album_artist) && tag.album_artist != VARIOUS_ARTISTS).then(|| {
        format!(
            "Album artist name should be Various Artists ({}).",
            tag.album_artist
        )
    })
}

pub fn unknown_artist(tag: &TrackTag) -> Option<String> {
    is_unknown(&tag.artist).then(|| format!("Artist name should be unknow ({}).", tag.artist))
}
