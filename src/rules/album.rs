//! Rules checked against every file of an album directory.

use std::collections::HashSet;

use super::Severity;
use crate::metadata::TrackTag;

/// A rule over the tags of one album directory, in file order.
#[derive(Debug, Clone, Copy)]
pub struct AlbumRule {
    pub name: &'static str,
    pub severity: Severity,
    pub check: fn(&[TrackTag]) -> Option<String>,
}

/// Album rules in evaluation (and reporting) order.
pub const ALBUM_RULES: &[AlbumRule] = &[
    AlbumRule {
        name: "multiple-album-names",
        severity: Severity::Error,
        check: multiple_album_names,
    },
    AlbumRule {
        name: "multiple-album-artists",
        severity: Severity::Error,
        check: multiple_album_artists,
    },
    AlbumRule {
        name: "same-track-number",
        severity: Severity::Error,
        check: same_track_number,
    },
];

/// First value that differs from the first non-empty one, as `(first, other)`.
fn first_mismatch<'a>(values: impl Iterator<Item = &'a str>) -> Option<(&'a str, &'a str)> {
    let mut first: Option<&str> = None;
    for value in values {
        match first {
            None if !value.is_empty() => first = Some(value),
            None => {}
            Some(reference) if reference != value => return Some((reference, value)),
            Some(_) => {}
        }
    }
    None
}

pub fn multiple_album_names(tags: &[TrackTag]) -> Option<String> {
    first_mismatch(tags.iter().map(|t| t.album.as_str())).map(|(first, other)| {
        format!("Directory contains multiple album names ({first} != {other})")
    })
}

pub fn multiple_album_artists(tags: &[TrackTag]) -> Option<String> {
    first_mismatch(tags.iter().map(|t| t.album_artist.as_str())).map(|(first, other)| {
        format!("Directory contains multiple album artists names ({first} != {other})")
    })
}

/// Two files share the same `disc-track` key. Absent numbers count as 0.
pub fn same_track_number(tags: &[TrackTag]) -> Option<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .any(|t| !seen.insert((t.disc_number(), t.track_number())))
        .then(|| "Directory contains same track number".to_string())
}
