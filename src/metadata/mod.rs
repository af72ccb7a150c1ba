//! Audio file tag reading.
//!
//! Uses the lofty crate for format-independent metadata access. Tag reading
//! sits behind the [`TagReader`] trait so the rule engine and the exporter can
//! be driven by in-memory tags in tests.

use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, PictureType};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// An embedded picture (cover art).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// File extension without the dot (`jpg`, `png`, ...)
    pub ext: String,
}

/// Tag data of a single audio file.
///
/// Text fields are empty when the tag is missing. Numeric fields keep their
/// presence explicit; use [`TrackTag::track_number`] and friends to get the
/// zero-defaulted value the rules work with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTag {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub album_artist: String,
    pub year: Option<u32>,
    pub track: Option<u32>,
    pub disc: Option<u32>,
    /// Absolute path of the file
    pub path: PathBuf,
    pub picture: Option<Picture>,
}

impl TrackTag {
    /// Track number, 0 when absent.
    pub fn track_number(&self) -> u32 {
        self.track.unwrap_or(0)
    }

    /// Disc number, 0 when absent.
    pub fn disc_number(&self) -> u32 {
        self.disc.unwrap_or(0)
    }

    /// Release year, 0 when absent.
    pub fn year_or_zero(&self) -> u32 {
        self.year.unwrap_or(0)
    }

    /// Drop the embedded picture, keeping only the text and numeric tags.
    pub fn without_picture(mut self) -> Self {
        self.picture = None;
        self
    }
}

/// Reads tag data from a file.
///
/// Each call opens, reads and closes the file; no handle outlives the call.
pub trait TagReader {
    fn read(&self, path: &Path) -> Result<TrackTag>;
}

/// [`TagReader`] backed by lofty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyReader;

impl TagReader for LoftyReader {
    fn read(&self, path: &Path) -> Result<TrackTag> {
        let tagged_file = Probe::open(path)
            .map_err(|e| Error::metadata(path, e.to_string()))?
            .read()
            .map_err(|e| Error::metadata(path, e.to_string()))?;

        let abs_path = std::path::absolute(path)?;

        // Get the primary tag, or fall back to the first available tag
        let Some(tag) = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        else {
            return Ok(TrackTag {
                path: abs_path,
                ..TrackTag::default()
            });
        };

        Ok(TrackTag {
            title: text(tag.title()),
            album: text(tag.album()),
            artist: text(tag.artist()),
            album_artist: tag
                .get_string(&ItemKey::AlbumArtist)
                .unwrap_or_default()
                .to_string(),
            year: tag.year(),
            track: tag.track(),
            disc: tag.disk(),
            path: abs_path,
            picture: front_picture(tag),
        })
    }
}

fn text(value: Option<std::borrow::Cow<'_, str>>) -> String {
    value.map(|s| s.into_owned()).unwrap_or_default()
}

/// Prefer the front cover, fall back to the first picture.
fn front_picture(tag: &Tag) -> Option<Picture> {
    let pictures = tag.pictures();
    let picture = pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())?;

    Some(Picture {
        data: picture.data().to_vec(),
        ext: picture_extension(picture.mime_type()).to_string(),
    })
}

/// File extension for a picture MIME type. Unknown types are assumed JPEG.
pub fn picture_extension(mime_type: Option<&MimeType>) -> &'static str {
    match mime_type {
        Some(MimeType::Png) => "png",
        Some(MimeType::Gif) => "gif",
        Some(MimeType::Bmp) => "bmp",
        Some(MimeType::Tiff) => "tiff",
        _ => "jpg",
    }
}
