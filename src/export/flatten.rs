//! Flat tag records to an Artist / Album / Track graph.
//!
//! Artists and albums are deduplicated by their exact name. The first record
//! seen for an album decides its year and album artist; later records only
//! add tracks. Two artists releasing albums with the same name end up in the
//! same [`Album`].

use std::collections::HashMap;

use crate::metadata::TrackTag;
use crate::model::{Album, Artist, Track};

/// Working set of one flatten run.
#[derive(Debug, Default)]
pub struct FlattenContext {
    artists: HashMap<String, Artist>,
    albums: HashMap<String, Album>,
}

impl FlattenContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the graph.
    pub fn add(&mut self, tag: &TrackTag) {
        let artist_name = self.artist(&tag.artist).name.clone();
        let album_artist = Artist::new(self.artist(&tag.album_artist).name.clone());

        let album = self
            .albums
            .entry(tag.album.clone())
            .or_insert_with(|| Album {
                name: tag.album.clone(),
                year: tag.year_or_zero(),
                album_artist,
                ..Album::default()
            });

        album.tracks.push(Track {
            track: tag.track_number(),
            disc: tag.disc_number(),
            title: tag.title.clone(),
            album: album.name.clone(),
            artist: Artist::new(artist_name),
            path: Some(tag.path.clone()),
        });

        if let Some(owner) = self.artists.get_mut(&tag.album_artist) {
            owner.add_album(&tag.album);
        }
    }

    fn artist(&mut self, name: &str) -> &Artist {
        self.artists
            .entry(name.to_string())
            .or_insert_with(|| Artist::new(name))
    }

    /// Look up an artist by exact name.
    pub fn get_artist(&self, name: &str) -> Option<&Artist> {
        self.artists.get(name)
    }

    /// Look up an album by exact name.
    pub fn get_album(&self, name: &str) -> Option<&Album> {
        self.albums.get(name)
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// The accumulated albums, in no particular order.
    pub fn into_albums(self) -> Vec<Album> {
        self.albums.into_values().collect()
    }
}

/// Flatten `tags` in a fresh context.
pub fn flatten<'a>(tags: impl IntoIterator<Item = &'a TrackTag>) -> FlattenContext {
    let mut ctx = FlattenContext::new();
    for tag in tags {
        ctx.add(tag);
    }
    ctx
}
