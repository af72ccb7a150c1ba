//! Test utilities and fixtures.
//!
//! Provides tag fixtures, an in-memory [`TagReader`] and a [`ReportSink`]
//! that records what the checker reports.
//!
//! # Example
//!
//! ```ignore
//! let mut reader = FakeReader::default();
//! reader.insert(TrackTag {
//!     title: String::new(),
//!     path: PathBuf::from("/lib/01.mp3"),
//!     ..mock_track_tag()
//! });
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::checker::{Phase, PhaseSummary, ReportSink};
use crate::error::{Error, Result};
use crate::metadata::{TagReader, TrackTag};
use crate::rules::RuleReport;

/// Creates a TrackTag that passes every track rule.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let tag = TrackTag {
///     album: "Other".to_string(),
///     ..mock_track_tag()
/// };
/// ```
pub fn mock_track_tag() -> TrackTag {
    TrackTag {
        title: "Test Song".to_string(),
        album: "Test Album".to_string(),
        artist: "Test Artist".to_string(),
        album_artist: "Test Artist".to_string(),
        year: Some(2020),
        track: Some(1),
        disc: Some(1),
        path: PathBuf::from("/music/Test Artist/Test Album/01.mp3"),
        picture: None,
    }
}

/// Create an empty file, and its parent directories.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, b"").expect("Failed to create file");
}

/// A [`TagReader`] serving tags from memory, keyed by path.
///
/// Paths without a tag fail like a corrupt file would.
#[derive(Debug, Default)]
pub struct FakeReader {
    tags: HashMap<PathBuf, TrackTag>,
}

impl FakeReader {
    pub fn with_tags(tags: impl IntoIterator<Item = TrackTag>) -> Self {
        let mut reader = Self::default();
        for tag in tags {
            reader.insert(tag);
        }
        reader
    }

    /// Register a tag under its own `path`.
    pub fn insert(&mut self, tag: TrackTag) {
        self.tags.insert(tag.path.clone(), tag);
    }
}

impl TagReader for FakeReader {
    fn read(&self, path: &Path) -> Result<TrackTag> {
        self.tags
            .get(path)
            .cloned()
            .ok_or_else(|| Error::metadata(path, "no tag data"))
    }
}

/// A writer whose every write fails, like a closed pipe.
#[derive(Debug, Default)]
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What a [`RecordingSink`] saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    PhaseStarted(Phase),
    Findings(Phase, PathBuf, RuleReport),
    LimitReached(Phase),
    PhaseFinished(PhaseSummary),
}

/// A [`ReportSink`] that records every event.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Units reported with findings, in order.
    pub fn units(&self) -> Vec<PathBuf> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Findings(_, unit, _) => Some(unit.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn phase_started(&mut self, phase: Phase) -> io::Result<()> {
        self.events.push(SinkEvent::PhaseStarted(phase));
        Ok(())
    }

    fn unit_findings(&mut self, phase: Phase, unit: &Path, report: &RuleReport) -> io::Result<()> {
        self.events
            .push(SinkEvent::Findings(phase, unit.to_path_buf(), report.clone()));
        Ok(())
    }

    fn limit_reached(&mut self, phase: Phase) -> io::Result<()> {
        self.events.push(SinkEvent::LimitReached(phase));
        Ok(())
    }

    fn phase_finished(&mut self, summary: &PhaseSummary) -> io::Result<()> {
        self.events.push(SinkEvent::PhaseFinished(*summary));
        Ok(())
    }
}
