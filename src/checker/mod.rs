//! Check driver: runs the rule engine over a discovered library.
//!
//! Albums are checked first, then tracks. A single running total of errors
//! plus warnings is kept across both phases; once a configured limit is
//! reached the current phase stops, and if that happens while checking
//! albums the track phase is never started.
//!
//! Output goes through the [`ReportSink`] trait so the console printer and
//! tests see the same events. A sink that fails to write ends the run.

use bitflags::bitflags;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::library::{self, Discovery};
use crate::metadata::{TagReader, TrackTag};
use crate::rules::{self, RuleReport};

bitflags! {
    /// Which kinds of units to check.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CheckScope: u8 {
        /// Album directories (album rules)
        const ALBUMS = 1 << 0;
        /// Individual files (track rules)
        const TRACKS = 1 << 1;
    }
}

impl CheckScope {
    /// Resolve the `--albums` / `--tracks` flags. Neither flag means both.
    pub fn from_flags(albums: bool, tracks: bool) -> Self {
        let mut scope = Self::empty();
        scope.set(Self::ALBUMS, albums);
        scope.set(Self::TRACKS, tracks);
        if scope.is_empty() { Self::all() } else { scope }
    }
}

impl Default for CheckScope {
    fn default() -> Self {
        Self::all()
    }
}

/// Options of one check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub scope: CheckScope,
    /// Stop once errors + warnings reach this count. 0 = unlimited.
    pub limit: usize,
    /// Skip warning rules entirely.
    pub only_errors: bool,
}

/// A phase of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Albums,
    Tracks,
}

/// Counters of a finished (or interrupted) phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
    pub phase: Phase,
    /// Units checked, including the one that hit the limit
    pub checked: usize,
    pub errors: usize,
    pub warnings: usize,
    pub limit_reached: bool,
}

impl PhaseSummary {
    fn new(phase: Phase) -> Self {
        Self {
            phase,
            checked: 0,
            errors: 0,
            warnings: 0,
            limit_reached: false,
        }
    }
}

/// Result of a whole check run. A phase that did not run is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub albums: Option<PhaseSummary>,
    pub tracks: Option<PhaseSummary>,
}

impl CheckOutcome {
    pub fn limit_reached(&self) -> bool {
        [self.albums, self.tracks]
            .iter()
            .flatten()
            .any(|s| s.limit_reached)
    }
}

/// Receives check progress.
pub trait ReportSink {
    fn phase_started(&mut self, phase: Phase) -> io::Result<()>;
    /// Called only for units with at least one finding.
    fn unit_findings(&mut self, phase: Phase, unit: &Path, report: &RuleReport) -> io::Result<()>;
    fn limit_reached(&mut self, phase: Phase) -> io::Result<()>;
    fn phase_finished(&mut self, summary: &PhaseSummary) -> io::Result<()>;
}

/// Runs the album and track phases over a [`Discovery`].
pub struct Checker<'a, R: TagReader, S: ReportSink> {
    reader: &'a R,
    sink: &'a mut S,
    options: CheckOptions,
    total: usize,
}

impl<'a, R: TagReader, S: ReportSink> Checker<'a, R, S> {
    pub fn new(reader: &'a R, sink: &'a mut S, options: CheckOptions) -> Self {
        Self {
            reader,
            sink,
            options,
            total: 0,
        }
    }

    /// Running total of errors + warnings so far.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn run(&mut self, discovery: &Discovery) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::default();

        if self.options.scope.contains(CheckScope::ALBUMS) {
            let summary = self.run_phase(Phase::Albums, &discovery.albums)?;
            outcome.albums = Some(summary);
            if summary.limit_reached {
                return Ok(outcome);
            }
        }

        if self.options.scope.contains(CheckScope::TRACKS) {
            outcome.tracks = Some(self.run_phase(Phase::Tracks, &discovery.tracks)?);
        }

        Ok(outcome)
    }

    fn run_phase(&mut self, phase: Phase, units: &[PathBuf]) -> Result<PhaseSummary> {
        info!(target: "checker", ?phase, units = units.len(), "Checking");
        self.sink.phase_started(phase)?;

        let mut summary = PhaseSummary::new(phase);
        for unit in units {
            let report = match phase {
                Phase::Albums => self.check_album(unit),
                Phase::Tracks => self.check_track(unit),
            };

            if !report.is_empty() {
                self.sink.unit_findings(phase, unit, &report)?;
            }

            self.total += report.total();
            summary.checked += 1;
            summary.errors += report.errors.len();
            summary.warnings += report.warnings.len();

            if self.limit_hit() {
                info!(target: "checker", limit = self.options.limit, "Error count limit reached");
                summary.limit_reached = true;
                self.sink.limit_reached(phase)?;
                break;
            }
        }

        self.sink.phase_finished(&summary)?;
        Ok(summary)
    }

    fn limit_hit(&self) -> bool {
        self.options.limit > 0 && self.total >= self.options.limit
    }

    /// Album rules over every readable file under `dir`, recursively.
    pub fn check_album(&self, dir: &Path) -> RuleReport {
        debug!(target: "checker", dir = %dir.display(), "Checking album directory");
        let tags: Vec<TrackTag> = library::audio_files(dir)
            .iter()
            .filter_map(|path| self.read(path))
            .map(TrackTag::without_picture)
            .collect();
        rules::evaluate_album(&tags, self.options.only_errors)
    }

    /// Track rules for one file. An unreadable file has no findings.
    pub fn check_track(&self, path: &Path) -> RuleReport {
        debug!(target: "checker", path = %path.display(), "Checking file");
        self.read(path)
            .map(|tag| rules::evaluate_track(&tag, self.options.only_errors))
            .unwrap_or_default()
    }

    fn read(&self, path: &Path) -> Option<TrackTag> {
        match self.reader.read(path) {
            Ok(tag) => Some(tag),
            Err(e) => {
                warn!(target: "checker", path = %path.display(), error = %e, "Error reading file");
                None
            }
        }
    }
}

/// Discover `root` and check it.
pub fn check<R: TagReader, S: ReportSink>(
    root: &Path,
    reader: &R,
    sink: &mut S,
    options: CheckOptions,
) -> Result<CheckOutcome> {
    let discovery = library::discover(root);
    info!(
        target: "checker",
        root = %root.display(),
        albums = discovery.albums.len(),
        tracks = discovery.tracks.len(),
        "Library discovered"
    );
    Checker::new(reader, sink, options).run(&discovery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::report::ConsoleReport;
    use crate::test_utils::{
        BrokenWriter, FakeReader, RecordingSink, SinkEvent, mock_track_tag, touch,
    };
    use tempfile::tempdir;

    /// An album directory whose two files carry different album names.
    fn broken_album(root: &Path, name: &str, reader: &mut FakeReader) -> PathBuf {
        let dir = root.join(name);
        for (i, album) in ["Foo", "Bar"].iter().enumerate() {
            let path = dir.join(format!("{i:02}.mp3"));
            touch(&path);
            reader.insert(TrackTag {
                album: album.to_string(),
                track: Some(i as u32 + 1),
                path,
                ..mock_track_tag()
            });
        }
        dir
    }

    fn options(scope: CheckScope, limit: usize) -> CheckOptions {
        CheckOptions {
            scope,
            limit,
            only_errors: false,
        }
    }

    #[test]
    fn test_scope_from_flags() {
        assert_eq!(CheckScope::from_flags(false, false), CheckScope::all());
        assert_eq!(CheckScope::from_flags(true, false), CheckScope::ALBUMS);
        assert_eq!(CheckScope::from_flags(false, true), CheckScope::TRACKS);
        assert_eq!(CheckScope::from_flags(true, true), CheckScope::all());
    }

    #[test]
    fn test_limit_stops_after_first_album() {
        let dir = tempdir().unwrap();
        let mut reader = FakeReader::default();
        let albums: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|n| broken_album(dir.path(), n, &mut reader))
            .collect();
        let discovery = Discovery {
            albums,
            tracks: Vec::new(),
        };
        let mut sink = RecordingSink::default();

        let outcome = Checker::new(&reader, &mut sink, options(CheckScope::all(), 1))
            .run(&discovery)
            .unwrap();

        let albums = outcome.albums.unwrap();
        assert_eq!(albums.checked, 1);
        assert_eq!(albums.errors, 1);
        assert!(albums.limit_reached);
        // The track phase never starts once the album phase hit the limit
        assert!(outcome.tracks.is_none());
        assert_eq!(sink.units(), vec![dir.path().join("a")]);
        assert!(sink.events.contains(&SinkEvent::LimitReached(Phase::Albums)));
    }

    #[test]
    fn test_unlimited_checks_everything() {
        let dir = tempdir().unwrap();
        let mut reader = FakeReader::default();
        let albums: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|n| broken_album(dir.path(), n, &mut reader))
            .collect();
        let discovery = Discovery {
            albums,
            tracks: Vec::new(),
        };
        let mut sink = RecordingSink::default();

        let outcome = Checker::new(&reader, &mut sink, options(CheckScope::ALBUMS, 0))
            .run(&discovery)
            .unwrap();

        let albums = outcome.albums.unwrap();
        assert_eq!(albums.checked, 3);
        assert_eq!(albums.errors, 3);
        assert!(!outcome.limit_reached());
    }

    #[test]
    fn test_running_total_spans_phases() {
        let mut reader = FakeReader::default();
        let clean = PathBuf::from("/lib/clean.mp3");
        let empty_title = PathBuf::from("/lib/empty.mp3");
        let unknown = PathBuf::from("/lib/unknown.mp3");
        reader.insert(TrackTag {
            path: clean.clone(),
            ..mock_track_tag()
        });
        reader.insert(TrackTag {
            title: String::new(),
            path: empty_title.clone(),
            ..mock_track_tag()
        });
        reader.insert(TrackTag {
            artist: "Unknown Artist".to_string(),
            path: unknown.clone(),
            ..mock_track_tag()
        });
        let discovery = Discovery {
            albums: Vec::new(),
            tracks: vec![clean, empty_title, unknown.clone()],
        };
        let mut sink = RecordingSink::default();

        let mut checker = Checker::new(&reader, &mut sink, options(CheckScope::TRACKS, 2));
        let outcome = checker.run(&discovery).unwrap();

        assert_eq!(checker.total(), 2);
        let tracks = outcome.tracks.unwrap();
        assert_eq!(tracks.checked, 3);
        assert_eq!(tracks.errors, 1);
        assert_eq!(tracks.warnings, 1);
        assert!(tracks.limit_reached);
        assert_eq!(sink.units().last(), Some(&unknown));
    }

    #[test]
    fn test_only_errors_suppresses_warnings() {
        let mut reader = FakeReader::default();
        let path = PathBuf::from("/lib/untitled.mp3");
        reader.insert(TrackTag {
            title: "Untitled".to_string(),
            path: path.clone(),
            ..mock_track_tag()
        });
        let discovery = Discovery {
            albums: Vec::new(),
            tracks: vec![path],
        };
        let mut sink = RecordingSink::default();
        let opts = CheckOptions {
            only_errors: true,
            ..options(CheckScope::TRACKS, 0)
        };

        let outcome = Checker::new(&reader, &mut sink, opts)
            .run(&discovery)
            .unwrap();

        let tracks = outcome.tracks.unwrap();
        assert_eq!(tracks.checked, 1);
        assert_eq!(tracks.warnings, 0);
        assert!(sink.units().is_empty());
    }

    #[test]
    fn test_unreadable_track_counts_as_checked() {
        let reader = FakeReader::default();
        let discovery = Discovery {
            albums: Vec::new(),
            tracks: vec![PathBuf::from("/lib/corrupt.mp3")],
        };
        let mut sink = RecordingSink::default();

        let outcome = Checker::new(&reader, &mut sink, options(CheckScope::all(), 0))
            .run(&discovery)
            .unwrap();

        assert_eq!(outcome.albums.unwrap().checked, 0);
        let tracks = outcome.tracks.unwrap();
        assert_eq!(tracks.checked, 1);
        assert_eq!(tracks.errors + tracks.warnings, 0);
    }

    #[test]
    fn test_album_phase_runs_first() {
        let mut sink = RecordingSink::default();
        let reader = FakeReader::default();

        Checker::new(&reader, &mut sink, CheckOptions::default())
            .run(&Discovery::default())
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                SinkEvent::PhaseStarted(Phase::Albums),
                SinkEvent::PhaseFinished(PhaseSummary::new(Phase::Albums)),
                SinkEvent::PhaseStarted(Phase::Tracks),
                SinkEvent::PhaseFinished(PhaseSummary::new(Phase::Tracks)),
            ]
        );
    }

    #[test]
    fn test_check_discovers_nested_album_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut reader = FakeReader::default();
        // Album directory with a sub-disc: both files are scanned for album rules
        for path in [root.join("Album/01.mp3"), root.join("Album/CD2/01.mp3")] {
            touch(&path);
            reader.insert(TrackTag {
                track: None,
                disc: None,
                path,
                ..mock_track_tag()
            });
        }
        let mut sink = RecordingSink::default();

        let outcome = check(root, &reader, &mut sink, options(CheckScope::ALBUMS, 0)).unwrap();

        let albums = outcome.albums.unwrap();
        // "Album" and "Album/CD2" are both album directories
        assert_eq!(albums.checked, 2);
        // Only "Album" sees two files with the same (missing) numbers
        assert_eq!(albums.errors, 1);
        assert_eq!(sink.units(), vec![root.join("Album")]);
    }

    #[test]
    fn test_report_write_failure_ends_check() {
        let mut reader = FakeReader::default();
        let path = PathBuf::from("/lib/untitled.mp3");
        reader.insert(TrackTag {
            title: String::new(),
            path: path.clone(),
            ..mock_track_tag()
        });
        let discovery = Discovery {
            albums: Vec::new(),
            tracks: vec![path],
        };
        let mut report = ConsoleReport::new(BrokenWriter, false);

        let result =
            Checker::new(&reader, &mut report, options(CheckScope::TRACKS, 0)).run(&discovery);

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
