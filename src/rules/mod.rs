//! Tag quality rules.
//!
//! Rules are plain functions returning `Some(message)` when they trigger.
//! They are grouped in ordered tables: [`track::TRACK_RULES`] run against a
//! single file's tags, [`album::ALBUM_RULES`] against every file found under
//! an album directory.
//!
//! # Severity
//!
//! - [`Severity::Error`] findings are always evaluated and reported.
//! - [`Severity::Warning`] findings are skipped entirely in "only errors" mode.

pub mod album;
pub mod track;
pub mod various;

use smallvec::SmallVec;

use crate::metadata::TrackTag;

pub use album::{ALBUM_RULES, AlbumRule};
pub use track::{TRACK_RULES, TrackRule};
pub use various::is_various_artists;

/// How bad a rule violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// Findings of one checked unit (a file or an album directory).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleReport {
    pub errors: SmallVec<[String; 4]>,
    pub warnings: SmallVec<[String; 4]>,
}

impl RuleReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors plus warnings.
    pub fn total(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Error => self.errors.push(message),
            Severity::Warning => self.warnings.push(message),
        }
    }
}

/// Run every track rule against `tag`, in table order.
pub fn evaluate_track(tag: &TrackTag, only_errors: bool) -> RuleReport {
    let mut report = RuleReport::default();
    for rule in TRACK_RULES {
        if only_errors && rule.severity == Severity::Warning {
            continue;
        }
        if let Some(message) = (rule.check)(tag) {
            report.push(rule.severity, message);
        }
    }
    report
}

/// Run every album rule against the tags of one album directory.
pub fn evaluate_album(tags: &[TrackTag], only_errors: bool) -> RuleReport {
    let mut report = RuleReport::default();
    for rule in ALBUM_RULES {
        if only_errors && rule.severity == Severity::Warning {
            continue;
        }
        if let Some(message) = (rule.check)(tags) {
            report.push(rule.severity, message);
        }
    }
    report
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Substrings that mark a placeholder value.
const UNKNOWN_PATTERNS: &[&str] = &["unknow", "untitled", "track"];

/// True if the normalized value contains a placeholder pattern.
///
/// An empty value is not a placeholder; it is caught by the "empty" rules.
pub fn is_unknown(s: &str) -> bool {
    let s = normalize(s);
    UNKNOWN_PATTERNS.iter().any(|p| s.contains(p))
}
