//! Colored console output for the check command.
//!
//! Colors are plain ANSI SGR sequences. They are turned off when stdout is
//! not a terminal or when `NO_COLOR` is set.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::checker::{Phase, PhaseSummary, ReportSink};
use crate::rules::RuleReport;

/// Text styles used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Green,
    Cyan,
    Red,
    Yellow,
    /// Red on a white background
    Alert,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Self::Green => "32",
            Self::Cyan => "36",
            Self::Red => "31",
            Self::Yellow => "33",
            Self::Alert => "31;47",
        }
    }
}

/// Wrap `text` in the escape codes of `style` when `color` is on.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", style.sgr(), text)
    } else {
        text.to_string()
    }
}

/// Whether stdout should get colors.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

/// [`ReportSink`] writing human-readable lines to any writer.
pub struct ConsoleReport<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReport<io::Stdout> {
    /// Report to stdout, colored if stdout is a terminal.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), color_enabled())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str, style: Style) -> io::Result<()> {
        writeln!(self.out, "{}", paint(text, style, self.color))
    }
}

fn phase_title(phase: Phase) -> &'static str {
    match phase {
        Phase::Albums => "// Check Albums //",
        Phase::Tracks => "// Check Tracks //",
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn phase_started(&mut self, phase: Phase) -> io::Result<()> {
        self.line("", Style::Green)?;
        self.line(phase_title(phase), Style::Green)
    }

    fn unit_findings(&mut self, phase: Phase, unit: &Path, report: &RuleReport) -> io::Result<()> {
        let header = match phase {
            Phase::Albums => format!("Check directory {}", unit.display()),
            Phase::Tracks => format!("Check file {}", unit.display()),
        };
        self.line(&header, Style::Cyan)?;
        for error in &report.errors {
            self.line(error, Style::Red)?;
        }
        for warning in &report.warnings {
            self.line(warning, Style::Yellow)?;
        }
        Ok(())
    }

    fn limit_reached(&mut self, _phase: Phase) -> io::Result<()> {
        self.line("Error count limit reached", Style::Alert)
    }

    fn phase_finished(&mut self, summary: &PhaseSummary) -> io::Result<()> {
        let unit = match summary.phase {
            Phase::Albums => "album",
            Phase::Tracks => "tracks",
        };
        self.line("", Style::Green)?;
        self.line(&format!("Total checked {unit}: {}", summary.checked), Style::Green)?;
        self.line(&format!("Total errored {unit}: {}", summary.errors), Style::Red)?;
        self.line(&format!("Total warning {unit}: {}", summary.warnings), Style::Yellow)?;
        self.out.flush()
    }
}
