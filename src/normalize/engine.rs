//! Normalization Engine
//!
//! Per-diagnostic pipeline over a raw checker report: correct the column,
//! compute the highlight span, classify the message and drop suppressed
//! entries. Emits annotations in input order, skipping null report slots.

use regex::Regex;

use crate::checker::report::{CheckReport, RawDiagnostic};
use crate::normalize::rules::{classify, is_noise};
use crate::normalize::tabs::TabOffsetCache;

/// Severity of a normalized annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A 0-based (line, character) position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A normalized annotation ready for display in an editor
#[derive(Debug, Clone, PartialEq)]
pub struct LintAnnotation {
    pub message: String,
    pub severity: Severity,
    pub from: Position,
    pub to: Position,
}

/// Normalization state for a single validation run.
///
/// Owns the per-run tab position cache, so consuming the normalizer in
/// [`Normalizer::normalize`] guarantees no cached positions leak into a
/// later run over different source text.
pub struct Normalizer {
    tabs: TabOffsetCache,
    boundary: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            tabs: TabOffsetCache::new(),
            // A character directly followed by a word boundary marks the
            // end of the token starting at the reported position
            boundary: Regex::new(r".\b").expect("boundary pattern is valid"),
        }
    }

    /// Normalize a whole report.
    ///
    /// Input order is preserved; null entries and suppressed diagnostics
    /// contribute nothing and leave no gap.
    pub fn normalize(mut self, report: &CheckReport) -> Vec<LintAnnotation> {
        report
            .errors
            .iter()
            .flatten()
            .filter_map(|raw| self.normalize_one(raw))
            .collect()
    }

    fn normalize_one(&mut self, raw: &RawDiagnostic) -> Option<LintAnnotation> {
        let column = match raw.evidence.as_deref() {
            Some(evidence) => self
                .tabs
                .corrected_column(raw.line, evidence, raw.character),
            None => raw.character,
        };
        let start = column.saturating_sub(1);
        let end = match raw.evidence.as_deref() {
            Some(evidence) => self.token_end(evidence, start),
            None => start + 1,
        };

        let (severity, message) = classify(&raw.reason);
        if is_noise(&message) {
            return None;
        }

        // Checker lines are 1-based, editor lines 0-based
        let line = raw.line.saturating_sub(1);
        Some(LintAnnotation {
            message,
            severity,
            from: Position::new(line, start),
            to: Position::new(line, end),
        })
    }

    /// End offset of the span starting at character offset `start`: one
    /// past the first character that sits on a word boundary, or a
    /// single-character span when no boundary follows.
    fn token_end(&self, evidence: &str, start: u32) -> u32 {
        let Some((byte_start, _)) = evidence.char_indices().nth(start as usize) else {
            return start + 1;
        };
        let tail = &evidence[byte_start..];
        match self.boundary.find(tail) {
            // Regex offsets are bytes; spans are counted in characters
            Some(found) => start + 1 + tail[..found.start()].chars().count() as u32,
            None => start + 1,
        }
    }
}
