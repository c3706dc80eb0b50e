//! Tab Position Correction
//!
//! The checker expands tabs to spaces before computing column numbers, so
//! every tab preceding a reported position pushes that position one column
//! to the right of where it sits in the original line. This module walks
//! the evidence text and shifts reported columns back.

use std::collections::HashMap;

/// Cache of tab positions keyed by 1-based line number.
///
/// Tab positions are computed once per distinct line and reused for every
/// diagnostic reported on that line within the same validation run. The
/// cache lives for exactly one run; a fresh one is created per report.
#[derive(Debug, Default)]
pub struct TabOffsetCache {
    positions: HashMap<u32, Vec<u32>>,
}

impl TabOffsetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Correct a 1-based column reported against tab-expanded text.
    ///
    /// Every tab at a 1-based position strictly below `column` shifted the
    /// reported value right by one, so each one is subtracted back out.
    pub fn corrected_column(&mut self, line: u32, evidence: &str, column: u32) -> u32 {
        let tabs = self
            .positions
            .entry(line)
            .or_insert_with(|| tab_positions(evidence));

        let mut corrected = column;
        for &tab in tabs.iter() {
            if tab < column {
                corrected -= 1;
            }
        }
        corrected
    }
}

/// 1-based positions of every tab character in a line, in order.
fn tab_positions(evidence: &str) -> Vec<u32> {
    evidence
        .chars()
        .enumerate()
        .filter(|&(_, ch)| ch == '\t')
        .map(|(idx, _)| idx as u32 + 1)
        .collect()
}
