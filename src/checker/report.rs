//! Checker Report Types
//!
//! Typed model of the JSON report the external checker writes to stdout.

use serde::Deserialize;

/// Root report structure produced by one checker run
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CheckReport {
    /// Raw diagnostics in checker order. The checker emits a null entry
    /// when it aborts mid-run, so slots are optional.
    #[serde(default)]
    pub errors: Vec<Option<RawDiagnostic>>,
}

/// One issue reported by the checker
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawDiagnostic {
    /// 1-based line number
    pub line: u32,
    /// 1-based column, computed by the checker against tab-expanded text
    pub character: u32,
    /// Human-readable message
    pub reason: String,
    /// Literal text of the offending source line
    pub evidence: Option<String>,
    /// Checker rule code such as "W033"
    pub code: Option<String>,
}
