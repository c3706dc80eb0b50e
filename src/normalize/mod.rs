//! Diagnostic Normalization
//!
//! Converts the checker's raw report into editor-ready annotations:
//! tab-skewed columns are corrected, severities classified, known-bogus
//! messages suppressed and highlight spans computed.

pub mod engine;
pub mod rules;
pub mod tabs;

pub use engine::{LintAnnotation, Normalizer, Position, Severity};

// Re-export common types
pub use tabs::TabOffsetCache;
