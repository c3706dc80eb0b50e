//! JSHint Language Server
//!
//! A language server that runs an external JSHint-compatible checker and
//! publishes its findings as normalized editor diagnostics.
//!
//! This library provides:
//! - A wire model for the checker's raw JSON report
//! - The diagnostic normalization pipeline (column correction, severity
//!   classification, noise suppression, span assembly)
//! - LSP protocol implementation
//! - Configuration management

pub mod checker;
pub mod config;
pub mod lint;
pub mod lsp;
pub mod normalize;

// Re-exports for clean public API
pub use checker::{CheckOptions, CheckReport, Checker, RawDiagnostic};
pub use config::Config;
pub use lint::validate;
pub use normalize::{LintAnnotation, Normalizer, Position, Severity};
