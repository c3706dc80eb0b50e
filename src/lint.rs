//! Validation Entry Point
//!
//! Ties the external checker to the normalization pipeline. This is the
//! operation an editor integration invokes per document revision.

use crate::checker::{CheckOptions, Checker};
use crate::normalize::{LintAnnotation, Normalizer};

/// Run the checker over `text` and return normalized annotations.
///
/// Never fails: a checker that cannot produce a report is logged and
/// degrades to an empty list, so the editor shows no diagnostics rather
/// than an error.
pub async fn validate(
    checker: &Checker,
    text: &str,
    options: &CheckOptions,
) -> Vec<LintAnnotation> {
    match checker.run(text, options).await {
        Ok(report) => Normalizer::new().normalize(&report),
        Err(e) => {
            log::warn!("validation run failed: {e:#}");
            Vec::new()
        }
    }
}
