//! External Checker Collaborator
//!
//! Wire model of the checker's report plus the process handle that loads
//! and invokes the checker program.

pub mod engine;
pub mod report;

pub use engine::{CheckOptions, Checker};
pub use report::{CheckReport, RawDiagnostic};
