//! Checker Invocation
//!
//! The checker is a separate program (a JSHint-compatible CLI). It is
//! located and verified once per process; each validation run then spawns
//! it with the source text on stdin, the pass-through options and the
//! allowed globals as JSON arguments, and a JSON report expected on
//! stdout.

use std::process::Stdio;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::checker::report::CheckReport;
use crate::config::Config;

/// Options forwarded to the checker for one validation run
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Pass-through checker options, forwarded verbatim
    pub options: Map<String, Value>,
    /// Allowed global identifiers, forwarded separately
    pub globals: Map<String, Value>,
}

impl CheckOptions {
    /// Build options from a raw configuration object, extracting the
    /// `globals` key the checker expects as a separate argument. Every
    /// other key passes through untouched.
    pub fn split_globals(mut options: Map<String, Value>) -> Self {
        let globals = match options.remove("globals") {
            Some(Value::Object(globals)) => globals,
            _ => Map::new(),
        };
        Self { options, globals }
    }
}

/// Handle to a located checker program.
///
/// Obtained once via [`Checker::locate`] and owned by the caller; there is
/// no hidden process-wide state here. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Checker {
    program: String,
}

impl Checker {
    /// Locate the configured checker program, verifying that it runs.
    ///
    /// This is the load step the backend performs once per process.
    pub async fn locate(config: &Config) -> Result<Checker> {
        let program = config.checker_cmd.clone();
        let output = Command::new(&program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .with_context(|| format!("checker '{program}' could not be started"))?;

        if !output.status.success() {
            anyhow::bail!("checker '{program}' exited with {}", output.status);
        }

        let version = String::from_utf8_lossy(&output.stdout);
        log::info!("using checker {program} ({})", version.trim());
        Ok(Checker { program })
    }

    /// Run the checker over `text` and parse its JSON report.
    pub async fn run(&self, text: &str, options: &CheckOptions) -> Result<CheckReport> {
        let mut child = Command::new(&self.program)
            .arg("--options")
            .arg(serde_json::to_string(&options.options)?)
            .arg("--globals")
            .arg(serde_json::to_string(&options.globals)?)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn checker '{}'", self.program))?;

        let mut stdin = child
            .stdin
            .take()
            .context("checker stdin should be piped")?;
        stdin.write_all(text.as_bytes()).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        // A non-zero exit only means the run found issues; the report
        // body is authoritative either way
        serde_json::from_slice(&output.stdout).context("checker produced an unreadable report")
    }
}
