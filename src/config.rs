//! Configuration management for the JSHint language server.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration file with the checker command, the
//!   pass-through checker options and the allowed globals

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::checker::CheckOptions;

/// Command-line arguments for the JSHint language server
#[derive(Debug, Parser)]
#[command(name = "jshint-language-server")]
#[command(about = "Language server publishing normalized JSHint diagnostics")]
#[command(version)]
pub struct Args {
    /// Checker program to invoke
    #[arg(long, help = "Checker executable to run, e.g. 'jshint'")]
    pub checker: Option<String>,

    /// Configuration file location
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config_file: Option<PathBuf>,

    /// Additional allowed global identifiers
    #[arg(long = "global", help = "Allow a global identifier (repeatable)")]
    pub globals: Vec<String>,

    /// Log level for the language server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// On-disk configuration file structure (TOML)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Checker executable
    pub checker: Option<String>,
    /// Checker options, forwarded verbatim; may carry a nested `globals`
    /// table which is split out before invocation
    #[serde(default)]
    pub options: toml::Table,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Checker executable to run
    pub checker_cmd: String,
    /// Checker options object, including any embedded `globals` mapping
    pub options: Map<String, Value>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config_file {
            Some(path) => load_config_file(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?,
            None => load_default_config_file()?,
        };

        let checker_cmd = args
            .checker
            .or(file.checker)
            .unwrap_or_else(|| "jshint".to_string());

        let mut options = table_to_json(file.options)?;
        merge_cli_globals(&mut options, &args.globals);

        Ok(Config {
            checker_cmd,
            options,
            log_level: args.log_level,
        })
    }

    /// Per-run checker options with the `globals` mapping split out
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions::split_globals(self.options.clone())
    }
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load the config file from the default user location, if one exists
fn load_default_config_file() -> Result<ConfigFile> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ConfigFile::default());
    };

    let path = config_dir.join("jshint-ls").join("config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    load_config_file(&path)
        .with_context(|| format!("failed to load config file {}", path.display()))
}

/// Convert the TOML options table into the JSON object the checker takes
fn table_to_json(table: toml::Table) -> Result<Map<String, Value>> {
    match serde_json::to_value(table)? {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("checker options must be a table"),
    }
}

/// Fold `--global NAME` arguments into the options' globals mapping
fn merge_cli_globals(options: &mut Map<String, Value>, globals: &[String]) {
    if globals.is_empty() {
        return;
    }

    let entry = options
        .entry("globals".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(map) = entry {
        for name in globals {
            map.insert(name.clone(), Value::Bool(true));
        }
    }
}
