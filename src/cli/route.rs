//! CLI route: run context that dispatches a parsed command to the hashing API.

use crate::api;
use crate::cli::output::usage;
use crate::cli::parse::Cli;
use crate::cli::presentation::{format_outcome_json, format_outcome_text, HashOutcome};
use crate::config::{ConfigLoader, TreehashConfig};
use crate::error::ApiError;
use crate::tree::{HashMode, HashReport, TreeHasher};
use chrono::{SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: the loaded configuration.
pub struct RunContext {
    config: TreehashConfig,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    ///
    /// The loaded configuration is validated before it is accepted.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self::with_config(config))
    }

    pub fn with_config(config: TreehashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreehashConfig {
        &self.config
    }

    /// Run the command and return the text to print on stdout.
    pub fn execute(&self, cli: &Cli) -> Result<String, ApiError> {
        let path = match &cli.path {
            Some(path) if path.exists() => path.clone(),
            Some(path) => {
                return Ok(usage(Some(&format!(
                    "Directory not found: {}",
                    path.display()
                ))))
            }
            None => return Ok(usage(None)),
        };

        let mut hashing = self.config.hashing.clone();
        if let Some(max_open_files) = cli.max_open_files {
            hashing.max_open_files = max_open_files;
        }
        hashing.validate().map_err(ApiError::ConfigError)?;

        let outcome = if cli.mode.modes().len() > 1 {
            let comparison = api::compare_modes(&path, &hashing)?;
            outcome(&path, comparison.reports().into_iter().cloned().collect())
        } else {
            let tree = TreeHasher::new(path.clone()).with_config(hashing);
            let reports = cli
                .mode
                .modes()
                .into_iter()
                .map(|mode: HashMode| tree.compute_timed(mode))
                .collect::<Result<Vec<_>, _>>()?;
            outcome(&path, reports)
        };
        info!(path = %path.display(), matches = ?outcome.matches(), "Hashing finished");

        match cli.format.as_str() {
            "json" => format_outcome_json(&outcome),
            "text" => Ok(format_outcome_text(&outcome, self.config.logging.color)),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

fn outcome(path: &Path, reports: Vec<HashReport>) -> HashOutcome {
    HashOutcome {
        path: path.to_path_buf(),
        computed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        reports,
    }
}
