//! CLI parse: clap types for treehash. No behavior; definitions only.

use crate::tree::HashMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// treehash - Deterministic directory tree fingerprints
#[derive(Parser, Debug)]
#[command(name = "treehash")]
#[command(about = "Compute a deterministic content fingerprint for a directory tree")]
pub struct Cli {
    /// Directory to fingerprint
    pub path: Option<PathBuf>,

    /// Execution mode (both runs sequential and concurrent and compares them)
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    pub mode: ModeArg,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Maximum simultaneous directory listings and file reads in concurrent mode
    #[arg(long)]
    pub max_open_files: Option<usize>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Mode selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Sequential,
    Concurrent,
    Both,
}

impl ModeArg {
    /// Modes to run, in order
    pub fn modes(self) -> Vec<HashMode> {
        match self {
            ModeArg::Sequential => vec![HashMode::Sequential],
            ModeArg::Concurrent => vec![HashMode::Concurrent],
            ModeArg::Both => vec![HashMode::Sequential, HashMode::Concurrent],
        }
    }
}
