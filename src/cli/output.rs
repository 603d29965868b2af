//! CLI output: error mapping and usage text.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("Error: {}", e)
}

/// Usage message printed when no usable directory was given
pub fn usage(reason: Option<&str>) -> String {
    let body = "Usage: treehash <DIRECTORY> [--mode sequential|concurrent|both] [--format text|json]\n\
                Computes a deterministic fingerprint of DIRECTORY. Run with --help for all options.";
    match reason {
        Some(reason) => format!("{}\n{}", reason, body),
        None => body.to_string(),
    }
}
