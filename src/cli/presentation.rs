//! Presentation: hash outcome formatters (text table and JSON).

use crate::error::ApiError;
use crate::tree::HashReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Everything one CLI invocation computed
#[derive(Debug, Clone)]
pub struct HashOutcome {
    pub path: PathBuf,
    pub computed_at: String,
    pub reports: Vec<HashReport>,
}

impl HashOutcome {
    /// Whether all modes agree; None when only one mode ran
    pub fn matches(&self) -> Option<bool> {
        match self.reports.split_first() {
            Some((first, rest)) if !rest.is_empty() => {
                Some(rest.iter().all(|r| r.digest == first.digest))
            }
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ReportView {
    mode: String,
    digest: String,
    elapsed_ms: f64,
}

#[derive(Serialize)]
struct OutcomeView {
    path: String,
    computed_at: String,
    reports: Vec<ReportView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<bool>,
}

fn elapsed_ms(report: &HashReport) -> f64 {
    report.elapsed.as_secs_f64() * 1000.0
}

pub fn format_outcome_text(outcome: &HashOutcome, color: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Mode", "Digest", "Elapsed"]);
    for report in &outcome.reports {
        table.add_row(vec![
            report.mode.to_string(),
            report.hex(),
            format!("{:.3} ms", elapsed_ms(report)),
        ]);
    }

    let mut s = format!("Tree hash for {}\n{}", outcome.path.display(), table);
    if outcome.matches() == Some(false) {
        let warning = "WARNING: sequential and concurrent digests differ";
        if color {
            s.push_str(&format!("\n{}", warning.red().bold()));
        } else {
            s.push_str(&format!("\n{}", warning));
        }
    }
    s
}

pub fn format_outcome_json(outcome: &HashOutcome) -> Result<String, ApiError> {
    let view = OutcomeView {
        path: outcome.path.display().to_string(),
        computed_at: outcome.computed_at.clone(),
        reports: outcome
            .reports
            .iter()
            .map(|r| ReportView {
                mode: r.mode.to_string(),
                digest: r.hex(),
                elapsed_ms: elapsed_ms(r),
            })
            .collect(),
        matches: outcome.matches(),
    };
    serde_json::to_string_pretty(&view).map_err(|e| ApiError::OutputError(e.to_string()))
}
