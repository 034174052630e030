//! JSON report persistence

use crate::refactor;
use crate::{AnalysisResult, Issue, Status};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the persisted report; always fully overwritten
pub const REPORT_FILENAME: &str = "report.json";

/// Snapshot persisted after every run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// ISO-8601 timestamp, generated when the report is built
    pub timestamp: String,
    pub quality_score: f64,
    pub status: Status,
    pub issues_found: usize,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub original_code: String,
    pub refactored_code: String,
}

/// Reporter that persists the run as a JSON file
pub struct JsonReporter {
    path: PathBuf,
}

impl JsonReporter {
    /// Create a reporter targeting `report.json` in the working directory
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(REPORT_FILENAME),
        }
    }

    /// Write the report somewhere other than the default path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the report snapshot with a fresh timestamp. The status label is
    /// recomputed from the score with the same thresholds the console uses.
    pub fn build(&self, result: &AnalysisResult, original: &str) -> Report {
        Report {
            timestamp: Utc::now().to_rfc3339(),
            quality_score: result.score,
            status: result.status(),
            issues_found: result.issues.len(),
            issues: result.issues.clone(),
            suggestions: result.suggestions.clone(),
            original_code: original.to_string(),
            refactored_code: refactor::rewrite(original),
        }
    }

    /// Serialize and persist, fully overwriting any previous report. Any I/O
    /// failure is fatal to the run; there is no retry or partial-write
    /// recovery.
    pub fn save(&self, result: &AnalysisResult, original: &str) -> Result<Report> {
        let report = self.build(result, original);
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write report to {}", self.path.display()))?;
        Ok(report)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
