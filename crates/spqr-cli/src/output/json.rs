//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use spqr_core::ScaffoldReport;
use std::io;
use std::io::Write;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct ExtractionOutput {
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    duration_ms: u128,
}

#[derive(Debug, Serialize)]
struct ScaffoldOutput {
    project_path: String,
    directories_created: usize,
    files_written: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    extraction: Option<ExtractionOutput>,
    warnings: Vec<String>,
    duration_ms: u128,
}

impl From<&ScaffoldReport> for ScaffoldOutput {
    fn from(report: &ScaffoldReport) -> Self {
        Self {
            project_path: report.project_path.display().to_string(),
            directories_created: report.directories_created,
            files_written: report.files_written,
            extraction: report.extraction.as_ref().map(|e| ExtractionOutput {
                files_extracted: e.files_extracted,
                directories_created: e.directories_created,
                bytes_written: e.bytes_written,
                duration_ms: e.duration.as_millis(),
            }),
            warnings: report.warnings.clone(),
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_scaffold_result(&self, operation: &str, report: &ScaffoldReport) -> Result<()> {
        Self::output(&JsonOutput::success(operation, ScaffoldOutput::from(report)))
    }
}
