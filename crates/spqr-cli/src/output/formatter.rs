//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use spqr_core::ScaffoldReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of generating a project
    fn format_scaffold_result(&self, operation: &str, report: &ScaffoldReport) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
