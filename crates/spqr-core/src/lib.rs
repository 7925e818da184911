//! Hexagonal project scaffolding with path-traversal-safe template
//! extraction.
//!
//! `spqr-core` generates Go and Spring Boot project skeletons. The Spring
//! Boot layout starts from a starter zip archive, which is unpacked by an
//! extractor that refuses any entry resolving outside its destination.
//!
//! # Examples
//!
//! ```no_run
//! use spqr_core::extract;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract("starter.zip", "/tmp/demo")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod formats;
pub mod report;
pub mod scaffold;
pub mod security;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract;
pub use api::extract_with_progress;
pub use config::ExtractionConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use error::ScaffoldError;
pub use error::ScaffoldResult;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use report::ScaffoldReport;

pub use types::DestDir;
pub use types::EntryType;
pub use types::SafePath;
