//! Subcommand implementations.

pub mod coffee;
pub mod completion;
pub mod create;

use anyhow::Context;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Directory new projects are created in.
fn base_dir(dir: Option<&PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.clone()),
        None => env::current_dir().context("failed to get current directory"),
    }
}
