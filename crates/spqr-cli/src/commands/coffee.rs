//! Spring Boot project command implementation.

use super::base_dir;
use crate::cli::CoffeeArgs;
use crate::error::convert_scaffold_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use crate::prompt::TermPrompter;
use anyhow::Result;
use anyhow::bail;
use spqr_core::ExtractionConfig;
use spqr_core::NoopProgress;
use spqr_core::scaffold::LocalArchive;
use spqr_core::scaffold::SpringAnswers;
use spqr_core::scaffold::SpringProject;
use spqr_core::scaffold::scaffold_spring;

pub fn execute(args: &CoffeeArgs, formatter: &dyn OutputFormatter, silent: bool) -> Result<()> {
    let base = base_dir(args.dir.as_ref())?;

    let answers = SpringAnswers {
        name: args.name.clone(),
        package: args.package.clone(),
    };
    let project = SpringProject::interview(answers, &mut TermPrompter::new())
        .map_err(|e| convert_scaffold_error(e, None))?;

    let Some(archive) = &args.archive else {
        bail!(
            "No starter archive given\n\
             HINT: Download it from {}\n\
             and pass the file with --archive.",
            project.starter_url()
        );
    };

    let config = if args.ignore_permissions {
        ExtractionConfig::without_permissions()
    } else {
        ExtractionConfig::default()
    };
    let source = LocalArchive::new(archive);

    let result = if !silent && CliProgress::should_show() {
        let mut progress = CliProgress::new("Unpacking");
        scaffold_spring(&project, &base, &source, &config, &mut progress)
    } else {
        scaffold_spring(&project, &base, &source, &config, &mut NoopProgress)
    };
    let report = result.map_err(|e| convert_scaffold_error(e, Some(archive.as_path())))?;

    formatter.format_scaffold_result("coffee", &report)
}
