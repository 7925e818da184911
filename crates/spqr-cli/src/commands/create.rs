//! Go project command implementation.

use super::base_dir;
use crate::cli::CreateArgs;
use crate::error::convert_scaffold_error;
use crate::output::OutputFormatter;
use crate::prompt::TermPrompter;
use anyhow::Result;
use spqr_core::scaffold::GoAnswers;
use spqr_core::scaffold::GoProject;
use spqr_core::scaffold::SystemToolchain;
use spqr_core::scaffold::scaffold_go;

pub fn execute(args: &CreateArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let base = base_dir(args.dir.as_ref())?;

    let answers = GoAnswers {
        name: args.name.clone(),
        database: args.database,
        db_user: args.db_user.clone(),
        db_password: args.db_password.clone(),
        db_name: args.db_name.clone(),
        db_port: args.db_port.clone(),
    };
    let mut project = GoProject::interview(answers, &mut TermPrompter::new())
        .map_err(|e| convert_scaffold_error(e, None))?;
    project.init_module = !args.skip_go_mod;

    let report = scaffold_go(&project, &base, &mut SystemToolchain)
        .map_err(|e| convert_scaffold_error(e, None))?;

    formatter.format_scaffold_result("create", &report)
}
