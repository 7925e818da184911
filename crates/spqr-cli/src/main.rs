//! SPQR CLI - generates hexagonal Go and Spring Boot projects.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;
mod prompt;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Create(args) => commands::create::execute(args, &*formatter),
        cli::Commands::Coffee(args) => {
            commands::coffee::execute(args, &*formatter, cli.quiet || cli.json)
        }
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
