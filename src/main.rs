mod cli;
mod completions;
mod migrate;
mod migrations;
mod prompt;
mod settings;
mod store;
mod ui;

use std::error::Error;
use std::fmt;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

#[derive(Debug)]
enum CliError {
    Migrate(migrate::MigrateError),
    Completions(completions::CompletionsError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Migrate(err) => write!(f, "{}", err),
            CliError::Completions(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Migrate(err) => Some(err),
            CliError::Completions(err) => Some(err),
        }
    }
}

fn run() -> Result<i32, CliError> {
    use clap::Parser;
    use cli::Commands;

    let cli = cli::Cli::parse();
    match cli.command {
        Commands::Migrate(args) => {
            let outcome =
                migrate::run(&cli.project_root, args.yes).map_err(CliError::Migrate)?;
            match outcome {
                migrate::MigrateOutcome::Completed { failures } if failures > 0 => Ok(1),
                _ => Ok(0),
            }
        }
        Commands::Completions(args) => {
            completions::run_completions_command(args.shell.as_deref(), args.install)
                .map_err(CliError::Completions)?;
            Ok(0)
        }
    }
}
