use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, CommandFactory, Parser, Subcommand};

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::BrightMagenta.on_default())
}

#[derive(Debug, Parser)]
#[command(name = "sveltup")]
#[command(bin_name = "sveltup")]
#[command(version)]
#[command(about = "Upgrades SvelteKit projects scaffolded by older sveltup releases")]
#[command(styles = cli_styles())]
pub struct Cli {
    #[arg(
        short = 'C',
        long,
        env = "SVELTUP_PROJECT_ROOT",
        default_value = ".",
        help = "Project root containing sveltup.json (or the project to adopt)."
    )]
    pub project_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Update project files to the latest sveltup conventions.")]
    Migrate(MigrateArgs),
    #[command(about = "Generate or install shell completions.")]
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
#[command(about = "Update project files to the latest sveltup conventions.")]
pub struct MigrateArgs {
    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt.")]
    pub yes: bool,
}

#[derive(Debug, Args)]
#[command(about = "Generate or install shell completions.")]
pub struct CompletionsArgs {
    #[arg(help = "Shell name (bash, zsh, fish). Auto-detected if omitted.")]
    pub shell: Option<String>,

    #[arg(
        short = 'i',
        long = "install",
        help = "Write completions to the canonical path for the shell."
    )]
    pub install: bool,
}

pub fn styled_command() -> clap::Command {
    Cli::command()
}
