use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use crate::migrations::{self, Coordinator, Execution, MigrationError, TriggerCatalog};
use crate::prompt;
use crate::settings::{self, SettingsMigration};
use crate::store::DiskStore;
use crate::ui::Palette;

pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq, Eq)]
pub enum MigrateOutcome {
    Declined,
    Completed { failures: usize },
}

#[derive(Debug)]
pub enum MigrateError {
    Prompt(io::Error),
    Settings(MigrationError),
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Prompt(err) => write!(f, "prompt error: {}", err),
            MigrateError::Settings(err) => write!(f, "project settings error: {}", err),
        }
    }
}

impl Error for MigrateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MigrateError::Prompt(err) => Some(err),
            MigrateError::Settings(err) => Some(err),
        }
    }
}

/// Drives one `migrate` invocation: confirm, settle `sveltup.json`, then run
/// every registered descriptor in version order through the coordinator.
/// Descriptor failures are reported and skipped over; migrations are
/// independent and idempotent, so a re-run after fixing the cause is safe.
pub fn run(root: &Path, assume_yes: bool) -> Result<MigrateOutcome, MigrateError> {
    let palette = Palette::auto();
    println!(
        "{}",
        palette.heading(&format!("Migrating your project to sveltup v{TOOL_VERSION}"))
    );

    if !assume_yes && !prompt::confirm("Continue?").map_err(MigrateError::Prompt)? {
        println!("{}", palette.dim("aborted"));
        return Ok(MigrateOutcome::Declined);
    }

    let store = DiskStore;
    match settings::ensure_settings(&store, root, TOOL_VERSION).map_err(MigrateError::Settings)? {
        SettingsMigration::Created => {
            println!("Creating {}", palette.path(settings::SETTINGS_FILE));
        }
        SettingsMigration::Bumped { from } => {
            println!(
                "Bumping sveltup version in {} ({} -> {})",
                palette.path(settings::SETTINGS_FILE),
                from,
                TOOL_VERSION
            );
        }
        SettingsMigration::UpToDate => {}
    }

    let catalog = TriggerCatalog::new();
    let store = &store;
    let catalog = &catalog;
    let palette = &palette;
    let mut coordinator = Coordinator::new();
    let mut failures = 0usize;

    for descriptor in migrations::all(root) {
        let id = descriptor.id;
        let result = coordinator.run(Box::new(move |_| {
            match migrations::execute(&descriptor, store, catalog)? {
                Execution::Applied { rewritten } => {
                    for path in rewritten {
                        println!(
                            "Migrating {}",
                            palette.path(&migrations::display_path(&path, root))
                        );
                    }
                }
                Execution::Skipped => {}
            }
            Ok(())
        }));
        if let Err(err) = result {
            failures += 1;
            eprintln!("migration '{}' failed: {}", id, err);
        }
    }

    if failures == 0 {
        println!(
            "{}",
            palette.success(&format!("Your project is ready for sveltup v{TOOL_VERSION}"))
        );
    } else {
        println!(
            "{}",
            palette.dim(&format!(
                "{failures} migration(s) failed; fix the reported paths and re-run sveltup migrate"
            ))
        );
    }

    Ok(MigrateOutcome::Completed { failures })
}
