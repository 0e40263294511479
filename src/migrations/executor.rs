use std::path::{Path, PathBuf};

use super::descriptor::{Action, MigrationDescriptor, Target};
use super::errors::MigrationError;
use super::patterns::TriggerCatalog;
use super::rules::{apply_content, compile_rules};
use crate::store::ContentStore;

/// Result of driving one descriptor: either the paths actually rewritten, or
/// nothing needed doing. Absent rewrite targets, absent gatekeepers, and
/// unmatched triggers are all skips, never errors; an absent seed target is
/// created.
#[derive(Debug, PartialEq, Eq)]
pub enum Execution {
    Applied { rewritten: Vec<PathBuf> },
    Skipped,
}

/// Runs one descriptor against the store: resolve targets, then per file
/// check existence, gatekeeper, and triggers before rewriting. Write-back is
/// remove-then-write so a failed write never leaves stale content behind a
/// different file mode.
pub fn execute(
    descriptor: &MigrationDescriptor,
    store: &dyn ContentStore,
    catalog: &TriggerCatalog,
) -> Result<Execution, MigrationError> {
    let targets = resolve_targets(&descriptor.target, store)?;
    let compiled = match &descriptor.action {
        Action::Rewrite { rules, .. } => compile_rules(rules),
        Action::Seed { .. } => Vec::new(),
    };
    let mut rewritten = Vec::new();

    for path in targets {
        let existing = if store.exists(&path) {
            Some(store.read(&path)?)
        } else {
            None
        };

        let new_content = match &descriptor.action {
            Action::Rewrite { passes, .. } => {
                // Rewrites need an existing file; seeds create one.
                let Some(content) = existing.as_deref() else {
                    continue;
                };
                if let Some(gatekeeper) = descriptor.gatekeeper {
                    if !content.contains(gatekeeper) {
                        continue;
                    }
                }
                if !catalog.requires_migration(content, descriptor.triggers) {
                    continue;
                }
                apply_content(content, &compiled, *passes)
            }
            Action::Seed { marker, template } => {
                if existing
                    .as_deref()
                    .is_some_and(|content| content.contains(marker))
                {
                    continue;
                }
                (*template).to_string()
            }
        };

        if existing.is_some() {
            store.remove(&path)?;
        }
        store.write(&path, &new_content)?;
        rewritten.push(path);
    }

    if rewritten.is_empty() {
        Ok(Execution::Skipped)
    } else {
        Ok(Execution::Applied { rewritten })
    }
}

fn resolve_targets(
    target: &Target,
    store: &dyn ContentStore,
) -> Result<Vec<PathBuf>, MigrationError> {
    match target {
        Target::File(path) => Ok(vec![path.clone()]),
        Target::Dir { dir, matcher } => {
            if !store.exists(dir) {
                return Ok(Vec::new());
            }
            Ok(store.walk(dir, *matcher)?)
        }
    }
}

/// Path shown in "Migrating …" output: relative to the project root when
/// possible.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
