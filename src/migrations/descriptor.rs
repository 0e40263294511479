use std::path::PathBuf;

use super::patterns::TriggerId;
use super::rules::{Passes, RewriteRule};
use crate::store::FileMatcher;

/// What a descriptor points at: one file, or every matching file under a
/// directory.
#[derive(Debug, Clone)]
pub enum Target {
    File(PathBuf),
    Dir { dir: PathBuf, matcher: FileMatcher },
}

/// What a descriptor does once a target file is selected.
pub enum Action {
    /// Line-oriented rewrite through the rule engine.
    Rewrite {
        rules: &'static [RewriteRule],
        passes: Passes,
    },
    /// Write an embedded template when `marker` is absent from the file's
    /// content, creating the file if it does not exist yet.
    Seed {
        marker: &'static str,
        template: &'static str,
    },
}

/// The declarative record for one historical breaking change. The executor is
/// the only interpreter; nothing here has behavior of its own.
pub struct MigrationDescriptor {
    pub id: &'static str,
    /// Tool version this change shipped in; the registry orders by it.
    pub introduced_in: &'static str,
    pub target: Target,
    /// OR-matched; any hit means the migration applies. Empty means the
    /// descriptor never applies through trigger scanning (Seed actions carry
    /// their own marker check instead).
    pub triggers: &'static [TriggerId],
    /// Substring that must be present in the file before rules are
    /// considered, independent of trigger matching.
    pub gatekeeper: Option<&'static str>,
    pub action: Action,
}
