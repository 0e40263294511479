mod coordinator;
mod descriptor;
mod errors;
mod executor;
mod patterns;
mod registry;
mod rules;

pub use coordinator::{Coordinator, Job};
pub use descriptor::{Action, MigrationDescriptor, Target};
pub use errors::MigrationError;
pub use executor::{display_path, execute, Execution};
pub use patterns::{TriggerCatalog, TriggerId};
pub use registry::{all, version_rank};
pub use rules::{apply_content, apply_rules, compile_rules, Passes, RewriteRule};
