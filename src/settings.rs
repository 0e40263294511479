use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::migrations::MigrationError;
use crate::store::{ContentStore, FileMatcher};

pub const SETTINGS_FILE: &str = "sveltup.json";

/// Persisted project settings. This file is the only place the tool records
/// which CLI version last touched the project; every other migration is
/// driven by content triggers, never by this version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSettings {
    pub name: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub sitemap: SitemapSettings,
    pub sveltup: CliSettings,
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SitemapSettings {
    #[serde(rename = "changeFreq")]
    pub change_freq: String,
    pub priority: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliSettings {
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeSettings {
    pub id: String,
    pub name: String,
}

/// Outcome of the settings step of a `migrate` run.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingsMigration {
    Created,
    Bumped { from: String },
    UpToDate,
}

pub fn load(
    store: &dyn ContentStore,
    root: &Path,
) -> Result<Option<ProjectSettings>, MigrationError> {
    let path = root.join(SETTINGS_FILE);
    if !store.exists(&path) {
        return Ok(None);
    }
    let content = store.read(&path)?;
    let settings = serde_json::from_str(&content)
        .map_err(|err| MigrationError::Settings(path.clone(), err))?;
    Ok(Some(settings))
}

/// Creates `sveltup.json` for projects generated before it existed, or bumps
/// the recorded CLI version when an older tool wrote it last. Projects that
/// are already current are left byte-identical.
pub fn ensure_settings(
    store: &dyn ContentStore,
    root: &Path,
    tool_version: &str,
) -> Result<SettingsMigration, MigrationError> {
    let path = root.join(SETTINGS_FILE);
    match load(store, root)? {
        None => {
            let settings = ProjectSettings {
                name: project_name(store, root)?,
                base_url: format!("http://{}.com", project_name(store, root)?),
                sitemap: SitemapSettings {
                    change_freq: "monthly".to_string(),
                    priority: 0.5,
                },
                sveltup: CliSettings {
                    version: tool_version.to_string(),
                },
                theme: detect_theme(store, root)?,
            };
            write_settings(store, &path, &settings)?;
            Ok(SettingsMigration::Created)
        }
        Some(mut settings) => {
            if settings.sveltup.version == tool_version {
                return Ok(SettingsMigration::UpToDate);
            }
            let from = settings.sveltup.version.clone();
            settings.sveltup.version = tool_version.to_string();
            write_settings(store, &path, &settings)?;
            Ok(SettingsMigration::Bumped { from })
        }
    }
}

fn write_settings(
    store: &dyn ContentStore,
    path: &Path,
    settings: &ProjectSettings,
) -> Result<(), MigrationError> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|err| MigrationError::Settings(path.to_path_buf(), err))?;
    store.write(path, &format!("{}\n", json))?;
    Ok(())
}

/// Project name from package.json, falling back to the root folder name for
/// projects without one.
fn project_name(store: &dyn ContentStore, root: &Path) -> Result<String, MigrationError> {
    let pkg_path = root.join("package.json");
    if store.exists(&pkg_path) {
        let content = store.read(&pkg_path)?;
        let doc: serde_json::Value = serde_json::from_str(&content)
            .map_err(|err| MigrationError::Settings(pkg_path.clone(), err))?;
        if let Some(name) = doc.get("name").and_then(|value| value.as_str()) {
            return Ok(name.to_string());
        }
        return Err(MigrationError::MissingField(pkg_path, "name"));
    }
    Ok(root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sveltup-project".to_string()))
}

/// The theme is whichever folder under themes/ carries a theme.config.js.
fn detect_theme(store: &dyn ContentStore, root: &Path) -> Result<ThemeSettings, MigrationError> {
    let themes_dir = root.join("themes");
    if store.exists(&themes_dir) {
        let configs = store.walk(&themes_dir, FileMatcher::Names(&["theme.config.js"]))?;
        if let Some(config) = configs.first() {
            if let Some(folder) = config
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned())
            {
                let id = if folder.starts_with("sveltup") {
                    "sveltup".to_string()
                } else {
                    "blank".to_string()
                };
                return Ok(ThemeSettings { id, name: folder });
            }
        }
    }
    Ok(ThemeSettings {
        id: "blank".to_string(),
        name: String::new(),
    })
}
