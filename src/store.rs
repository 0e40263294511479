use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How a directory-scoped migration selects files while walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMatcher {
    Extension(&'static str),
    Names(&'static [&'static str]),
}

impl FileMatcher {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            FileMatcher::Extension(ext) => Path::new(file_name)
                .extension()
                .is_some_and(|found| found.eq_ignore_ascii_case(ext)),
            FileMatcher::Names(names) => names.contains(&file_name),
        }
    }
}

/// Hierarchical text store the migration engine runs against. The real CLI
/// backs this with the project directory on disk; tests use temp workspaces.
pub trait ContentStore {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> Result<String, StoreError>;
    fn write(&self, path: &Path, content: &str) -> Result<(), StoreError>;
    fn remove(&self, path: &Path) -> Result<(), StoreError>;
    fn walk(&self, dir: &Path, matcher: FileMatcher) -> Result<Vec<PathBuf>, StoreError>;
}

#[derive(Debug)]
pub struct StoreError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl StoreError {
    fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Plain filesystem-backed store.
pub struct DiskStore;

impl ContentStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        fs::read_to_string(path).map_err(|err| StoreError::new(path, err))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::new(path, err))?;
        }
        fs::write(path, content).map_err(|err| StoreError::new(path, err))
    }

    fn remove(&self, path: &Path) -> Result<(), StoreError> {
        fs::remove_file(path).map_err(|err| StoreError::new(path, err))
    }

    fn walk(&self, dir: &Path, matcher: FileMatcher) -> Result<Vec<PathBuf>, StoreError> {
        let mut found = Vec::new();
        walk_dir(dir, matcher, &mut found)?;
        found.sort();
        Ok(found)
    }
}

fn walk_dir(dir: &Path, matcher: FileMatcher, found: &mut Vec<PathBuf>) -> Result<(), StoreError> {
    let entries = fs::read_dir(dir).map_err(|err| StoreError::new(dir, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| StoreError::new(dir, err))?;
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, matcher, found)?;
        } else if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            if matcher.matches(name) {
                found.push(path);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_workspace() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX_EPOCH")
            .as_nanos();
        let root = std::env::temp_dir().join(format!("sveltup-store-test-{}", nanos));
        std::fs::create_dir_all(&root).expect("workspace should be creatable");
        root
    }

    #[test]
    fn write_read_remove_round_trip() {
        let root = unique_workspace();
        let store = DiskStore;
        let path = root.join("config/website.js.ts");

        store.write(&path, "export {};\n").expect("write");
        assert!(store.exists(&path));
        assert_eq!(store.read(&path).expect("read"), "export {};\n");

        store.remove(&path).expect("remove");
        assert!(!store.exists(&path));

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn read_missing_file_reports_path() {
        let root = unique_workspace();
        let store = DiskStore;
        let missing = root.join("nope.ts");
        let err = store.read(&missing).expect_err("missing file should fail");
        assert!(err.to_string().contains("nope.ts"));
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn walk_filters_by_extension_and_name() {
        let root = unique_workspace();
        let store = DiskStore;
        store
            .write(&root.join("src/lib/a.ts"), "let a;")
            .expect("write");
        store
            .write(&root.join("src/lib/deep/b.ts"), "let b;")
            .expect("write");
        store
            .write(&root.join("src/lib/c.svelte"), "<div/>")
            .expect("write");

        let ts_files = store
            .walk(&root.join("src/lib"), FileMatcher::Extension("ts"))
            .expect("walk");
        assert_eq!(ts_files.len(), 2);

        let pages = store
            .walk(&root.join("src"), FileMatcher::Names(&["c.svelte"]))
            .expect("walk");
        assert_eq!(pages, vec![root.join("src/lib/c.svelte")]);

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn matcher_names_requires_exact_file_name() {
        let matcher = FileMatcher::Names(&["+page.svelte", "+layout.svelte"]);
        assert!(matcher.matches("+page.svelte"));
        assert!(!matcher.matches("page.svelte"));
        assert!(!matcher.matches("+page.svelte.bak"));
    }
}
