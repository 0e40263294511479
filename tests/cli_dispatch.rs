use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn unique_workspace(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX_EPOCH")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("{prefix}-{}", nanos));
    std::fs::create_dir_all(&path).expect("workspace should be creatable");
    path
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("parent should be creatable");
    }
    std::fs::write(path, content).expect("fixture should be writable");
}

fn run_sveltup(project_root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sveltup"))
        .arg("--project-root")
        .arg(project_root)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("sveltup binary should run")
}

fn legacy_project(root: &Path) {
    write(
        root,
        "package.json",
        "{\n  \"name\": \"portfolio\",\n  \"devDependencies\": {\n    \"remark-slug\": \"^7.0.1\",\n    \"svelte\": \"^3.49.0\"\n  }\n}\n",
    );
    write(
        root,
        "config/website.js.ts",
        "import { IWebSite } from '../src/types';\n\nconst website: IWebSite = {\nname: 'portfolio',\n};\n\nexport { website };\n",
    );
    write(
        root,
        "src/routes/+layout.ts",
        "export const prerender = 'auto';\nexport const trailingSlash = 'always';\n",
    );
}

#[test]
fn migrate_rewrites_a_legacy_project_and_reports_paths() {
    let root = unique_workspace("sveltup-cli-migrate");
    legacy_project(&root);

    let output = run_sveltup(&root, &["migrate", "--yes"]);
    assert!(
        output.status.success(),
        "migrate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Creating sveltup.json"));
    assert!(stdout.contains("Migrating config/website.js.ts"));
    assert!(stdout.contains("Migrating src/routes/+layout.ts"));
    assert!(stdout.contains("ready for sveltup"));

    let website =
        std::fs::read_to_string(root.join("config/website.js.ts")).expect("should read");
    assert!(website.contains("import type { Sveltup } from '$sveltup';"));
    assert!(website.contains("const website: Sveltup.WebSite = {"));

    let layout = std::fs::read_to_string(root.join("src/routes/+layout.ts")).expect("should read");
    assert!(layout.contains("export const prerender = true;"));

    let dts = std::fs::read_to_string(root.join("src/sveltup.d.ts")).expect("should read");
    assert!(dts.contains("declare namespace Sveltup"));

    let settings: Value = serde_json::from_str(
        &std::fs::read_to_string(root.join("sveltup.json")).expect("should read"),
    )
    .expect("settings should be valid json");
    assert_eq!(settings["name"], "portfolio");
    assert_eq!(settings["sveltup"]["version"], env!("CARGO_PKG_VERSION"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn second_migrate_run_rewrites_nothing() {
    let root = unique_workspace("sveltup-cli-rerun");
    legacy_project(&root);

    let first = run_sveltup(&root, &["migrate", "--yes"]);
    assert!(first.status.success());

    let website_before =
        std::fs::read_to_string(root.join("config/website.js.ts")).expect("should read");

    let second = run_sveltup(&root, &["migrate", "--yes"]);
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(
        !stdout.contains("Migrating config/"),
        "second run should find nothing to migrate: {stdout}"
    );

    let website_after =
        std::fs::read_to_string(root.join("config/website.js.ts")).expect("should read");
    assert_eq!(website_before, website_after);

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn migrate_without_confirmation_aborts() {
    let root = unique_workspace("sveltup-cli-abort");
    legacy_project(&root);

    let output = Command::new(env!("CARGO_BIN_EXE_sveltup"))
        .arg("--project-root")
        .arg(&root)
        .arg("migrate")
        .env("NO_COLOR", "1")
        .stdin(std::process::Stdio::null())
        .output()
        .expect("sveltup binary should run");

    // Empty stdin reads as "no"; nothing may be touched.
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("aborted"));
    assert!(!root.join("sveltup.json").exists());

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn completions_are_generated_for_a_named_shell() {
    let root = unique_workspace("sveltup-cli-completions");

    let output = run_sveltup(&root, &["completions", "bash"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sveltup"));

    let unknown = run_sveltup(&root, &["completions", "nonsense"]);
    assert!(!unknown.status.success());
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("unknown shell"));

    let _ = std::fs::remove_dir_all(root);
}
