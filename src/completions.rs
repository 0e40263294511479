use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use clap_complete::{generate, Shell};

#[derive(Debug)]
pub enum CompletionsError {
    InvalidArgument(String),
    Io(io::Error),
}

impl fmt::Display for CompletionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionsError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            CompletionsError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl Error for CompletionsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CompletionsError::InvalidArgument(_) => None,
            CompletionsError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for CompletionsError {
    fn from(err: io::Error) -> Self {
        CompletionsError::Io(err)
    }
}

pub fn generate_completions(shell: Shell, buf: &mut dyn Write) {
    let mut cmd = crate::cli::styled_command();
    generate(shell, &mut cmd, "sveltup", buf);
}

pub fn detect_current_shell() -> Option<Shell> {
    let shell_var = std::env::var("SHELL").ok()?;
    let basename = shell_var.rsplit('/').next()?;
    match basename {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "elvish" => Some(Shell::Elvish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        _ => None,
    }
}

fn completions_install_path_for_home(shell: Shell, home: &std::path::Path) -> Option<PathBuf> {
    match shell {
        Shell::Bash => {
            let dir = home.join(".local/share/bash-completion/completions");
            Some(dir.join("sveltup"))
        }
        Shell::Zsh => {
            let dir = home.join(".config/sveltup/completions");
            Some(dir.join("sveltup.zsh"))
        }
        Shell::Fish => {
            let dir = home.join(".config/fish/completions");
            Some(dir.join("sveltup.fish"))
        }
        _ => None,
    }
}

pub fn install_completions(shell: Shell) -> io::Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let home = PathBuf::from(home);

    let path = completions_install_path_for_home(shell, &home).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no install path for {shell:?}"),
        )
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut buf = Vec::new();
    generate_completions(shell, &mut buf);
    std::fs::write(&path, buf)?;

    if shell == Shell::Zsh {
        patch_zshrc(&home, &path)?;
    }

    Ok(path)
}

fn patch_zshrc(home: &std::path::Path, completions_path: &std::path::Path) -> io::Result<()> {
    let zshrc = home.join(".zshrc");
    let source_line = format!("source \"{}\"", completions_path.display());

    if zshrc.exists() {
        let content = std::fs::read_to_string(&zshrc)?;
        if content.contains(&source_line) {
            return Ok(());
        }
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&zshrc)?;
    writeln!(file)?;
    writeln!(file, "# sveltup shell completions")?;
    writeln!(file, "{source_line}")?;
    Ok(())
}

fn parse_shell(raw: &str) -> Option<Shell> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "elvish" => Some(Shell::Elvish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        _ => None,
    }
}

pub fn run_completions_command(
    shell_arg: Option<&str>,
    install: bool,
) -> Result<(), CompletionsError> {
    let shell = if let Some(name) = shell_arg {
        parse_shell(name)
            .ok_or_else(|| CompletionsError::InvalidArgument(format!("unknown shell '{name}'")))?
    } else {
        detect_current_shell().ok_or_else(|| {
            CompletionsError::InvalidArgument(
                "unable to detect shell from $SHELL; pass a shell name".to_string(),
            )
        })?
    };

    if install {
        let path = install_completions(shell)?;
        println!("completions installed to {}", path.display());
    } else {
        let mut stdout = io::stdout().lock();
        generate_completions(shell, &mut stdout);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn completions_install_path_for_known_shells() {
        let home = PathBuf::from("/tmp/test-home");
        let bash = completions_install_path_for_home(Shell::Bash, &home);
        assert!(bash.unwrap().to_str().unwrap().contains("bash-completion"));
        let zsh = completions_install_path_for_home(Shell::Zsh, &home);
        assert!(zsh.unwrap().to_str().unwrap().contains("sveltup.zsh"));
        let fish = completions_install_path_for_home(Shell::Fish, &home);
        assert!(fish.unwrap().to_str().unwrap().contains("sveltup.fish"));
    }

    #[test]
    fn completions_install_path_returns_none_for_unsupported_shell() {
        let home = PathBuf::from("/tmp/test-home");
        assert!(completions_install_path_for_home(Shell::Elvish, &home).is_none());
        assert!(completions_install_path_for_home(Shell::PowerShell, &home).is_none());
    }

    #[test]
    fn generate_completions_produces_non_empty_output() {
        let mut buf = Vec::new();
        generate_completions(Shell::Bash, &mut buf);
        assert!(!buf.is_empty(), "bash completions should be non-empty");
        let text = String::from_utf8_lossy(&buf);
        assert!(
            text.contains("sveltup"),
            "bash completions should reference sveltup"
        );
    }

    #[test]
    fn parse_shell_is_case_insensitive() {
        assert_eq!(parse_shell("BASH"), Some(Shell::Bash));
        assert_eq!(parse_shell("Zsh"), Some(Shell::Zsh));
        assert_eq!(parse_shell("Fish"), Some(Shell::Fish));
        assert_eq!(parse_shell("elvish"), Some(Shell::Elvish));
        assert_eq!(parse_shell("powershell"), Some(Shell::PowerShell));
        assert_eq!(parse_shell("pwsh"), Some(Shell::PowerShell));
        assert_eq!(parse_shell("nonsense"), None);
    }

    #[test]
    fn unknown_shell_is_an_invalid_argument() {
        let result = run_completions_command(Some("nonsense"), false);
        assert!(matches!(
            result,
            Err(CompletionsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zshrc_patching_is_idempotent() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX_EPOCH")
            .as_nanos();
        let home = std::env::temp_dir().join(format!("sveltup-comp-test-{}", nanos));
        std::fs::create_dir_all(&home).expect("home should be creatable");

        let completions = home.join(".config/sveltup/completions/sveltup.zsh");
        patch_zshrc(&home, &completions).expect("first patch");
        patch_zshrc(&home, &completions).expect("second patch");

        let rc = std::fs::read_to_string(home.join(".zshrc")).expect("read .zshrc");
        assert_eq!(
            rc.matches("source").count(),
            1,
            "source line should not be duplicated"
        );
        assert!(rc.contains("sveltup.zsh"));

        let _ = std::fs::remove_dir_all(home);
    }
}
