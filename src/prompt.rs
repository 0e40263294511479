use std::io::{self, BufRead, Write};

/// Reads a y/N answer from stdin. Anything other than `y`/`yes`
/// (case-insensitive) counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{} [y/N] ", question)?;
    stdout.flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}

fn parse_answer(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
