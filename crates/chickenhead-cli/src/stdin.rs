// crates/chickenhead-cli/src/stdin.rs - Reading snippet bodies and answers from stdin
//
// Handlers take generic readers/writers instead of touching io::stdin()
// directly, so main() passes the real streams and tests pass byte buffers.

use anyhow::{Context, Result};
use console::style;
use std::io::{BufRead, Read, Write};

/// Slurp everything from `input`
///
/// UNIX PATTERN:
/// ```bash
/// pbpaste | chickenhead add -s snippets/from-clipboard
/// curl -s https://example.com/install.sh | chickenhead add -s shell/install.sh
/// ```
pub fn read_all(input: &mut dyn Read) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    input
        .read_to_end(&mut buffer)
        .context("failed to read from standard input")?;
    Ok(buffer)
}

/// Ask a yes/no question and wait for one line of input
///
/// Only `y` counts as yes. Anything else, including EOF, is a no.
pub fn confirm(question: &str, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool> {
    write!(out, "{} [yn]? ", style(question).bold())?;
    out.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read confirmation")?;

    Ok(answer.trim() == "y")
}
