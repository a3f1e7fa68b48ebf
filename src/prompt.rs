use crate::config;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Resolve the API key: a non-blank OPENAI_API_KEY in the environment (or the
/// preloaded .env) wins; otherwise prompt on stdin. `Ok(None)` means the user
/// entered nothing, which is the graceful no-op path.
pub fn acquire_credential() -> Result<Option<String>> {
    if let Ok(value) = std::env::var(config::CREDENTIAL_VAR) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            println!("Using {} from the environment.", config::CREDENTIAL_VAR);
            return Ok(Some(trimmed.to_string()));
        }
    }

    print!("Please enter your OpenAI API key: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let stdin = std::io::stdin();
    read_credential(&mut stdin.lock())
}

pub fn read_credential(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read API key")?;
    if read == 0 {
        bail!("input closed before an API key was entered");
    }
    let key = line.trim();
    Ok(if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    })
}
