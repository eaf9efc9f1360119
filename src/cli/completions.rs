//! Completions command.
//!
//! Scripts are generated from the clap definition, so every subcommand and
//! flag (including `--regenerate-keys` values) completes without extra
//! wiring. Generating them needs no execution context.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell as Generator};

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for Generator {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Generator::Bash,
            Shell::Zsh => Generator::Zsh,
            Shell::Fish => Generator::Fish,
            Shell::PowerShell => Generator::PowerShell,
        }
    }
}

/// Render the completion script for `shell`.
pub fn script(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(Generator::from(shell), &mut cmd, name, &mut buf);
    buf
}

/// Print the completion script for `shell` on stdout.
///
/// # Errors
///
/// Returns an I/O error if stdout is closed.
pub fn execute(shell: Shell) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(&script(shell))?;
    out.flush()?;
    Ok(())
}
