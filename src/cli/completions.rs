//! Completions command.
//!
//! Generates shell completion scripts for every shell `clap_complete`
//! supports (bash, elvish, fish, PowerShell, zsh).

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::Cli;
use crate::error::Result;

const BIN_NAME: &str = "sops-acl";

/// Print completions for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write(shell, &mut out);
    out.flush()?;
    Ok(())
}

/// Write completions for `shell` into `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
