use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;

/// Write a completion script for `shell` to stdout
///
/// ```bash
/// rd completions bash > ~/.local/share/bash-completion/completions/rd
/// ```
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "rd", &mut io::stdout());
    Ok(())
}
