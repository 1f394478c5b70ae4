// crates/rd-cli/src/main.rs - CLI Application Entry Point
//
// Entry point for `rd`, a small shell-based reminder tool.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │      rd-core        │
//                        │ (store + config) │    │ (store, formatting) │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// rd                                  # 1. newest  2. next ... (There are N other reminders.)
// rd add 12/25@9am wrap presents      # Scheduled reminder
// rd add call the plumber             # No schedule token: all words are text
// rd done 2                           # Complete the reminder listed as 2.
// rd ls --all --json | jq '.[].text'  # Everything, machine-readable
// ```
//
// EXIT CODES:
// 0 success, 1 not found or I/O failure, 2 invalid arguments or config,
// 3 corrupt store file

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use rd_core::RdError;
use rd_core::config::ConfigError;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Store handle and configuration
mod stdin; // Reminder text from piped input

use cli::{Cli, Commands};
use context::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Build the context and dispatch to the command handler
fn run(cli: Cli) -> Result<()> {
    // Completion scripts don't need a store
    let command = match cli.command {
        #[cfg(feature = "completions")]
        Some(Commands::Completions { shell }) => return commands::completions::handle(shell),
        command => command,
    };

    let mut ctx = Context::new(cli.store, cli.config.as_deref())?;

    match command {
        None => commands::list::handle(&ctx),
        Some(Commands::Add { words }) => commands::add::handle(&mut ctx, &words),
        Some(Commands::Done { number }) => commands::done::handle(&mut ctx, number),
        Some(Commands::Ls { all, json }) => commands::ls::handle(&ctx, all, json),
        #[cfg(feature = "completions")]
        Some(Commands::Completions { .. }) => unreachable!(), // Already handled above
    }
}

/// Logs go to stderr so listings on stdout stay clean. `RUST_LOG` applies
/// unless --verbose asks for everything.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Map the root cause of a failure onto the process exit code
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(rd_error) = err.downcast_ref::<RdError>() {
        return rd_error.exit_code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    1
}
