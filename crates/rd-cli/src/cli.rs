use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
///
/// With no subcommand, `rd` prints the current reminders.
#[derive(Parser)]
#[command(name = "rd")]
#[command(about = "A simple shell-based reminder system")]
#[command(version)]
pub struct Cli {
    /// Store file (overrides store.path from the config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Config file (defaults to ~/.config/rd/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Reminder commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new reminder: rd add day[@time] <text>
    ///
    /// Days: MM/DD, +N, today, tomorrow, mon..sun.
    /// Times: @2am, @3pm, @9:30am, or @15 for 24-hour time.
    /// Without a recognizable day the whole input becomes the text.
    Add {
        /// Optional day[@time] token followed by the reminder text
        #[arg(
            value_name = "WORDS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        words: Vec<String>,
    },

    /// Mark a reminder as done, by the number `rd` shows for it
    Done {
        /// Number from the `rd` listing
        number: usize,
    },

    /// List every active reminder with its due time, untruncated
    Ls {
        /// Include reminders already marked done
        #[arg(long)]
        all: bool,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Print a shell completion script
    #[cfg(feature = "completions")]
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
