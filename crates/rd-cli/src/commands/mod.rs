// crates/rd-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per subcommand. Handlers take the Context, print to stdout and
// return errors for main to report.
//
// MODULE ORGANIZATION:
// - list: `rd` with no arguments, the short listing
// - add: `rd add`, schedule token splitting and text gathering
// - done: `rd done`, ordinal resolution and completion
// - ls: `rd ls`, the full listing and JSON output
// - completions: shell completion scripts (no store needed)

pub mod add;
#[cfg(feature = "completions")]
pub mod completions;
pub mod done;
pub mod list;
pub mod ls;
