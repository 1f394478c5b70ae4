//! # rd-core
//!
//! Core library for `rd`, a small personal reminder tool.
//!
//! - [`store::Store`]: the persisted collection of reminders
//! - [`schedule::Schedule`]: parsing of `day[@time]` tokens
//! - [`format`]: rendering of reminder listings
//! - [`config`]: optional TOML configuration
//!
//! ```no_run
//! use rd_core::store::Store;
//!
//! let mut store = Store::load("/tmp/rd.json")?;
//! store.add("water the plants", None)?;
//! for line in rd_core::format::render_listing(&store.list_active(), 9) {
//!     println!("{line}");
//! }
//! # Ok::<(), rd_core::RdError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod reminder;
pub mod schedule;
pub mod store;

pub use error::{RdError, Result};
pub use reminder::{Reminder, ReminderId};
pub use schedule::{Schedule, ScheduleError};
pub use store::Store;
