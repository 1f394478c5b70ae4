// crates/rd-core/src/error.rs - Error Types
//
// Every failure the reminder tool can report to a user maps onto one of the
// variants below. The CLI turns the variant into an exit code, so the
// variants are kinds of failure rather than sources of failure.
//
// ERROR KINDS:
// - InvalidArguments: malformed subcommand input or missing reminder text
// - NotFound: `done` referenced an id that doesn't exist or is already done
// - StorageCorrupt: the store file exists but can't be parsed
// - Io: the store file couldn't be read or written
//
// Configuration problems have their own type in config.rs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, mutating or persisting reminders
#[derive(Error, Debug)]
pub enum RdError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store file {path} is unreadable: {reason}")]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reminder operations
pub type Result<T> = std::result::Result<T, RdError>;

impl RdError {
    /// Process exit code for this kind of failure
    ///
    /// 2 matches clap's code for usage errors so that every "you typed it
    /// wrong" failure exits the same way.
    pub fn exit_code(&self) -> u8 {
        match self {
            RdError::InvalidArguments(_) => 2,
            RdError::NotFound(_) | RdError::Io(_) => 1,
            RdError::StorageCorrupt { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_kind() {
        assert_eq!(RdError::InvalidArguments("x".into()).exit_code(), 2);
        assert_eq!(RdError::NotFound("x".into()).exit_code(), 1);
        assert_eq!(
            RdError::StorageCorrupt {
                path: PathBuf::from("/tmp/rd.json"),
                reason: "bad".into(),
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn test_corrupt_message_names_path() {
        let err = RdError::StorageCorrupt {
            path: PathBuf::from("/tmp/rd.json"),
            reason: "expected value".into(),
        };
        assert_eq!(
            err.to_string(),
            "Store file /tmp/rd.json is unreadable: expected value"
        );
    }
}
