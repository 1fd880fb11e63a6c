//! Error types for mkapplnk.
//!
//! Every way a run can end early is a variant here, and each maps onto one of
//! the documented process exit statuses.

use crate::config::ExitStatus;
use thiserror::Error;

/// Main error type for the shortcut creator.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// The first positional argument looked like a flag.
    #[error("Invalid invocation")]
    Usage,

    /// The operator left a required prompt empty.
    #[error("Aborted by user")]
    Aborted,

    /// The scan finished without an accepted match.
    #[error("Did not find an app with that name")]
    NotFound,

    // Shell, property and persistence calls
    #[error("Error {status} ({last_error}).")]
    Platform {
        /// Name of the failing call, for diagnostics.
        call: &'static str,
        /// Raw status code returned by the call.
        status: i32,
        /// Thread last-error code observed right after the failure.
        last_error: u32,
    },

    #[error("The apps folder is not available on {0}")]
    UnsupportedPlatform(&'static str),

    // Console errors
    #[error("Console error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for shortcut operations.
pub type Result<T> = std::result::Result<T, ShortcutError>;

/// Process exit status for the outcome of a run.
pub fn exit_status<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => ExitStatus::SUCCESS,
        Err(e) => e.exit_code(),
    }
}

impl From<std::io::Error> for ShortcutError {
    fn from(err: std::io::Error) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ShortcutError {
    /// Create a platform error for a failing call.
    pub fn platform(call: &'static str, status: i32, last_error: u32) -> Self {
        ShortcutError::Platform {
            call,
            status,
            last_error,
        }
    }

    /// Convert to the process exit status.
    ///
    /// - 1: usage error
    /// - 2: aborted by the operator
    /// - 3: no matching application
    /// - 4: a platform or console call failed
    pub fn exit_code(&self) -> i32 {
        match self {
            ShortcutError::Usage => ExitStatus::USAGE,
            ShortcutError::Aborted => ExitStatus::USER_ABORT,
            ShortcutError::NotFound => ExitStatus::NO_APP,
            ShortcutError::Platform { .. }
            | ShortcutError::UnsupportedPlatform(_)
            | ShortcutError::Io { .. } => ExitStatus::RUNTIME_ERROR,
        }
    }

    /// Whether the run ended because of a fault rather than a decision.
    ///
    /// Usage errors, aborts and empty searches are normal outcomes the
    /// operator already sees on the console.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ShortcutError::Platform { .. }
                | ShortcutError::UnsupportedPlatform(_)
                | ShortcutError::Io { .. }
        )
    }
}
