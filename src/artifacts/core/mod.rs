//! Shared error taxonomy
//!
//! Most failures in this tool are plain `anyhow` errors that bubble up with
//! context and exit the process with the generic fatal code. The conditions
//! below are part of the process contract — callers script against their
//! exit codes — so they get a dedicated type that `main` recovers by
//! downcast.

use thiserror::Error;

/// Process exit code for fatal errors without a dedicated code
pub const GENERIC_FAILURE_EXIT_CODE: u8 = 3;

/// Failures with a dedicated process exit code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DepthError {
    /// The revision expression resolved to something other than a commit
    #[error("invalid commitish specified")]
    NotACommit,

    /// A tracked path is absent from the starting commit's tree
    #[error("the file was not found in the repository: {path}")]
    PathNotFound { path: String },

    /// The ancestry iterator ran out while commits were still pending in the
    /// frontier, so the available history cannot support a trustworthy answer
    #[error("cannot complete the graph walk; perhaps the repository is too shallow?")]
    HistoryTooShallow,
}

impl DepthError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DepthError::NotACommit => 4,
            DepthError::PathNotFound { .. } => 5,
            DepthError::HistoryTooShallow => 6,
        }
    }
}
