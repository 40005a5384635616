//! Unified error types surfaced by the runtime API.
//!
//! Wraps content loading and evaluation failures so clients can bubble them
//! up with consistent context.
use std::path::PathBuf;

use contest_core::{ContestError, ErrorSeverity, EvaluateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error(
        "content data directory not found: {}; set CONTENT_DATA_DIR to override",
        path.display()
    )]
    DataDirNotFound { path: PathBuf },

    #[error("monster roster is empty")]
    EmptyRoster,

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

impl RuntimeError {
    /// Severity of the failure, delegating to the core error when there is one.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Evaluate(err) => err.severity(),
            Self::MissingOracles => ErrorSeverity::Internal,
            Self::DataDirNotFound { .. } | Self::EmptyRoster | Self::Content(_) => {
                ErrorSeverity::Fatal
            }
        }
    }
}
