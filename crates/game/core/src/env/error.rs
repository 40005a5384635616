//! Oracle access errors.

use crate::error::{ContestError, ErrorSeverity};

/// Errors that occur when the environment lacks a required oracle.
///
/// A missing oracle is a wiring mistake, not a lookup miss: lookups inside a
/// present oracle return `Option` and never produce this error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// RosterOracle is not available in the environment.
    #[error("RosterOracle not available")]
    RosterNotAvailable,

    /// GambitOracle is not available in the environment.
    #[error("GambitOracle not available")]
    GambitsNotAvailable,

    /// AppealOracle is not available in the environment.
    #[error("AppealOracle not available")]
    AppealsNotAvailable,

    /// StageOracle is not available in the environment.
    #[error("StageOracle not available")]
    StagesNotAvailable,

    /// JudgeOracle is not available in the environment.
    #[error("JudgeOracle not available")]
    JudgesNotAvailable,
}

impl ContestError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // Missing oracles are fatal - evaluation cannot proceed
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            RosterNotAvailable => "ORACLE_ROSTER_NOT_AVAILABLE",
            GambitsNotAvailable => "ORACLE_GAMBITS_NOT_AVAILABLE",
            AppealsNotAvailable => "ORACLE_APPEALS_NOT_AVAILABLE",
            StagesNotAvailable => "ORACLE_STAGES_NOT_AVAILABLE",
            JudgesNotAvailable => "ORACLE_JUDGES_NOT_AVAILABLE",
        }
    }
}
