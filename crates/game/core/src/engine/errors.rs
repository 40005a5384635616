//! Error types for contest evaluation.

use crate::env::{MonsterId, OracleError};
use crate::error::{ContestError, ErrorSeverity};

/// Errors surfaced while evaluating a configuration.
///
/// Unknown gambit, stage and judge ids are not errors; they resolve to empty
/// slots. Only the monster itself must exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluateError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("monster `{0}` is not in the roster")]
    MonsterNotFound(MonsterId),
}

impl ContestError for EvaluateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EvaluateError::Oracle(error) => error.severity(),
            EvaluateError::MonsterNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EvaluateError::Oracle(error) => error.error_code(),
            EvaluateError::MonsterNotFound(_) => "EVALUATE_MONSTER_NOT_FOUND",
        }
    }
}
