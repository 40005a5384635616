//! Scoring - turns a final stat vector into judge, stage and overall scores.
//!
//! ```text
//! score(judge, stage) = Σ stat[k] × weight[k] × bias[k]    (k in judge weights)
//! stage total         = Σ over judges
//! average             = Σ stage totals / valid stages
//! ```
//!
//! Scores are real numbers and are never rounded here.

pub mod aggregate;
pub mod judge;
pub mod stage;

pub use aggregate::{JudgeScore, ScoreSheet, StageResult, aggregate};
pub use judge::{JudgeFormula, JudgeId, JudgeProfile};
pub use stage::{StageId, StageProfile};
