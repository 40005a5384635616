//! Deterministic contest scoring rules shared across clients.
//!
//! `contest-core` defines the canonical stat pipeline (personality, gambit
//! chain, appeal) and the judge/stage scoring that reduces a final stat vector
//! to a contest result. Everything here is a pure function of its inputs:
//! catalogs arrive through the read-only oracles in [`env`], the selection
//! arrives as a [`ContestConfig`], and [`engine::ContestEngine`] ties the two
//! together.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod instance;
pub mod scoring;
pub mod stats;

pub use config::{ContestConfig, Slots};
pub use engine::{ContestEngine, EvaluateError, Evaluation};
pub use env::{
    AppealOracle, Archetype, ContestEnv, Env, GambitOracle, JudgeOracle, MonsterId,
    MonsterPhase, MonsterTemplate, OracleError, RosterOracle, StageOracle, UnlockCondition,
};
pub use error::{ContestError, ErrorSeverity};
pub use instance::{MonsterInstance, MoodId};
pub use scoring::{
    JudgeId, JudgeProfile, JudgeScore, ScoreSheet, StageId, StageProfile, StageResult,
    aggregate,
};
pub use stats::{
    AppealId, AppealProfile, GambitId, GambitProfile, NatureId, StatKind, StatMap, StatVector,
    StatsSnapshot,
};
