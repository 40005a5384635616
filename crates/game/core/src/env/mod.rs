//! Traits describing read-only contest data.
//!
//! Oracles expose the monster roster and the gambit, appeal, stage and judge
//! catalogs. The [`Env`] aggregate bundles them so the engine can reach
//! everything it needs without coupling to concrete implementations.
mod error;
mod roster;
mod tables;

pub use error::OracleError;
pub use roster::{Archetype, MonsterId, MonsterPhase, MonsterTemplate, RosterOracle, UnlockCondition};
pub use tables::{AppealOracle, GambitOracle, JudgeOracle, StageOracle};

/// Aggregates read-only oracles required by the contest engine.
#[derive(Debug)]
pub struct Env<'a, R, G, A, S, J>
where
    R: RosterOracle + ?Sized,
    G: GambitOracle + ?Sized,
    A: AppealOracle + ?Sized,
    S: StageOracle + ?Sized,
    J: JudgeOracle + ?Sized,
{
    roster: Option<&'a R>,
    gambits: Option<&'a G>,
    appeals: Option<&'a A>,
    stages: Option<&'a S>,
    judges: Option<&'a J>,
}

pub type ContestEnv<'a> = Env<
    'a,
    dyn RosterOracle + 'a,
    dyn GambitOracle + 'a,
    dyn AppealOracle + 'a,
    dyn StageOracle + 'a,
    dyn JudgeOracle + 'a,
>;

// Derived impls would bound the oracle types, which trait objects cannot meet.
impl<R, G, A, S, J> Clone for Env<'_, R, G, A, S, J>
where
    R: RosterOracle + ?Sized,
    G: GambitOracle + ?Sized,
    A: AppealOracle + ?Sized,
    S: StageOracle + ?Sized,
    J: JudgeOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, G, A, S, J> Copy for Env<'_, R, G, A, S, J>
where
    R: RosterOracle + ?Sized,
    G: GambitOracle + ?Sized,
    A: AppealOracle + ?Sized,
    S: StageOracle + ?Sized,
    J: JudgeOracle + ?Sized,
{
}

impl<'a, R, G, A, S, J> Env<'a, R, G, A, S, J>
where
    R: RosterOracle + ?Sized,
    G: GambitOracle + ?Sized,
    A: AppealOracle + ?Sized,
    S: StageOracle + ?Sized,
    J: JudgeOracle + ?Sized,
{
    pub fn new(
        roster: Option<&'a R>,
        gambits: Option<&'a G>,
        appeals: Option<&'a A>,
        stages: Option<&'a S>,
        judges: Option<&'a J>,
    ) -> Self {
        Self {
            roster,
            gambits,
            appeals,
            stages,
            judges,
        }
    }

    pub fn with_all(
        roster: &'a R,
        gambits: &'a G,
        appeals: &'a A,
        stages: &'a S,
        judges: &'a J,
    ) -> Self {
        Self::new(
            Some(roster),
            Some(gambits),
            Some(appeals),
            Some(stages),
            Some(judges),
        )
    }

    pub fn empty() -> Self {
        Self {
            roster: None,
            gambits: None,
            appeals: None,
            stages: None,
            judges: None,
        }
    }

    /// Returns the RosterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RosterNotAvailable` if no roster oracle was provided.
    pub fn roster(&self) -> Result<&'a R, OracleError> {
        self.roster.ok_or(OracleError::RosterNotAvailable)
    }

    /// Returns the GambitOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::GambitsNotAvailable` if no gambit oracle was provided.
    pub fn gambits(&self) -> Result<&'a G, OracleError> {
        self.gambits.ok_or(OracleError::GambitsNotAvailable)
    }

    /// Returns the AppealOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AppealsNotAvailable` if no appeal oracle was provided.
    pub fn appeals(&self) -> Result<&'a A, OracleError> {
        self.appeals.ok_or(OracleError::AppealsNotAvailable)
    }

    /// Returns the StageOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::StagesNotAvailable` if no stage oracle was provided.
    pub fn stages(&self) -> Result<&'a S, OracleError> {
        self.stages.ok_or(OracleError::StagesNotAvailable)
    }

    /// Returns the JudgeOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::JudgesNotAvailable` if no judge oracle was provided.
    pub fn judges(&self) -> Result<&'a J, OracleError> {
        self.judges.ok_or(OracleError::JudgesNotAvailable)
    }
}

impl<'a, R, G, A, S, J> Env<'a, R, G, A, S, J>
where
    R: RosterOracle + 'a,
    G: GambitOracle + 'a,
    A: AppealOracle + 'a,
    S: StageOracle + 'a,
    J: JudgeOracle + 'a,
{
    /// Converts this environment into a trait-object based `ContestEnv`.
    pub fn into_contest_env(self) -> ContestEnv<'a> {
        let roster: Option<&'a dyn RosterOracle> = self.roster.map(|roster| roster as _);
        let gambits: Option<&'a dyn GambitOracle> = self.gambits.map(|gambits| gambits as _);
        let appeals: Option<&'a dyn AppealOracle> = self.appeals.map(|appeals| appeals as _);
        let stages: Option<&'a dyn StageOracle> = self.stages.map(|stages| stages as _);
        let judges: Option<&'a dyn JudgeOracle> = self.judges.map(|judges| judges as _);
        Env::new(roster, gambits, appeals, stages, judges)
    }

    /// Creates a trait-object view without consuming `self`.
    pub fn as_contest_env(&self) -> ContestEnv<'a> {
        (*self).into_contest_env()
    }
}
