use crate::env::MonsterId;
use crate::instance::MoodId;
use crate::scoring::{JudgeId, StageId};
use crate::stats::{GambitId, NatureId};

/// Three selectable slots; `None` marks an empty slot.
pub type Slots<T> = [Option<T>; ContestConfig::MAX_SLOTS];

/// One complete contest selection.
///
/// The configuration is plain data: every evaluation receives it explicitly
/// and nothing in the core keeps a copy between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContestConfig {
    pub monster: MonsterId,
    pub nature: NatureId,
    pub mood: MoodId,
    /// Applied in slot order
    pub gambits: Slots<GambitId>,
    pub stages: Slots<StageId>,
    pub judges: Slots<JudgeId>,
    /// How many times the monster's appeal is used (`<= 0` disables it)
    pub appeal_uses: i32,
}

impl ContestConfig {
    // ===== compile-time constants used as type parameters =====
    /// Gambit, stage and judge slot count.
    pub const MAX_SLOTS: usize = 3;

    // ===== defaults =====
    pub const DEFAULT_NATURE: NatureId = NatureId::Natural;
    pub const DEFAULT_MOOD: MoodId = MoodId::Idol;

    /// Default selection for `monster`: natural personality, idol mood, every
    /// gambit slot set to the empty gambit, the first three stages and judges,
    /// no appeal uses.
    pub fn new(monster: impl Into<MonsterId>) -> Self {
        Self {
            monster: monster.into(),
            nature: Self::DEFAULT_NATURE,
            mood: Self::DEFAULT_MOOD,
            gambits: [Some(GambitId::NoGambit); Self::MAX_SLOTS],
            stages: [
                Some(StageId::Standard),
                Some(StageId::CuteFocusStage),
                Some(StageId::WildShowStage),
            ],
            judges: [
                Some(JudgeId::CuteFocus),
                Some(JudgeId::WildFocus),
                Some(JudgeId::BalanceFocus),
            ],
            appeal_uses: 0,
        }
    }

    #[must_use]
    pub fn with_nature(mut self, nature: NatureId) -> Self {
        self.nature = nature;
        self
    }

    #[must_use]
    pub fn with_mood(mut self, mood: MoodId) -> Self {
        self.mood = mood;
        self
    }

    #[must_use]
    pub fn with_gambits(mut self, gambits: Slots<GambitId>) -> Self {
        self.gambits = gambits;
        self
    }

    #[must_use]
    pub fn with_stages(mut self, stages: Slots<StageId>) -> Self {
        self.stages = stages;
        self
    }

    #[must_use]
    pub fn with_judges(mut self, judges: Slots<JudgeId>) -> Self {
        self.judges = judges;
        self
    }

    #[must_use]
    pub fn with_appeal_uses(mut self, uses: i32) -> Self {
        self.appeal_uses = uses;
        self
    }
}

/// Fills slots from an iterator; missing entries stay empty and entries past
/// the last slot are dropped.
pub fn slots_from<T>(items: impl IntoIterator<Item = Option<T>>) -> Slots<T> {
    let mut slots: Slots<T> = core::array::from_fn(|_| None);
    for (slot, item) in slots.iter_mut().zip(items) {
        *slot = item;
    }
    slots
}
