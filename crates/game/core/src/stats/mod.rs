//! Stat pipeline - layered transformation of a monster's stats.
//!
//! # Architecture
//!
//! ```text
//! [ Base Stats (template) ]
//!      ↓
//! [ Personality (Layer 1) ]   one stat ×1.1, one stat ×0.9
//!      ↓
//! [ Gambits (Layer 2) ]       up to three slots, rounded after each
//!      ↓
//! [ Appeal (Layer 3) ]        1 + (m - 1) × uses, rounded once
//!      ↓
//! [ Final Stats ] → scoring
//! ```
//!
//! ## Principles
//!
//! 1. **Immutable**: every layer returns a new [`StatVector`]
//! 2. **Integer stats**: each multiplicative step rounds to the nearest integer
//! 3. **No merged multipliers**: rounding happens per step, in order
//! 4. **Total**: absent selections are pass-throughs, never errors

pub mod appeal;
pub mod gambit;
pub mod layer;
pub mod map;
pub mod nature;
pub mod snapshot;
pub mod vector;

pub use appeal::{AppealId, AppealLayer, AppealProfile, AppealUse, apply_appeal, total_multiplier};
pub use gambit::{GambitChain, GambitId, GambitLayer, GambitProfile, apply_gambit_chain};
pub use layer::StatLayer;
pub use map::{MultiplierSummary, StatMap};
pub use nature::{NatureId, NatureLayer, NatureModifier};
pub use snapshot::StatsSnapshot;
pub use vector::{StatKind, StatVector, scale};
