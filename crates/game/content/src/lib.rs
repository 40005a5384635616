//! Data-driven contest content and loaders.
//!
//! This crate houses the shipped catalogs under `data/` and the loaders that
//! read them:
//! - Monster roster (RON)
//! - Gambit, appeal, stage and judge catalogs (RON)
//! - Default contest selection (TOML)
//!
//! Content is consumed by runtime oracles; the scoring rules themselves live
//! in `contest-core` and never read files.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AppealCatalog, AppealLoader, ConfigLoader, ConfigOverrides, ContentFactory, GambitLoader,
    JudgeLoader, LoadResult, RosterLoader, StageLoader, parse_slots,
};
