//! Command line client for the contest scoring simulator.
//!
//! # Architecture
//!
//! ```text
//! contest (binary)
//!   ├─→ cli      (argument parsing, CONTEST_* environment bindings)
//!   ├─→ logging  (stderr + optional per-session log file)
//!   ├─→ Runtime  (content oracles and evaluation, from contest-runtime)
//!   └─→ report / catalog (text rendering)
//! ```
//!
//! The binary only assembles these pieces; everything it prints is produced
//! by [`report::EvaluationReport`] or [`catalog::CatalogListing`] so the
//! output can be tested without spawning a process.

pub mod catalog;
pub mod cli;
pub mod logging;
pub mod report;

pub use catalog::{CatalogListing, CatalogSection};
pub use cli::{CatalogArgs, Cli, Command, EvaluateArgs};
pub use report::EvaluationReport;
