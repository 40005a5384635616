//! Runtime for the contest scoring simulator.
//!
//! This crate loads contest content into in-memory oracles and wraps the
//! `contest-core` engine in a small facade. Consumers embed [`Runtime`] to
//! resolve selections and score them.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the facade and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`oracle`] provides the content-backed oracle implementations
pub mod api;
pub mod oracle;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use oracle::{
    AppealOracleImpl, ContentOracleFactory, GambitOracleImpl, JudgeOracleImpl, OracleManager,
    RosterOracleImpl, StageOracleImpl,
};
pub use runtime::{Runtime, RuntimeBuilder};
