//! Public runtime API surface.
//!
//! Gathers the types exposed to consumers of the runtime crate so the
//! orchestrator and oracle adapters can stay focused on their own concerns.

pub mod errors;

pub use errors::{Result, RuntimeError};
