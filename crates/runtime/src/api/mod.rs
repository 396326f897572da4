//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or storage.

pub mod errors;

pub use errors::{ArenaError, Result};
