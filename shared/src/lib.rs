//! Shared types for the recycling advisor
//!
//! Contains the records exchanged between the orchestrator, its upstream
//! agents and the synthesis core, plus the common error and logging setup.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
