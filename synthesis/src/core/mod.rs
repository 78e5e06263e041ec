//! Core decision logic
//!
//! Pure, synchronous functions with no I/O and no shared state. Every
//! function here is deterministic in its inputs.

pub mod decision;
pub mod formatter;
pub mod instructions;
pub mod normalizer;

pub use decision::{decide, ProgramRules, Ruling};
pub use normalizer::{normalize, MaterialCode, ResinCode};
