//! Synthesis core for recycling recommendations
//!
//! Combines the product material identity and the local curbside program
//! into a verdict, handling steps and a formatted explanation. The
//! [`SynthesisAgent`] is the single entry point used by the orchestrator.

pub mod agent;
pub mod core;
pub mod error;

pub use agent::SynthesisAgent;
pub use self::core::{decide, normalize, MaterialCode, ResinCode, Ruling};
pub use error::{CoreResult, SynthesisError};
