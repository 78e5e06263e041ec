//! Orchestrator library for recycling queries
//!
//! Sequences the product intelligence and location agents, hands their
//! records to the synthesis core and keeps a memory of past interactions.
//! Every collaborator is a trait so tests can substitute mocks.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::OrchestratorConfig;
pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::Orchestrator;
pub use traits::{
    LocationLookup, MemoryService, MockLocationLookup, MockMemoryService, MockProductIntelligence,
    ProductIntelligence,
};
pub use types::{MemoryRecord, Metadata, RecyclingResponse};
