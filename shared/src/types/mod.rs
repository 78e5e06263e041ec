//! Core types used throughout the recycling advisor

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod records;

pub use records::*;

/// Identifier for any agent taking part in a recycling query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentId {
    /// Routes queries and owns the collaborators
    Orchestrator,
    /// Identifies the product material
    ProductIntelligence,
    /// Resolves locality-specific program rules
    Location,
    /// Derives the recyclability verdict
    Synthesis,
    /// Persists past interactions
    Memory,
}

impl AgentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::Orchestrator => "orchestrator",
            AgentId::ProductIntelligence => "product_intelligence",
            AgentId::Location => "location",
            AgentId::Synthesis => "synthesis",
            AgentId::Memory => "memory",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
