//! Orchestrator-level records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{LocationInfo, ProductInfo, SynthesisResult};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Free-form metadata attached to a stored interaction
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A past interaction kept by the memory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub query: String,
    pub response: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
}

impl MemoryRecord {
    pub fn new(query: &str, response: &str, user_id: Option<String>, metadata: Option<Metadata>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            query: query.to_string(),
            response: response.to_string(),
            metadata: metadata.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

/// Everything the orchestrator learned while answering one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecyclingResponse {
    pub query: String,
    pub product: Option<ProductInfo>,
    pub location: Option<LocationInfo>,
    pub synthesis: SynthesisResult,
    /// Upstream failures, one message per agent that could not answer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upstream_errors: Vec<String>,
}

impl RecyclingResponse {
    pub fn is_success(&self) -> bool {
        self.synthesis.success
    }

    pub fn formatted(&self) -> Option<&str> {
        self.synthesis.formatted_response.as_deref()
    }
}
