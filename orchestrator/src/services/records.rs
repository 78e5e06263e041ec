//! JSON-file backed product and location agents
//!
//! Loads a catalog of known products and curbside programs and answers
//! upstream queries from it. The file shape is:
//!
//! ```json
//! {
//!   "products": [ { "product_name": "Water bottle", "ric_code": "PET 1", "confidence": 0.9 } ],
//!   "locations": [ { "zip_code": "62701", "municipality": "Springfield", "state": "IL",
//!                    "curbside_recycling": { "accepts": ["1"], "rejects": ["6"] } } ]
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::error::{OrchestratorError, OrchestratorResult};
use crate::traits::{LocationLookup, ProductIntelligence};
use shared::{agent_debug, AgentId, LocationInfo, ProductInfo};

/// Catalog of known products and locality programs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordCatalog {
    pub products: Vec<ProductInfo>,
    pub locations: Vec<LocationInfo>,
}

/// Product and location agent answering from a [`RecordCatalog`]
#[derive(Debug)]
pub struct JsonRecordStore {
    catalog: RecordCatalog,
}

impl JsonRecordStore {
    pub fn new(catalog: RecordCatalog) -> Self {
        Self { catalog }
    }

    /// Load a catalog from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> OrchestratorResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| OrchestratorError::FileSystemError {
                operation: "read".to_string(),
                path: path.display().to_string(),
                source,
            })?;
        let catalog: RecordCatalog = shared::from_json(&content)?;

        agent_debug!(
            AgentId::Orchestrator,
            "📁 Loaded {} products and {} locations from {}",
            catalog.products.len(),
            catalog.locations.len(),
            path.display()
        );
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &RecordCatalog {
        &self.catalog
    }

    /// Product whose name appears in the query; the longest name wins
    fn find_product(&self, query: &str) -> Option<&ProductInfo> {
        let query = query.to_lowercase();
        self.catalog
            .products
            .iter()
            .filter_map(|product| {
                let name = product.product_name.as_deref()?.trim().to_lowercase();
                (!name.is_empty() && query.contains(&name)).then_some((name.len(), product))
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, product)| product)
    }

    /// Location by zip code, municipality, or `"Municipality, ST"`
    fn find_location(&self, location: &str) -> Option<&LocationInfo> {
        let wanted = location.trim();
        self.catalog.locations.iter().find(|info| {
            let zip = info.zip_code.as_deref().map(str::trim);
            let municipality = info.municipality.as_deref().map(str::trim);
            let labelled = match (municipality, info.state.as_deref()) {
                (Some(m), Some(s)) => Some(format!("{m}, {}", s.trim())),
                _ => None,
            };

            zip == Some(wanted)
                || municipality.is_some_and(|m| m.eq_ignore_ascii_case(wanted))
                || labelled.is_some_and(|l| l.eq_ignore_ascii_case(wanted))
        })
    }
}

#[async_trait]
impl ProductIntelligence for JsonRecordStore {
    async fn identify(&self, query: &str) -> OrchestratorResult<ProductInfo> {
        self.find_product(query)
            .cloned()
            .ok_or_else(|| OrchestratorError::NotFound {
                agent: AgentId::ProductIntelligence,
                query: query.to_string(),
            })
    }
}

#[async_trait]
impl LocationLookup for JsonRecordStore {
    async fn lookup(&self, location: &str) -> OrchestratorResult<LocationInfo> {
        self.find_location(location)
            .cloned()
            .ok_or_else(|| OrchestratorError::NotFound {
                agent: AgentId::Location,
                query: location.to_string(),
            })
    }
}
