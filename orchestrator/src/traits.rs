//! Collaborator contracts with mockall annotations for testing
//!
//! The orchestrator receives one implementation of each trait at
//! construction, so every upstream agent can be swapped for a test double.

use shared::{LocationInfo, ProductInfo};

use crate::error::OrchestratorResult;
use crate::types::{MemoryRecord, Metadata};

/// Material identification for a user's item description
#[mockall::automock]
#[async_trait::async_trait]
pub trait ProductIntelligence: Send + Sync {
    /// Identify the product and its resin code from a free-text query
    async fn identify(&self, query: &str) -> OrchestratorResult<ProductInfo>;
}

/// Locality lookup for curbside program rules
#[mockall::automock]
#[async_trait::async_trait]
pub trait LocationLookup: Send + Sync {
    /// Resolve a zip code or municipality into its program rules
    async fn lookup(&self, location: &str) -> OrchestratorResult<LocationInfo>;
}

/// Long-term memory of past interactions
#[mockall::automock]
#[async_trait::async_trait]
pub trait MemoryService: Send + Sync {
    /// Persist one interaction
    ///
    /// # Returns
    /// `true` when the record was stored
    async fn store(
        &self,
        query: &str,
        response: &str,
        user_id: Option<String>,
        metadata: Option<Metadata>,
    ) -> OrchestratorResult<bool>;

    /// Find past interactions, newest first
    ///
    /// # Parameters
    /// - `query`: optional case-insensitive text filter
    /// - `user_id`: optional owner filter
    /// - `limit`: maximum number of records returned
    async fn search(
        &self,
        query: Option<String>,
        user_id: Option<String>,
        limit: usize,
    ) -> OrchestratorResult<Vec<MemoryRecord>>;
}

// Shared handles let one service answer for several collaborators.

#[async_trait::async_trait]
impl<T: ProductIntelligence + ?Sized> ProductIntelligence for std::sync::Arc<T> {
    async fn identify(&self, query: &str) -> OrchestratorResult<ProductInfo> {
        (**self).identify(query).await
    }
}

#[async_trait::async_trait]
impl<T: LocationLookup + ?Sized> LocationLookup for std::sync::Arc<T> {
    async fn lookup(&self, location: &str) -> OrchestratorResult<LocationInfo> {
        (**self).lookup(location).await
    }
}
