//! Main orchestrator implementation
//!
//! Routes a recycling query through the upstream agents, hands their records
//! to the synthesis core and records the interaction in memory. Every
//! collaborator is injected at construction.

use std::future::Future;
use std::sync::Arc;

use serde_json::json;
use tokio::time::{sleep, timeout};

use shared::{agent_debug, agent_info, agent_warn, AgentId, ProductInfo, SynthesisResult};
use synthesis::{normalize, SynthesisAgent};

use crate::{
    config::OrchestratorConfig,
    error::{OrchestratorError, OrchestratorResult},
    traits::{LocationLookup, MemoryService, ProductIntelligence},
    types::{MemoryRecord, Metadata, RecyclingResponse},
};

/// Coordinates the agents answering a single recycling query
pub struct Orchestrator<P, L>
where
    P: ProductIntelligence + 'static,
    L: LocationLookup + 'static,
{
    config: OrchestratorConfig,

    /// Injected services
    product_intelligence: P,
    location: L,
    memory: Option<Arc<dyn MemoryService>>,

    synthesis: SynthesisAgent,
}

impl<P, L> Orchestrator<P, L>
where
    P: ProductIntelligence + 'static,
    L: LocationLookup + 'static,
{
    /// Create new orchestrator with injected dependencies
    pub fn new(product_intelligence: P, location: L, config: OrchestratorConfig) -> Self {
        Self {
            config,
            product_intelligence,
            location,
            memory: None,
            synthesis: SynthesisAgent::new(),
        }
    }

    /// Attach a long-term memory service
    pub fn with_memory(mut self, memory: Arc<dyn MemoryService>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    pub fn has_memory(&self) -> bool {
        self.memory.is_some()
    }

    /// Answer a recycling query
    ///
    /// Upstream failures never abort the request: the missing record is left
    /// absent and the synthesis core reports it as missing input.
    pub async fn process_request(
        &self,
        query: &str,
        user_location: Option<&str>,
        user_id: Option<&str>,
    ) -> RecyclingResponse {
        agent_info!(AgentId::Orchestrator, "📋 Processing query: {}", query);

        let product_call = self.call_upstream(AgentId::ProductIntelligence, || {
            self.product_intelligence.identify(query)
        });
        let location_call = async {
            match user_location {
                Some(place) => Some(self.call_upstream(AgentId::Location, || self.location.lookup(place)).await),
                None => None,
            }
        };
        let (product, location) = tokio::join!(product_call, location_call);

        let mut upstream_errors = Vec::new();
        let product = collect(product, &mut upstream_errors);
        let location = match location {
            Some(result) => collect(result, &mut upstream_errors),
            None => {
                upstream_errors.push("No location provided".to_string());
                None
            }
        };

        let synthesis = self.synthesis.run(product.as_ref(), location.as_ref());

        if synthesis.success {
            if let Some(formatted) = synthesis.formatted_response.as_deref() {
                let metadata = interaction_metadata(user_location, product.as_ref(), &synthesis);
                self.save_to_memory(query, formatted, user_id, Some(metadata)).await;
            }
        }

        agent_debug!(
            AgentId::Orchestrator,
            success = synthesis.success,
            upstream_errors = upstream_errors.len(),
            "Query processed"
        );

        RecyclingResponse {
            query: query.to_string(),
            product,
            location,
            synthesis,
            upstream_errors,
        }
    }

    /// Save an interaction to long-term memory
    ///
    /// # Returns
    /// `false` when no memory is configured or the store failed
    pub async fn save_to_memory(
        &self,
        query: &str,
        response: &str,
        user_id: Option<&str>,
        metadata: Option<Metadata>,
    ) -> bool {
        let Some(memory) = &self.memory else {
            return false;
        };

        match memory
            .store(query, response, user_id.map(str::to_string), metadata)
            .await
        {
            Ok(stored) => stored,
            Err(err) => {
                agent_warn!(AgentId::Memory, error = %err, "Failed to store interaction");
                false
            }
        }
    }

    /// Retrieve past interactions relevant to a query
    ///
    /// `None` for `limit` uses the configured default.
    pub async fn retrieve_relevant_memories(
        &self,
        query: Option<&str>,
        user_id: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<MemoryRecord> {
        let Some(memory) = &self.memory else {
            return Vec::new();
        };

        let limit = limit.unwrap_or(self.config.memory_limit);
        match memory
            .search(query.map(str::to_string), user_id.map(str::to_string), limit)
            .await
        {
            Ok(records) => records,
            Err(err) => {
                agent_warn!(AgentId::Memory, error = %err, "Failed to search memory");
                Vec::new()
            }
        }
    }

    /// Call an upstream agent with a timeout, retrying with linear backoff
    async fn call_upstream<T, F, Fut>(&self, agent: AgentId, mut call: F) -> OrchestratorResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = OrchestratorResult<T>>,
    {
        let attempts = self.config.upstream_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match timeout(self.config.upstream_timeout, call()).await {
                Ok(Ok(record)) => return Ok(record),
                // Not found is an answer, not a transient failure
                Ok(Err(err @ OrchestratorError::NotFound { .. })) => return Err(err),
                Ok(Err(err)) => last_error = Some(err),
                Err(_) => {
                    last_error = Some(OrchestratorError::UpstreamTimeout {
                        agent,
                        timeout: self.config.upstream_timeout,
                    })
                }
            }

            if attempt < attempts {
                agent_debug!(agent, attempt, "Retrying upstream call");
                sleep(self.config.retry_backoff * attempt).await;
            }
        }

        Err(last_error.unwrap_or_else(|| OrchestratorError::upstream(agent, "no attempts made")))
    }
}

fn collect<T>(result: OrchestratorResult<T>, errors: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(record) => Some(record),
        Err(err) => {
            agent_warn!(AgentId::Orchestrator, error = %err, "Upstream agent failed");
            errors.push(err.to_string());
            None
        }
    }
}

fn interaction_metadata(
    user_location: Option<&str>,
    product: Option<&ProductInfo>,
    synthesis: &SynthesisResult,
) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("agent_type".to_string(), json!(AgentId::Orchestrator));
    if let Some(place) = user_location {
        metadata.insert("location".to_string(), json!(place));
    }
    if let Some(raw) = product.and_then(|p| p.ric_code.as_deref()) {
        metadata.insert("material".to_string(), json!(normalize(raw)));
    }
    if let Some(verdict) = &synthesis.recommendation {
        metadata.insert("is_recyclable".to_string(), json!(verdict.is_recyclable));
    }
    metadata
}
