//! In-process memory service
//!
//! Keeps interactions for the lifetime of the process. Records are appended
//! in arrival order and searched newest first.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::OrchestratorResult;
use crate::traits::MemoryService;
use crate::types::{MemoryRecord, Metadata};
use shared::{agent_debug, AgentId};

/// Memory service backed by a vector behind an async lock
#[derive(Debug, Default)]
pub struct InMemoryMemory {
    records: RwLock<Vec<MemoryRecord>>,
}

impl InMemoryMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn matches(record: &MemoryRecord, needle: Option<&str>, user_id: Option<&str>) -> bool {
        let user_matches = user_id.map_or(true, |id| record.user_id.as_deref() == Some(id));
        let text_matches = needle.map_or(true, |needle| {
            record.query.to_lowercase().contains(needle) || record.response.to_lowercase().contains(needle)
        });
        user_matches && text_matches
    }
}

#[async_trait]
impl MemoryService for InMemoryMemory {
    async fn store(
        &self,
        query: &str,
        response: &str,
        user_id: Option<String>,
        metadata: Option<Metadata>,
    ) -> OrchestratorResult<bool> {
        let record = MemoryRecord::new(query, response, user_id, metadata);
        agent_debug!(AgentId::Memory, id = %record.id, "🧠 Stored interaction");
        self.records.write().await.push(record);
        Ok(true)
    }

    async fn search(
        &self,
        query: Option<String>,
        user_id: Option<String>,
        limit: usize,
    ) -> OrchestratorResult<Vec<MemoryRecord>> {
        let needle = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let records = self.records.read().await;

        Ok(records
            .iter()
            .rev()
            .filter(|record| Self::matches(record, needle.as_deref(), user_id.as_deref()))
            .take(limit)
            .cloned()
            .collect())
    }
}
