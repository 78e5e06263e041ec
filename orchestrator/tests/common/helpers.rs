//! Test helpers and builder patterns for orchestrator tests
//!
//! Reduces mock setup boilerplate in the integration suites.

use std::sync::Arc;
use std::time::Duration;

use orchestrator::{
    MockLocationLookup, MockMemoryService, MockProductIntelligence, Orchestrator, OrchestratorConfig,
};

use super::fixtures::TestFixtures;

/// Builder for orchestrators wired to mock collaborators
pub struct OrchestratorBuilder {
    config: OrchestratorConfig,
    product: MockProductIntelligence,
    location: MockLocationLookup,
    memory: Option<MockMemoryService>,
}

impl OrchestratorBuilder {
    /// Mocks answering with the standard water bottle and Springfield records
    pub fn new() -> Self {
        let mut product = MockProductIntelligence::new();
        let mut location = MockLocationLookup::new();

        product
            .expect_identify()
            .returning(|_| Ok(TestFixtures::water_bottle()))
            .times(0..);
        location
            .expect_lookup()
            .returning(|_| Ok(TestFixtures::springfield()))
            .times(0..);

        Self {
            config: OrchestratorConfig::default()
                .with_timeout_ms(200)
                .with_retry_backoff(Duration::from_millis(1)),
            product,
            location,
            memory: None,
        }
    }

    pub fn with_config<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(OrchestratorConfig) -> OrchestratorConfig,
    {
        self.config = setup(self.config);
        self
    }

    /// Replace the product mock's expectations
    pub fn with_product<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockProductIntelligence),
    {
        self.product.checkpoint();
        setup(&mut self.product);
        self
    }

    /// Replace the location mock's expectations
    pub fn with_location<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockLocationLookup),
    {
        self.location.checkpoint();
        setup(&mut self.location);
        self
    }

    pub fn with_memory<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockMemoryService),
    {
        let mut memory = MockMemoryService::new();
        setup(&mut memory);
        self.memory = Some(memory);
        self
    }

    pub fn build(self) -> Orchestrator<MockProductIntelligence, MockLocationLookup> {
        let orchestrator = Orchestrator::new(self.product, self.location, self.config);
        match self.memory {
            Some(memory) => orchestrator.with_memory(Arc::new(memory)),
            None => orchestrator,
        }
    }
}
