//! Orchestrator configuration
//!
//! Values come from, in increasing priority: built-in defaults, environment
//! variables (a `.env` file is honoured), then command-line flags.

use std::str::FromStr;
use std::time::Duration;

use crate::error::{OrchestratorError, OrchestratorResult};

pub const TIMEOUT_ENV: &str = "RECYCLE_UPSTREAM_TIMEOUT_MS";
pub const ATTEMPTS_ENV: &str = "RECYCLE_UPSTREAM_ATTEMPTS";
pub const MEMORY_LIMIT_ENV: &str = "RECYCLE_MEMORY_LIMIT";

/// Tunables for calls into upstream agents and memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Bound on a single upstream call
    pub upstream_timeout: Duration,
    /// Tries per upstream agent, at least 1
    pub upstream_attempts: u32,
    /// Delay before retry `n` is `retry_backoff * n`
    pub retry_backoff: Duration,
    /// Default number of memories retrieved
    pub memory_limit: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            upstream_timeout: Duration::from_secs(5),
            upstream_attempts: 2,
            retry_backoff: Duration::from_millis(200),
            memory_limit: 5,
        }
    }
}

impl OrchestratorConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> OrchestratorResult<Self> {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> OrchestratorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(TIMEOUT_ENV) {
            config.upstream_timeout = Duration::from_millis(parse(TIMEOUT_ENV, &value)?);
        }
        if let Some(value) = lookup(ATTEMPTS_ENV) {
            config.upstream_attempts = parse(ATTEMPTS_ENV, &value)?;
        }
        if let Some(value) = lookup(MEMORY_LIMIT_ENV) {
            config.memory_limit = parse(MEMORY_LIMIT_ENV, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.upstream_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.upstream_attempts = attempts;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn validate(&self) -> OrchestratorResult<()> {
        if self.upstream_timeout.is_zero() {
            return Err(OrchestratorError::config("upstream_timeout must be greater than zero"));
        }
        if self.upstream_attempts == 0 {
            return Err(OrchestratorError::config("upstream_attempts must be at least 1"));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> OrchestratorResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| OrchestratorError::config(format!("{key} = {value:?}")))
}
