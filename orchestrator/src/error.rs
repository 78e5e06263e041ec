//! Orchestrator-specific error types

use shared::{AgentId, SharedError};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Upstream agent {agent} failed: {message}")]
    UpstreamFailed { agent: AgentId, message: String },

    #[error("Upstream agent {agent} timed out after {timeout:?}")]
    UpstreamTimeout { agent: AgentId, timeout: Duration },

    #[error("No {agent} record matches: {query}")]
    NotFound { agent: AgentId, query: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("File system operation failed: {operation} on {path}: {source}")]
    FileSystemError {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl OrchestratorError {
    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }

    pub fn upstream(agent: AgentId, message: impl Into<String>) -> Self {
        Self::UpstreamFailed {
            agent,
            message: message.into(),
        }
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
