//! Synthesis-specific error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Missing required information from upstream agents: {missing}")]
    MissingInput { missing: String },

    #[error("Instructions requested for non-recyclable material: {code}")]
    InstructionsForRejected { code: String },
}

impl SynthesisError {
    pub fn missing(missing: impl Into<String>) -> Self {
        Self::MissingInput { missing: missing.into() }
    }
}

pub type CoreResult<T> = Result<T, SynthesisError>;
