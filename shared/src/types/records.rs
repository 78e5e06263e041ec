//! Records exchanged between the agents
//!
//! Upstream agents produce loosely-structured output, so every field falls
//! back to its default when absent from the JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::AgentId;

/// Material identity produced by the product intelligence agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInfo {
    pub product_name: Option<String>,
    /// Raw resin identification code, e.g. `"PET #1"`, `"1"`, `"ps#6"`
    pub ric_code: Option<String>,
    pub confidence: f64,
}

impl ProductInfo {
    pub fn new(product_name: impl Into<String>, ric_code: impl Into<String>, confidence: f64) -> Self {
        Self {
            product_name: Some(product_name.into()),
            ric_code: Some(ric_code.into()),
            confidence,
        }
    }

    /// True when the upstream agent produced nothing usable
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Contact details of the authority running a curbside program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalAuthority {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Locality-specific curbside program rules, keyed by raw material codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurbsideProgram {
    pub accepts: Vec<String>,
    pub rejects: Vec<String>,
    /// Kept in document order; the first key matching a material wins
    pub special_instructions: IndexMap<String, String>,
}

/// Locality rules produced by the location agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInfo {
    pub zip_code: Option<String>,
    pub municipality: Option<String>,
    pub state: Option<String>,
    pub local_authority: LocalAuthority,
    pub curbside_recycling: CurbsideProgram,
    pub confidence: f64,
}

impl LocationInfo {
    /// True when the upstream agent produced nothing usable
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Recyclability decision for a single query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verdict {
    pub is_recyclable: bool,
    pub confidence: f64,
    pub reason: String,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
}

/// Outcome of one synthesis call, owned by the caller once returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    pub success: bool,
    pub agent: AgentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Verdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SynthesisResult {
    pub fn succeeded(recommendation: Verdict, formatted_response: String) -> Self {
        Self {
            success: true,
            agent: AgentId::Synthesis,
            recommendation: Some(recommendation),
            formatted_response: Some(formatted_response),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            agent: AgentId::Synthesis,
            recommendation: None,
            formatted_response: None,
            error: Some(error.into()),
        }
    }
}
