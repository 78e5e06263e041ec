//! Recyclability decision engine
//!
//! Applies a locality's accept/reject lists to a normalized material code.
//! Branches are checked in strict precedence order and each one carries a
//! fixed confidence.

use std::collections::HashSet;

use shared::{agent_debug, AgentId, LocationInfo, ProductInfo, Verdict};

use super::normalizer::{normalize, MaterialCode};

/// Confidence when the material falls outside supported plastics
pub const OUT_OF_SCOPE_CONFIDENCE: f64 = 1.0;
/// Confidence when the locality explicitly accepts the material
pub const ACCEPTED_CONFIDENCE: f64 = 0.95;
/// Confidence when the locality explicitly rejects the material
pub const REJECTED_CONFIDENCE: f64 = 0.9;
/// Confidence when the locality lists the material nowhere
pub const UNKNOWN_CONFIDENCE: f64 = 0.5;

pub const OUT_OF_SCOPE_REASON: &str = "This version only supports plastic materials with Resin \
Identification Codes (RIC). Other materials will be supported in future updates.";

pub const OUT_OF_SCOPE_TIP: &str =
    "Check back soon for support of glass, paper, metal, and other materials!";

/// Which rule decided the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruling {
    OutOfScope,
    Rejected,
    Accepted,
    Unknown,
}

impl Ruling {
    pub fn confidence(self) -> f64 {
        match self {
            Ruling::OutOfScope => OUT_OF_SCOPE_CONFIDENCE,
            Ruling::Rejected => REJECTED_CONFIDENCE,
            Ruling::Accepted => ACCEPTED_CONFIDENCE,
            Ruling::Unknown => UNKNOWN_CONFIDENCE,
        }
    }

    pub fn is_recyclable(self) -> bool {
        matches!(self, Ruling::Accepted)
    }
}

/// Normalized view of a locality's curbside lists
#[derive(Debug, Default)]
pub struct ProgramRules {
    accepts: HashSet<MaterialCode>,
    rejects: HashSet<MaterialCode>,
}

impl ProgramRules {
    pub fn from_location(location: &LocationInfo) -> Self {
        let curbside = &location.curbside_recycling;
        Self {
            accepts: curbside.accepts.iter().map(|raw| normalize(raw)).collect(),
            rejects: curbside.rejects.iter().map(|raw| normalize(raw)).collect(),
        }
    }

    /// Scope gate first, then reject before accept
    pub fn classify(&self, code: &MaterialCode) -> Ruling {
        if !code.is_canonical() {
            Ruling::OutOfScope
        } else if self.rejects.contains(code) {
            Ruling::Rejected
        } else if self.accepts.contains(code) {
            Ruling::Accepted
        } else {
            Ruling::Unknown
        }
    }
}

/// Normalized material code of a product; missing codes normalize to empty
pub fn product_code(product: &ProductInfo) -> MaterialCode {
    normalize(product.ric_code.as_deref().unwrap_or_default())
}

/// Derive the verdict for a product in a locality
///
/// Instructions are left empty; the instruction generator fills them in
/// for recyclable verdicts.
pub fn decide(product: &ProductInfo, location: &LocationInfo) -> Verdict {
    let code = product_code(product);
    let ruling = ProgramRules::from_location(location).classify(&code);

    agent_debug!(AgentId::Synthesis, material = %code, ruling = ?ruling, "Classified material");

    verdict_for(ruling, &code)
}

fn verdict_for(ruling: Ruling, code: &MaterialCode) -> Verdict {
    let (reason, tips) = match ruling {
        Ruling::OutOfScope => (OUT_OF_SCOPE_REASON.to_string(), vec![OUT_OF_SCOPE_TIP.to_string()]),
        Ruling::Rejected => (
            format!("{code} is not accepted in your local curbside recycling program."),
            Vec::new(),
        ),
        Ruling::Accepted => (
            format!("{code} is accepted in your local curbside recycling program."),
            Vec::new(),
        ),
        Ruling::Unknown => (
            format!(
                "Unable to confirm if {code} is accepted locally. Please check with your local recycling facility."
            ),
            Vec::new(),
        ),
    };

    Verdict {
        is_recyclable: ruling.is_recyclable(),
        confidence: ruling.confidence(),
        reason,
        instructions: Vec::new(),
        tips,
    }
}
