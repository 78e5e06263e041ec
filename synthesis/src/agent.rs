//! Synthesis coordinator
//!
//! Runs decision, instruction generation and formatting in sequence. All
//! faults travel as `SynthesisError` and are folded into a failed
//! `SynthesisResult` at the boundary, so callers never see an error type.

use shared::{agent_debug, agent_error, agent_warn, AgentId, LocationInfo, ProductInfo, SynthesisResult, Verdict};

use crate::core::{decision, formatter, instructions};
use crate::error::{CoreResult, SynthesisError};

/// Entry point of the synthesis core
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisAgent;

impl SynthesisAgent {
    pub fn new() -> Self {
        Self
    }

    pub fn id(&self) -> AgentId {
        AgentId::Synthesis
    }

    /// Synthesize a recommendation; never fails
    pub fn run(&self, product: Option<&ProductInfo>, location: Option<&LocationInfo>) -> SynthesisResult {
        match self.try_run(product, location) {
            Ok((verdict, formatted)) => SynthesisResult::succeeded(verdict, formatted),
            Err(err @ SynthesisError::MissingInput { .. }) => {
                agent_warn!(self.id(), error = %err, "Synthesis skipped");
                SynthesisResult::failed(err.to_string())
            }
            Err(err) => {
                agent_error!(self.id(), error = %err, "Synthesis failed");
                SynthesisResult::failed(err.to_string())
            }
        }
    }

    /// Same pipeline as [`run`](Self::run) with the fault kept typed
    pub fn try_run(
        &self,
        product: Option<&ProductInfo>,
        location: Option<&LocationInfo>,
    ) -> CoreResult<(Verdict, String)> {
        let (product, location) = require_inputs(product, location)?;
        self.note_confidence(AgentId::ProductIntelligence, product.confidence);
        self.note_confidence(AgentId::Location, location.confidence);

        let mut verdict = decision::decide(product, location);
        if verdict.is_recyclable {
            instructions::attach(&mut verdict, product, location)?;
        }

        let formatted = formatter::format(product, location, &verdict);

        agent_debug!(
            self.id(),
            recyclable = verdict.is_recyclable,
            confidence = verdict.confidence,
            steps = verdict.instructions.len(),
            "Synthesized recommendation"
        );

        Ok((verdict, formatted))
    }

    /// Upstream confidence never gates the verdict; odd values are only logged
    fn note_confidence(&self, source: AgentId, value: f64) {
        if !(0.0..=1.0).contains(&value) {
            agent_warn!(self.id(), source = %source, value, "Upstream confidence outside [0, 1]");
        }
    }
}

fn require_inputs<'a>(
    product: Option<&'a ProductInfo>,
    location: Option<&'a LocationInfo>,
) -> CoreResult<(&'a ProductInfo, &'a LocationInfo)> {
    let product = product.filter(|p| !p.is_empty());
    let location = location.filter(|l| !l.is_empty());

    match (product, location) {
        (Some(product), Some(location)) => Ok((product, location)),
        (None, Some(_)) => Err(SynthesisError::missing("product_info")),
        (Some(_), None) => Err(SynthesisError::missing("location_info")),
        (None, None) => Err(SynthesisError::missing("product_info, location_info")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_inputs_are_named() {
        let product = ProductInfo::new("Bottle", "1", 0.9);
        let err = SynthesisAgent::new().try_run(Some(&product), None).unwrap_err();
        assert_eq!(err, SynthesisError::missing("location_info"));

        let err = SynthesisAgent::new().try_run(None, None).unwrap_err();
        assert_eq!(err, SynthesisError::missing("product_info, location_info"));
    }

    #[test]
    fn test_nan_confidence_does_not_block_synthesis() {
        let product = ProductInfo::new("Bottle", "1", f64::NAN);
        let location = LocationInfo {
            municipality: Some("Springfield".to_string()),
            ..Default::default()
        };
        let result = SynthesisAgent::new().run(Some(&product), Some(&location));

        assert!(result.success);
        assert!(result.error.is_none());
    }
}
