//! Handling steps for recyclable materials
//!
//! Steps are always ordered: cleaning (locality note or generic), optional
//! compaction, then placement.

use shared::{LocationInfo, ProductInfo, Verdict};

use super::decision::product_code;
use super::normalizer::{normalize, MaterialCode};
use crate::error::{CoreResult, SynthesisError};

pub const CLEAN_STEP: &str = "Clean and rinse the item to remove any food residue or contaminants";
pub const COMPACT_STEP: &str = "Flatten or crush to save space in your recycling bin";
pub const PLACE_STEP: &str = "Place in your curbside recycling bin";

/// Locality note whose normalized key matches `code`
///
/// Keys are compared after normalization only, so `"PETE 1"` does not match
/// `PET #1`.
pub fn special_instruction<'a>(code: &MaterialCode, location: &'a LocationInfo) -> Option<&'a str> {
    location
        .curbside_recycling
        .special_instructions
        .iter()
        .find(|(key, _)| normalize(key) == *code)
        .map(|(_, note)| note.as_str())
}

/// Ordered handling steps for a product the locality accepts
pub fn generate(product: &ProductInfo, location: &LocationInfo) -> Vec<String> {
    let code = product_code(product);
    let mut steps = Vec::with_capacity(3);

    match special_instruction(&code, location) {
        Some(note) => steps.push(note.to_string()),
        None => steps.push(CLEAN_STEP.to_string()),
    }

    if code.resin().is_some_and(|resin| resin.is_compactable()) {
        steps.push(COMPACT_STEP.to_string());
    }

    steps.push(PLACE_STEP.to_string());
    steps
}

/// Fill in the steps of a recyclable verdict
pub fn attach(verdict: &mut Verdict, product: &ProductInfo, location: &LocationInfo) -> CoreResult<()> {
    if !verdict.is_recyclable {
        return Err(SynthesisError::InstructionsForRejected {
            code: product_code(product).to_string(),
        });
    }
    verdict.instructions = generate(product, location);
    Ok(())
}
