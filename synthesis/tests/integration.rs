//! End-to-end synthesis scenarios
//!
//! Each test drives `SynthesisAgent::run` with realistic upstream records and
//! checks the complete result.

use assert_matches::assert_matches;
use shared::{LocationInfo, ProductInfo};
use synthesis::core::decision::{
    ACCEPTED_CONFIDENCE, OUT_OF_SCOPE_CONFIDENCE, OUT_OF_SCOPE_REASON, REJECTED_CONFIDENCE, UNKNOWN_CONFIDENCE,
};
use synthesis::core::instructions::{CLEAN_STEP, COMPACT_STEP, PLACE_STEP};
use synthesis::{SynthesisAgent, SynthesisError};

mod common;
use common::TestFixtures;

#[test]
fn test_accepted_bottle_gets_three_steps() {
    let product = TestFixtures::product("1");
    let location = TestFixtures::location(&["PET #1"], &[]);

    let result = SynthesisAgent::new().run(Some(&product), Some(&location));

    assert!(result.success);
    assert!(result.error.is_none());
    let verdict = result.recommendation.expect("verdict");
    assert!(verdict.is_recyclable);
    assert_eq!(verdict.confidence, ACCEPTED_CONFIDENCE);
    assert_eq!(verdict.instructions, vec![CLEAN_STEP, COMPACT_STEP, PLACE_STEP]);

    let text = result.formatted_response.expect("formatted response");
    assert!(text.contains("Springfield, IL"));
    assert!(text.contains("(Confidence: 95%)"));
    assert!(text.contains("2. Flatten or crush"));
}

#[test]
fn test_rejected_foam_has_no_steps() {
    let product = TestFixtures::product("PS 6");
    let location = TestFixtures::location(&[], &["6"]);

    let result = SynthesisAgent::new().run(Some(&product), Some(&location));

    assert!(result.success);
    let verdict = result.recommendation.unwrap();
    assert!(!verdict.is_recyclable);
    assert_eq!(verdict.confidence, REJECTED_CONFIDENCE);
    assert!(verdict.instructions.is_empty());
    assert!(!result.formatted_response.unwrap().contains("How to Recycle"));
}

#[test]
fn test_glass_is_out_of_scope_with_tips() {
    let product = TestFixtures::product("glass");
    let location = TestFixtures::location(&["glass", "1"], &[]);

    let result = SynthesisAgent::new().run(Some(&product), Some(&location));

    assert!(result.success);
    let verdict = result.recommendation.unwrap();
    assert!(!verdict.is_recyclable);
    assert_eq!(verdict.confidence, OUT_OF_SCOPE_CONFIDENCE);
    assert_eq!(verdict.reason, OUT_OF_SCOPE_REASON);
    assert!(!verdict.tips.is_empty());
    assert!(result.formatted_response.unwrap().contains("## 💡 Tips"));
}

#[test]
fn test_unlisted_resin_is_uncertain() {
    let result = SynthesisAgent::new().run(
        Some(&TestFixtures::product("7")),
        Some(&TestFixtures::typical_location()),
    );

    let verdict = result.recommendation.unwrap();
    assert!(!verdict.is_recyclable);
    assert_eq!(verdict.confidence, UNKNOWN_CONFIDENCE);
    assert!(verdict.reason.contains("OTHER #7"));
}

#[test]
fn test_locality_note_leads_the_steps() {
    let result = SynthesisAgent::new().run(
        Some(&TestFixtures::product("PP#5")),
        Some(&TestFixtures::typical_location()),
    );

    let verdict = result.recommendation.unwrap();
    assert_eq!(
        verdict.instructions,
        vec!["Rinse tubs and leave lids on", COMPACT_STEP, PLACE_STEP]
    );
}

#[test]
fn test_empty_location_fails_fast() {
    let product = TestFixtures::water_bottle();

    let result = SynthesisAgent::new().run(Some(&product), Some(&LocationInfo::default()));

    assert!(!result.success);
    assert!(result.recommendation.is_none());
    assert!(result.formatted_response.is_none());
    assert!(result.error.unwrap().contains("Missing required information"));
}

#[test]
fn test_absent_product_fails_fast() {
    let location = TestFixtures::typical_location();

    let err = SynthesisAgent::new().try_run(None, Some(&location)).unwrap_err();

    assert_matches!(err, SynthesisError::MissingInput { ref missing } if missing == "product_info");
}

#[test]
fn test_out_of_range_confidence_still_gets_an_answer() {
    let mut location = TestFixtures::location(&["1"], &[]);
    location.confidence = 1.2;

    let result = SynthesisAgent::new().run(Some(&TestFixtures::product("1")), Some(&location));

    assert!(result.success);
    let verdict = result.recommendation.unwrap();
    assert!(verdict.is_recyclable);
    assert_eq!(verdict.confidence, ACCEPTED_CONFIDENCE);
}

#[test]
fn test_result_serializes_for_the_orchestrator() {
    let result = SynthesisAgent::new().run(
        Some(&TestFixtures::water_bottle()),
        Some(&TestFixtures::typical_location()),
    );

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["agent"], "synthesis");
    assert_eq!(json["recommendation"]["is_recyclable"], true);
    assert_eq!(json["recommendation"]["instructions"].as_array().unwrap().len(), 3);
    assert!(json.get("error").is_none());
}

#[test]
fn test_loosely_structured_json_records() {
    let product: ProductInfo =
        serde_json::from_str(r#"{"product_name": "Milk jug", "ric_code": "hdpe 2"}"#).unwrap();
    let location: LocationInfo = serde_json::from_str(
        r##"{"municipality": "Austin", "curbside_recycling": {"accepts": ["#2"]}}"##,
    )
    .unwrap();

    let result = SynthesisAgent::new().run(Some(&product), Some(&location));

    let verdict = result.recommendation.unwrap();
    assert!(verdict.is_recyclable);
    assert!(result.formatted_response.unwrap().contains("## 📍 Location: Austin\n"));
}

#[test]
fn test_colliding_note_keys_keep_document_order() {
    let location: LocationInfo = serde_json::from_str(
        r##"{
            "municipality": "Springfield",
            "curbside_recycling": {
                "accepts": ["1"],
                "special_instructions": {"PET 1": "FIRST NOTE", "1": "SECOND NOTE"}
            }
        }"##,
    )
    .unwrap();

    let result = SynthesisAgent::new().run(Some(&TestFixtures::product("1")), Some(&location));

    let verdict = result.recommendation.unwrap();
    assert_eq!(verdict.instructions, vec!["FIRST NOTE", COMPACT_STEP, PLACE_STEP]);
}
