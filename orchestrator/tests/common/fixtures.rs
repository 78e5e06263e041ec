//! Test fixtures and data for orchestrator tests

use shared::{CurbsideProgram, LocationInfo, ProductInfo};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const QUERY: &'static str = "Is this water bottle recyclable?";
    pub const ZIP: &'static str = "62701";
    pub const USER: &'static str = "user-42";

    pub fn water_bottle() -> ProductInfo {
        ProductInfo::new("Water bottle", "PET 1", 0.95)
    }

    pub fn foam_cup() -> ProductInfo {
        ProductInfo::new("Foam cup", "ps#6", 0.9)
    }

    pub fn springfield() -> LocationInfo {
        LocationInfo {
            zip_code: Some(Self::ZIP.to_string()),
            municipality: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            curbside_recycling: CurbsideProgram {
                accepts: vec!["1".to_string(), "HDPE 2".to_string(), "#5".to_string()],
                rejects: vec!["PS #6".to_string()],
                ..Default::default()
            },
            confidence: 0.9,
            ..Default::default()
        }
    }
}
