//! Test fixtures and data for synthesis tests

use shared::{CurbsideProgram, LocalAuthority, LocationInfo, ProductInfo};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const MUNICIPALITY: &'static str = "Springfield";
    pub const STATE: &'static str = "IL";
    pub const ZIP: &'static str = "62701";

    pub fn product(ric_code: &str) -> ProductInfo {
        ProductInfo::new("Sample item", ric_code, 0.92)
    }

    pub fn water_bottle() -> ProductInfo {
        ProductInfo::new("Water bottle", "1", 0.95)
    }

    /// Locality with the given raw accept/reject lists and no notes
    pub fn location(accepts: &[&str], rejects: &[&str]) -> LocationInfo {
        LocationInfo {
            zip_code: Some(Self::ZIP.to_string()),
            municipality: Some(Self::MUNICIPALITY.to_string()),
            state: Some(Self::STATE.to_string()),
            local_authority: LocalAuthority {
                name: Some("Springfield Public Works".to_string()),
                ..Default::default()
            },
            curbside_recycling: CurbsideProgram {
                accepts: accepts.iter().map(|s| s.to_string()).collect(),
                rejects: rejects.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            confidence: 0.88,
        }
    }

    /// A typical program: bottles and jugs in, foam and film out
    pub fn typical_location() -> LocationInfo {
        let mut location = Self::location(&["PET #1", "HDPE 2", "#5"], &["6", "LDPE #4"]);
        location
            .curbside_recycling
            .special_instructions
            .insert("pp 5".to_string(), "Rinse tubs and leave lids on".to_string());
        location
    }
}
