//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures.


/// Common test utilities for services
pub mod common {
    use shared::{CurbsideProgram, LocationInfo, ProductInfo};

    use crate::services::RecordCatalog;

    pub fn sample_catalog() -> RecordCatalog {
        RecordCatalog {
            products: vec![
                ProductInfo::new("Water bottle", "PET 1", 0.95),
                ProductInfo::new("Bottle", "7", 0.4),
                ProductInfo::new("Foam cup", "PS #6", 0.9),
            ],
            locations: vec![LocationInfo {
                zip_code: Some("62701".to_string()),
                municipality: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                curbside_recycling: CurbsideProgram {
                    accepts: vec!["1".to_string(), "2".to_string()],
                    rejects: vec!["6".to_string()],
                    ..Default::default()
                },
                confidence: 0.9,
                ..Default::default()
            }],
        }
    }
}
