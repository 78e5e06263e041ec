//! Shared error types for the recycling advisor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            SharedError::DeserializationError { message: err.to_string() }
        } else {
            SharedError::SerializationError { message: err.to_string() }
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Parse a JSON record, mapping failures into `SharedError`
pub fn from_json<T: serde::de::DeserializeOwned>(input: &str) -> SharedResult<T> {
    Ok(serde_json::from_str(input)?)
}

/// Render a record as pretty JSON
pub fn to_json<T: serde::Serialize>(value: &T) -> SharedResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductInfo;

    #[test]
    fn test_malformed_json_is_deserialization_error() {
        let result: SharedResult<ProductInfo> = from_json("{ not json");
        assert!(matches!(result, Err(SharedError::DeserializationError { .. })));
    }

    #[test]
    fn test_json_helpers_round_trip_product() {
        let product = ProductInfo::new("Yogurt cup", "PP 5", 0.8);
        let json = to_json(&product).unwrap();
        let parsed: ProductInfo = from_json(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
