//! Decoding of classified responses into typed models

use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Decoding for the byte payload of a classified response
///
/// A failure input is propagated unchanged. A success input is deserialized;
/// any serde failure (malformed JSON, missing field, wrong type) becomes a
/// `DeserializationFailure`, never a defaulted model.
pub trait DecodeExt {
    /// Deserializes the payload as `T`
    fn decode<T: DeserializeOwned>(self) -> Result<T, HttpError>;

    /// Deserializes the payload as wrapper `W`, then extracts `T` from it
    ///
    /// Used for list payloads nested under a key, e.g. `{"realms": [...]}`.
    fn decode_with<W, T, F>(self, extract: F) -> Result<T, HttpError>
    where
        W: DeserializeOwned,
        F: FnOnce(W) -> T;
}

impl DecodeExt for Result<Vec<u8>, HttpError> {
    fn decode<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let data = self?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn decode_with<W, T, F>(self, extract: F) -> Result<T, HttpError>
    where
        W: DeserializeOwned,
        F: FnOnce(W) -> T,
    {
        self.decode::<W>().map(extract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        items: Vec<TestData>,
    }

    fn ok(body: &str) -> Result<Vec<u8>, HttpError> {
        Ok(body.as_bytes().to_vec())
    }

    #[test]
    fn decodes_matching_payload() {
        let data: TestData = ok(r#"{"name": "test", "value": 42}"#).decode().unwrap();
        assert_eq!(
            data,
            TestData {
                name: "test".to_string(),
                value: 42
            }
        );
    }

    #[test]
    fn round_trips_encoded_value() {
        let original = TestData {
            name: "round".to_string(),
            value: -7,
        };
        let encoded = serde_json::to_vec(&original).unwrap();

        let decoded: TestData = Ok(encoded).decode().unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn failure_propagates_unchanged() {
        let err = HttpError::from_status(503, "busy");
        let result: Result<TestData, HttpError> = Err(err.clone()).decode();
        assert_eq!(result.unwrap_err(), err);
    }

    #[test]
    fn malformed_json_is_deserialization_failure() {
        let result: Result<TestData, HttpError> = ok("{not json").decode();
        assert_eq!(result.unwrap_err().kind(), ErrorKind::DeserializationFailure);
    }

    #[test]
    fn missing_field_is_deserialization_failure() {
        let result: Result<TestData, HttpError> = ok(r#"{"name": "partial"}"#).decode();
        let err = result.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DeserializationFailure);
        assert!(err.message().contains("value"));
    }

    #[test]
    fn type_mismatch_is_deserialization_failure() {
        let result: Result<TestData, HttpError> =
            ok(r#"{"name": "x", "value": "not a number"}"#).decode();
        assert_eq!(result.unwrap_err().kind(), ErrorKind::DeserializationFailure);
    }

    #[test]
    fn decode_with_extracts_nested_list() {
        let items: Vec<TestData> = ok(r#"{"items": [{"name": "a", "value": 1}]}"#)
            .decode_with(|w: Wrapper| w.items)
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "a");
    }

    #[test]
    fn decode_with_missing_wrapper_key_fails() {
        let result = ok(r#"{"other": []}"#).decode_with(|w: Wrapper| w.items);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::DeserializationFailure);
    }
}
