//! Body serialization utilities.

use bytes::Bytes;
use serde_json::Value;

use crate::{Parameter, Result};

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to a JSON string.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use spotify_web_api_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NewPlaylist { name: String }
///
/// let body = NewPlaylist { name: "Road trip".to_string() };
/// assert_eq!(to_json(&body).expect("serialize"), r#"{"name":"Road trip"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

/// Encode form parameters as `application/x-www-form-urlencoded`, keeping
/// their order and repeating duplicated names.
///
/// # Errors
///
/// Returns an error if form serialization fails.
///
/// # Example
///
/// ```
/// use spotify_web_api_core::{Parameter, to_form};
///
/// let form = [
///     Parameter::new("grant_type", "client_credentials"),
///     Parameter::new("scope", "a b"),
/// ];
/// assert_eq!(to_form(&form).expect("serialize").as_ref(), b"grant_type=client_credentials&scope=a+b");
/// ```
pub fn to_form(parameters: &[Parameter]) -> Result<Bytes> {
    let pairs: Vec<(&str, &str)> = parameters.iter().map(Parameter::as_pair).collect();
    serde_urlencoded::to_string(pairs)
        .map(|s| Bytes::from(s.into_bytes()))
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so that the message names the exact field
/// that failed to deserialize.
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Deserialize an already parsed JSON document with path-aware errors.
///
/// # Errors
///
/// Returns an error if the document does not match `T`.
pub fn from_json_value<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(
            ContentType::FormUrlEncoded.to_string(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn to_form_keeps_order_and_duplicates() {
        let form = [
            Parameter::new("b", "2"),
            Parameter::new("a", "1"),
            Parameter::new("b", "3"),
        ];
        let bytes = to_form(&form).expect("serialize");
        assert_eq!(bytes.as_ref(), b"b=2&a=1&b=3");
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Snapshot {
            snapshot_id: String,
        }

        let snapshot: Snapshot = from_json(br#"{"snapshot_id":"abc"}"#).expect("deserialize");
        assert_eq!(snapshot.snapshot_id, "abc");
    }

    #[test]
    fn from_json_syntax_error() {
        let result: Result<Value> = from_json(b"not json");
        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("JSON deserialization error"));
    }

    #[test]
    fn from_json_value_reports_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Owner {
            #[allow(dead_code)]
            id: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Playlist {
            #[allow(dead_code)]
            owner: Owner,
        }

        let value = serde_json::json!({ "owner": { "id": 7 } });
        let err = from_json_value::<Playlist>(value).expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("owner.id"), "Expected path 'owner.id' in error: {msg}");
    }
}
