use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ModelObject;
use crate::{ErrorDetails, Result, from_json, from_json_value};

/// Error models are payloads themselves: they skip the envelope check.
macro_rules! error_model {
    ($model:ty) => {
        impl ModelObject for $model {
            fn from_payload(payload: &str) -> Result<Self> {
                from_json(payload.as_bytes())
            }

            fn from_value(value: Option<Value>) -> Result<Option<Self>> {
                match value {
                    None | Some(Value::Null) => Ok(None),
                    Some(value) => from_json_value(value).map(Some),
                }
            }
        }
    };
}

/// Error returned by the accounts service during authorization.
///
/// `{"error": "invalid_client", "error_description": "Invalid client secret"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationError {
    /// Short error code.
    pub error: Option<String>,
    /// Human-readable description.
    pub error_description: Option<String>,
}

error_model!(AuthenticationError);

impl From<AuthenticationError> for ErrorDetails {
    fn from(error: AuthenticationError) -> Self {
        Self {
            error: error.error,
            error_description: error.error_description,
        }
    }
}

/// Error object returned by the Web API: `{"status": 404, "message": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularError {
    /// HTTP status of the failure.
    pub status: Option<u16>,
    /// Human-readable description.
    pub message: Option<String>,
    /// Machine-readable reason, on player endpoints.
    pub reason: Option<String>,
}

/// The `{"error": {...}}` wrapper around a [`RegularError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularErrorEnvelope {
    /// The wrapped error.
    pub error: Option<RegularError>,
}

error_model!(RegularErrorEnvelope);

impl From<RegularError> for ErrorDetails {
    fn from(error: RegularError) -> Self {
        Self {
            error: error.reason,
            error_description: error.message,
        }
    }
}
