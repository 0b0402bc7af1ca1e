//! Error taxonomy for Web API calls.
//!
//! Every failure a call can produce is one variant of [`Error`]: the HTTP
//! status variants (`BadRequest`, `NotFound`, ...), the body-level
//! [`Error::Api`] raised when a successful response still carries an error
//! envelope, and the transport / serialization failures.

use std::fmt;

use derive_more::{Display, Error, From};
use serde_json::Value;

// ============================================================================
// Error Details
// ============================================================================

/// Structured message the Web API attached to a failed response.
///
/// Two body formats are recognised:
///
/// - authentication errors: `{"error": "invalid_client", "error_description": "Invalid client"}`
/// - regular errors: `{"error": {"status": 404, "message": "Non existing id"}}`
///
/// For regular errors the `message` is stored as the description and the
/// optional `reason` as the error code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetails {
    /// Short error code, e.g. `invalid_request`.
    pub error: Option<String>,
    /// Human-readable description.
    pub error_description: Option<String>,
}

impl ErrorDetails {
    /// Create details from an error code and a description.
    #[must_use]
    pub fn new(error: impl Into<String>, error_description: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            error_description: Some(error_description.into()),
        }
    }

    /// Extract details from a raw response body.
    ///
    /// Bodies that are empty, not JSON, or carry no `error` member yield
    /// empty details.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_json_value(&value))
            .unwrap_or_default()
    }

    /// Extract details from an already parsed JSON document.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        match value.get("error") {
            Some(Value::String(code)) => Self {
                error: Some(code.clone()),
                error_description: string_member(value, "error_description"),
            },
            Some(error @ Value::Object(_)) => Self {
                error: string_member(error, "reason"),
                error_description: string_member(error, "message"),
            },
            _ => Self::default(),
        }
    }

    /// Returns `true` if neither the code nor the description is known.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.error.is_none() && self.error_description.is_none()
    }

    /// The most descriptive message available.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error_description.as_deref().or(self.error.as_deref())
    }
}

fn string_member(value: &Value, name: &str) -> Option<String> {
    value.get(name).and_then(Value::as_str).map(str::to_string)
}

/// Renders as `: <description> (<code>)`, or nothing when empty, so it can
/// be appended to a status line.
impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => write!(f, ": {description} ({error})"),
            (None, Some(description)) => write!(f, ": {description}"),
            (Some(error), None) => write!(f, ": {error}"),
            (None, None) => Ok(()),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for Web API calls.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// 204 on an endpoint that is expected to return a payload.
    #[display("HTTP 204 No Content{_0}")]
    #[from(skip)]
    NoContent(#[error(not(source))] ErrorDetails),

    /// 400: the request was malformed.
    #[display("HTTP 400 Bad Request{_0}")]
    #[from(skip)]
    BadRequest(#[error(not(source))] ErrorDetails),

    /// 401: missing, expired or invalid access token.
    #[display("HTTP 401 Unauthorized{_0}")]
    #[from(skip)]
    Unauthorized(#[error(not(source))] ErrorDetails),

    /// 403: the token does not grant access to the resource.
    #[display("HTTP 403 Forbidden{_0}")]
    #[from(skip)]
    Forbidden(#[error(not(source))] ErrorDetails),

    /// 404: the resource does not exist.
    #[display("HTTP 404 Not Found{_0}")]
    #[from(skip)]
    NotFound(#[error(not(source))] ErrorDetails),

    /// 429: the application is being rate limited.
    #[display("HTTP 429 Too Many Requests{details}")]
    #[from(skip)]
    TooManyRequests {
        /// Message attached by the API.
        #[error(not(source))]
        details: ErrorDetails,
        /// Seconds to wait, from the `Retry-After` header.
        retry_after: Option<u64>,
    },

    /// 500: the API failed to process the request.
    #[display("HTTP 500 Internal Server Error{_0}")]
    #[from(skip)]
    InternalServerError(#[error(not(source))] ErrorDetails),

    /// 502: the API gateway received an invalid upstream response.
    #[display("HTTP 502 Bad Gateway{_0}")]
    #[from(skip)]
    BadGateway(#[error(not(source))] ErrorDetails),

    /// 503: the API is temporarily unavailable.
    #[display("HTTP 503 Service Unavailable{_0}")]
    #[from(skip)]
    ServiceUnavailable(#[error(not(source))] ErrorDetails),

    /// Any other non-success status.
    #[display("HTTP {status}{details}")]
    #[from(skip)]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Message attached by the API.
        #[error(not(source))]
        details: ErrorDetails,
    },

    /// Error envelope found in the body of a successful response.
    #[display("API error{_0}")]
    #[from(skip)]
    Api(#[error(not(source))] ErrorDetails),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_urlencoded::ser::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "tracks.items.0.track").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map a non-success HTTP status to its error variant.
    ///
    /// Statuses outside the fixed taxonomy become [`Error::UnexpectedStatus`].
    #[must_use]
    pub fn from_status(status: u16, details: ErrorDetails) -> Self {
        match status {
            204 => Self::NoContent(details),
            400 => Self::BadRequest(details),
            401 => Self::Unauthorized(details),
            403 => Self::Forbidden(details),
            404 => Self::NotFound(details),
            429 => Self::TooManyRequests {
                details,
                retry_after: None,
            },
            500 => Self::InternalServerError(details),
            502 => Self::BadGateway(details),
            503 => Self::ServiceUnavailable(details),
            status => Self::UnexpectedStatus { status, details },
        }
    }

    /// Attach a `Retry-After` delay; no-op for anything but `TooManyRequests`.
    #[must_use]
    pub fn with_retry_after(self, seconds: Option<u64>) -> Self {
        match self {
            Self::TooManyRequests { details, .. } => Self::TooManyRequests {
                details,
                retry_after: seconds,
            },
            other => other,
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for status errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NoContent(_) => Some(204),
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::TooManyRequests { .. } => Some(429),
            Self::InternalServerError(_) => Some(500),
            Self::BadGateway(_) => Some(502),
            Self::ServiceUnavailable(_) => Some(503),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the API-supplied message, if any was found.
    #[must_use]
    pub fn details(&self) -> Option<&ErrorDetails> {
        let details = match self {
            Self::NoContent(details)
            | Self::BadRequest(details)
            | Self::Unauthorized(details)
            | Self::Forbidden(details)
            | Self::NotFound(details)
            | Self::InternalServerError(details)
            | Self::BadGateway(details)
            | Self::ServiceUnavailable(details)
            | Self::Api(details)
            | Self::TooManyRequests { details, .. }
            | Self::UnexpectedStatus { details, .. } => details,
            _ => return None,
        };
        (!details.is_empty()).then_some(details)
    }

    /// Seconds to wait before retrying, for `TooManyRequests`.
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::TooManyRequests { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` for a 204 on an endpoint expecting a payload.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent(_))
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
