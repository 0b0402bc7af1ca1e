//! Classification of call outcomes.
//!
//! Two checks run in order. [`check_status`] maps the HTTP status of a
//! response to the error taxonomy; it always wins. Payloads that pass it are
//! decoded by [`decode_model`], which still inspects the JSON for an
//! embedded `error` envelope before building the model.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{Error, ErrorDetails, Response, Result, from_json, from_json_value};

/// Payload text for 2xx responses (except 204), typed error otherwise.
///
/// The error carries the `error`/`error_description` found in the body and,
/// for 429, the `Retry-After` delay. A success body that is not UTF-8 is an
/// [`Error::JsonDeserialization`] at the document root.
pub fn check_status(response: Response) -> Result<String> {
    let status = response.status();
    if response.is_success() && status != 204 {
        return std::str::from_utf8(response.body())
            .map(str::to_owned)
            .map_err(|err| {
                Error::json_deserialization(".", format!("payload is not valid UTF-8: {err}"))
            });
    }

    let retry_after = response.retry_after();
    let details = ErrorDetails::from_body(response.body());
    let error = Error::from_status(status, details).with_retry_after(retry_after);
    debug!(status, error = %error, "response classified as failure");
    Err(error)
}

/// Fail if a parsed payload is an error envelope.
///
/// An envelope whose `error.status` is a failure status maps to that status
/// variant; any other envelope becomes [`Error::Api`].
pub fn check_envelope(value: &Value) -> Result<()> {
    let Some(error) = value.get("error").filter(|error| !error.is_null()) else {
        return Ok(());
    };

    let details = ErrorDetails::from_json_value(value);
    let status = error
        .get("status")
        .and_then(Value::as_u64)
        .and_then(|status| u16::try_from(status).ok())
        .filter(|status| !(200..300).contains(status));

    let error = match status {
        Some(status) => Error::from_status(status, details),
        None => Error::Api(details),
    };
    debug!(error = %error, "error envelope in successful response");
    Err(error)
}

/// Parse a payload, reject error envelopes, then deserialize the model.
pub fn decode_model<M: DeserializeOwned>(payload: &str) -> Result<M> {
    let value: Value = from_json(payload.as_bytes())?;
    check_envelope(&value)?;
    from_json_value(value)
}

/// Accept an empty payload, or one that is not an error envelope.
///
/// Used by endpoints whose result is only success or failure.
pub fn decode_empty(payload: &str) -> Result<()> {
    if payload.trim().is_empty() {
        return Ok(());
    }
    match from_json::<Value>(payload.as_bytes()) {
        Ok(value) => check_envelope(&value),
        Err(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{check, let_assert};

    use super::*;
    use crate::model::{Playlist, SnapshotResult};

    fn response(status: u16, body: &'static str) -> Response {
        Response::new(status, HashMap::new(), body)
    }

    #[test]
    fn success_returns_payload() {
        let payload = check_status(response(200, r#"{"snapshot_id":"x"}"#)).expect("payload");
        check!(payload == r#"{"snapshot_id":"x"}"#);

        let payload = check_status(response(201, "")).expect("payload");
        check!(payload.is_empty());
    }

    #[test]
    fn invalid_utf8_success_payload_is_an_error() {
        let response = Response::new(200, HashMap::new(), &b"{\"name\":\"\xff\"}"[..]);

        let_assert!(Err(Error::JsonDeserialization { path, message }) = check_status(response));
        check!(path == ".");
        check!(message.starts_with("payload is not valid UTF-8"));
    }

    #[test]
    fn not_found_without_body_has_no_message() {
        let_assert!(Err(Error::NotFound(details)) = check_status(response(404, "")));
        check!(details.is_empty());
    }

    #[test]
    fn bad_request_carries_both_fields_verbatim() {
        let body = r#"{"error":"invalid_request","error_description":"Missing required parameter."}"#;
        let_assert!(Err(Error::BadRequest(details)) = check_status(response(400, body)));
        check!(details.error.as_deref() == Some("invalid_request"));
        check!(details.error_description.as_deref() == Some("Missing required parameter."));
    }

    #[test]
    fn no_content_is_an_error_kind() {
        let_assert!(Err(err) = check_status(response(204, "")));
        check!(err.is_no_content());
    }

    #[test]
    fn rate_limiting_reads_retry_after() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), "3".to_string());
        let response = Response::new(429, headers, "");

        let_assert!(Err(err) = check_status(response));
        check!(err.retry_after() == Some(3));
    }

    #[test]
    fn redirects_are_unexpected() {
        let_assert!(Err(err) = check_status(response(302, "")));
        check!(matches!(err, Error::UnexpectedStatus { status: 302, .. }));
    }

    #[test]
    fn envelope_with_status_maps_to_that_status() {
        let payload = r#"{"error":{"status":401,"message":"The access token expired"}}"#;
        let_assert!(Err(Error::Unauthorized(details)) = decode_model::<Playlist>(payload));
        check!(details.message() == Some("The access token expired"));
    }

    #[test]
    fn envelope_without_status_is_an_api_error() {
        let payload = r#"{"error":"invalid_grant","error_description":"Invalid refresh token"}"#;
        let_assert!(Err(Error::Api(details)) = decode_model::<Playlist>(payload));
        check!(details.error.as_deref() == Some("invalid_grant"));
    }

    #[test]
    fn status_error_wins_over_envelope() {
        let body = r#"{"error":{"status":401,"message":"expired"}}"#;
        let_assert!(Err(err) = check_status(response(503, body)));
        check!(matches!(err, Error::ServiceUnavailable(_)));
        check!(err.details().and_then(ErrorDetails::message) == Some("expired"));
    }

    #[test]
    fn null_error_member_is_not_an_envelope() {
        let payload = r#"{"snapshot_id":"abc","error":null}"#;
        let snapshot: SnapshotResult = decode_model(payload).expect("model");
        check!(snapshot.snapshot_id.as_deref() == Some("abc"));
    }

    #[test]
    fn decode_empty_accepts_blank_payloads() {
        check!(decode_empty("").is_ok());
        check!(decode_empty("  \n").is_ok());
        check!(decode_empty(r#"{"snapshot_id":"abc"}"#).is_ok());
        check!(decode_empty(r#"{"error":{"status":403,"message":"no"}}"#).is_err());
    }
}
