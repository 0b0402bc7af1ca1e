//! HTTP verbs used by the Web API.

use derive_more::Display;

/// HTTP verb an endpoint is executed with.
///
/// The Web API only needs the four verbs below; transports translate them
/// into their own method type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// Read a resource.
    #[display("GET")]
    Get,
    /// Create a resource or append to a collection.
    #[display("POST")]
    Post,
    /// Replace a resource or its details.
    #[display("PUT")]
    Put,
    /// Remove a resource or items of a collection.
    #[display("DELETE")]
    Delete,
}

impl Method {
    /// Returns `true` if repeating the call leaves the resource unchanged.
    #[must_use]
    pub const fn is_idempotent(&self) -> bool {
        matches!(self, Self::Get | Self::Put | Self::Delete)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            http::Method::PUT => Ok(Self::Put),
            http::Method::DELETE => Ok(Self::Delete),
            other => Err(crate::Error::invalid_request(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn method_is_idempotent() {
        assert!(Method::Get.is_idempotent());
        assert!(Method::Put.is_idempotent());
        assert!(Method::Delete.is_idempotent());
        assert!(!Method::Post.is_idempotent());
    }

    #[test]
    fn method_round_trips_through_http() {
        assert_eq!(http::Method::from(Method::Delete), http::Method::DELETE);
        assert_eq!(
            Method::try_from(http::Method::PUT).expect("PUT"),
            Method::Put
        );
    }

    #[test]
    fn method_rejects_unsupported_http_verb() {
        let err = Method::try_from(http::Method::PATCH).expect_err("PATCH is not used");
        assert_eq!(err.to_string(), "invalid request: unsupported HTTP method: PATCH");
    }
}
