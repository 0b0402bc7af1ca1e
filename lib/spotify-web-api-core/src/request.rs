//! Request descriptors and their builder.
//!
//! A [`RequestBuilder`] accumulates the target (scheme, host, port, path) and
//! four independent collections: query parameters, headers, a body (form
//! parameters *or* JSON) and multipart parts. [`RequestBuilder::build`]
//! produces an immutable [`Request`] that can be rendered, logged and sent
//! any number of times.
//!
//! # Example
//!
//! ```
//! use spotify_web_api_core::Request;
//!
//! let request = Request::builder()
//!     .path("/v1/search")
//!     .parameter("q", "abba")
//!     .parameter("type", "artist")
//!     .access_token("BQDx")
//!     .build()
//!     .expect("valid request");
//!
//! assert_eq!(
//!     request.to_string(),
//!     "https://api.spotify.com:443/v1/search?q=abba&type=artist"
//! );
//! ```

use bytes::Bytes;
use derive_more::Display;
use tracing::warn;

use crate::multipart::{encode_multipart, generate_boundary};
use crate::{ContentType, Error, Part, PathTemplate, Result, to_form, to_json};

/// Scheme used when none is configured.
pub const DEFAULT_SCHEME: Scheme = Scheme::Https;
/// Host of the Web API.
pub const DEFAULT_HOST: &str = "api.spotify.com";
/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 443;

/// URL scheme of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Scheme {
    /// Plain HTTP, for local fakes.
    #[display("http")]
    Http,
    /// HTTPS.
    #[default]
    #[display("https")]
    Https,
}

/// A name/value pair: query parameter, header or form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Create a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Borrow as a `(name, value)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.name, &self.value)
    }
}

/// Body of a request: nothing, flat form fields, or one JSON document.
///
/// The two payload forms are exclusive; setting one replaces the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// Form fields, sent URL-encoded (or as text parts next to multipart parts).
    Form(Vec<Parameter>),
    /// Serialized JSON document.
    Json(String),
}

impl RequestBody {
    /// Returns `true` if there is no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Form fields, if this is a form body.
    #[must_use]
    pub fn form(&self) -> &[Parameter] {
        match self {
            Self::Form(parameters) => parameters,
            _ => &[],
        }
    }

    /// JSON document, if this is a JSON body.
    #[must_use]
    pub fn json(&self) -> Option<&str> {
        match self {
            Self::Json(json) => Some(json),
            _ => None,
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// Immutable description of one Web API call.
///
/// Shared descriptors are read-only. The one mutator, [`Request::set_header`],
/// needs an owned value, so it only ever edits a private copy, such as the
/// one a middleware receives for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    scheme: Scheme,
    host: String,
    port: u16,
    path: String,
    template: Option<PathTemplate>,
    parameters: Vec<Parameter>,
    headers: Vec<Parameter>,
    body: RequestBody,
    parts: Vec<Part>,
}

impl Request {
    /// Creates a new [`RequestBuilder`] targeting the Web API.
    #[must_use]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// URL scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Resolved path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Template the path was rendered from, for endpoint requests.
    #[must_use]
    pub const fn path_template(&self) -> Option<PathTemplate> {
        self.template
    }

    /// Query parameters, in insertion order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Header parameters, in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[Parameter] {
        &self.headers
    }

    /// First header value with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(Parameter::value)
    }

    /// Replace every header with the given name by a single value.
    ///
    /// Only the value it is called on changes: clones made earlier, such as
    /// the descriptor held by a reusable endpoint request, keep their headers.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let header = Parameter::new(name, value);
        self.headers
            .retain(|existing| !existing.name.eq_ignore_ascii_case(&header.name));
        self.headers.push(header);
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Multipart parts, in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Render as `scheme://host:port/path[?query]`.
    ///
    /// Query parameters keep their insertion order and duplicates. Headers,
    /// body and parts are not part of the rendering.
    #[must_use]
    pub fn render(&self, include_query: bool) -> String {
        let mut rendered = format!("{}://{}:{}", self.scheme, self.host, self.port);
        if !self.path.starts_with('/') {
            rendered.push('/');
        }
        rendered.push_str(&self.path);

        if include_query && !self.parameters.is_empty() {
            let mut query = url::form_urlencoded::Serializer::new(String::new());
            for parameter in &self.parameters {
                query.append_pair(&parameter.name, &parameter.value);
            }
            rendered.push('?');
            rendered.push_str(&query.finish());
        }

        rendered
    }

    /// Parse the full rendering into a URL for transports.
    pub fn to_url(&self) -> Result<url::Url> {
        url::Url::parse(&self.render(true)).map_err(Error::from)
    }

    /// Encode the wire body and its `Content-Type`.
    ///
    /// Multipart parts take precedence: form fields are then sent as
    /// leading text parts. Otherwise the JSON or form body is encoded as is.
    pub fn encode_body(&self) -> Result<Option<(String, Bytes)>> {
        if !self.parts.is_empty() {
            let boundary = generate_boundary();
            return Ok(Some(encode_multipart(
                &boundary,
                self.body.form(),
                &self.parts,
            )));
        }

        match &self.body {
            RequestBody::Empty => Ok(None),
            RequestBody::Json(json) => Ok(Some((
                ContentType::Json.to_string(),
                Bytes::from(json.clone()),
            ))),
            RequestBody::Form(parameters) => Ok(Some((
                ContentType::FormUrlEncoded.to_string(),
                to_form(parameters)?,
            ))),
        }
    }
}

/// Full rendering, query string included.
impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(true))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing [`Request`] instances.
///
/// Precondition violations (such as an empty parameter name) do not panic:
/// the first one is remembered and reported by [`RequestBuilder::build`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    scheme: Scheme,
    host: String,
    port: u16,
    path: Option<String>,
    template: Option<PathTemplate>,
    parameters: Vec<Parameter>,
    headers: Vec<Parameter>,
    body: RequestBody,
    parts: Vec<Part>,
    violation: Option<String>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// Creates a builder targeting `https://api.spotify.com:443`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: DEFAULT_SCHEME,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: None,
            template: None,
            parameters: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
            parts: Vec::new(),
            violation: None,
        }
    }

    /// Sets the scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the path verbatim.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self.template = None;
        self
    }

    /// Sets the path by rendering a template with endpoint identifiers.
    #[must_use]
    pub fn path_template(mut self, template: PathTemplate, values: &[(&str, &str)]) -> Self {
        self.path = Some(template.render(values));
        self.template = Some(template);
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let parameter = self.checked("query parameter", name, value);
        self.parameters.push(parameter);
        self
    }

    /// Appends a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let header = self.checked("header", name, value);
        self.headers.push(header);
        self
    }

    /// Sets a header, replacing every header with the same name
    /// (case-insensitive).
    #[must_use]
    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let header = self.checked("header", name, value);
        self.headers
            .retain(|existing| !existing.name.eq_ignore_ascii_case(&header.name));
        self.headers.push(header);
        self
    }

    /// Appends a form body field, replacing a JSON body if one was set.
    #[must_use]
    pub fn body_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let parameter = self.checked("body parameter", name, value);
        match &mut self.body {
            RequestBody::Form(parameters) => parameters.push(parameter),
            body => {
                if !body.is_empty() {
                    warn!("form body parameter replaces the JSON body");
                }
                *body = RequestBody::Form(vec![parameter]);
            }
        }
        self
    }

    /// Sets the whole body to a serialized JSON document, replacing any
    /// form fields.
    #[must_use]
    pub fn json_body(mut self, json: impl Into<String>) -> Self {
        if !self.body.form().is_empty() {
            warn!("JSON body replaces the form body parameters");
        }
        self.body = RequestBody::Json(json.into());
        self
    }

    /// Serialize `value` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let json = to_json(value)?;
        Ok(self.json_body(json))
    }

    /// Appends a multipart part.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Sets `Authorization: Bearer <token>`, replacing a previous token.
    #[must_use]
    pub fn access_token(self, access_token: impl AsRef<str>) -> Self {
        self.set_header(
            "Authorization",
            format!("Bearer {}", access_token.as_ref()),
        )
    }

    /// Appends the `fields` filter selecting which members are returned.
    #[must_use]
    pub fn fields(self, fields: impl Into<String>) -> Self {
        self.parameter("fields", fields)
    }

    /// Appends the `market` (ISO 3166-1 alpha-2 country code) parameter.
    #[must_use]
    pub fn market(self, market: impl Into<String>) -> Self {
        self.parameter("market", market)
    }

    fn checked(
        &mut self,
        kind: &str,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Parameter {
        let parameter = Parameter::new(name, value);
        if parameter.name.is_empty() && self.violation.is_none() {
            self.violation = Some(format!("{kind} name must not be empty"));
        }
        parameter
    }

    /// Builds the [`Request`].
    ///
    /// Only presence is checked: a host, a positive port and a path.
    /// Identifiers interpolated into the path are not validated.
    pub fn build(self) -> Result<Request> {
        if let Some(violation) = self.violation {
            return Err(Error::invalid_request(violation));
        }
        if self.host.is_empty() {
            return Err(Error::invalid_request("host must be set"));
        }
        if self.port == 0 {
            return Err(Error::invalid_request("port must be positive"));
        }
        let Some(path) = self.path else {
            return Err(Error::invalid_request("path must be set"));
        };
        if !self.parts.is_empty() && self.body.json().is_some() {
            warn!(%path, "JSON body is not sent alongside multipart parts");
        }

        Ok(Request {
            scheme: self.scheme,
            host: self.host,
            port: self.port,
            path,
            template: self.template,
            parameters: self.parameters,
            headers: self.headers,
            body: self.body,
            parts: self.parts,
        })
    }
}
