//! HTTP client implementation using hyper-util.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::Layer;
use tower::util::BoxCloneService;
use tower_service::Service;

use crate::middleware::{BearerAuthLayer, LoggingLayer};
use crate::{
    Error, Method, Request, Response, Result,
    config::{ClientConfig, ClientConfigBuilder},
};

// ============================================================================
// Call: the unit flowing through the middleware stack
// ============================================================================

/// A request descriptor paired with the method it is sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    method: Method,
    request: Request,
}

impl Call {
    /// Pair a request with a method.
    #[must_use]
    pub const fn new(method: Method, request: Request) -> Self {
        Self { method, request }
    }

    /// The HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The request descriptor.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Mutable access, for middleware adding headers.
    pub const fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    /// Split into method and request.
    #[must_use]
    pub fn into_parts(self) -> (Method, Request) {
        (self.method, self.request)
    }
}

// ============================================================================
// Type-Erased Service for Middleware Composition
// ============================================================================

/// Type-erased service for middleware composition.
pub type BoxedService = BoxCloneService<Call, Response, Error>;

/// Future type for Tower Service implementation.
pub type ServiceFuture = Pin<Box<dyn Future<Output = Result<Response>> + Send + 'static>>;

/// Makes a `BoxedService` shareable: the `HttpClient` trait requires `Sync`.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, call: Call) -> ServiceFuture {
        // Lock, clone the service, and release the lock immediately
        let mut service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { service.call(call).await })
    }
}

// ============================================================================
// Raw Client
// ============================================================================

/// Raw hyper-util client, at the bottom of the middleware stack.
#[derive(Clone)]
struct RawHyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: ClientConfig,
}

impl RawHyperClient {
    fn new(config: ClientConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector(config.connect_timeout));

        Self { inner, config }
    }

    fn build_hyper_request(&self, call: Call) -> Result<http::Request<Full<Bytes>>> {
        let (method, request) = call.into_parts();
        let url = request.to_url()?;

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for header in request.headers() {
            builder = builder.header(header.name(), header.value());
        }
        if request.header("user-agent").is_none() {
            builder = builder.header(http::header::USER_AGENT, self.config.user_agent.as_str());
        }

        let body = match request.encode_body()? {
            Some((content_type, body)) => {
                if request.header("content-type").is_none() {
                    builder = builder.header(http::header::CONTENT_TYPE, content_type);
                }
                Full::new(body)
            }
            None => Full::default(),
        };

        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    async fn execute(&self, call: Call) -> Result<Response> {
        let hyper_request = self.build_hyper_request(call)?;

        let exchange = async {
            let response = self
                .inner
                .request(hyper_request)
                .await
                .map_err(Self::map_hyper_error)?;

            let status = response.status().as_u16();
            let headers = Self::extract_headers(response.headers());
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();

            Ok(Response::new(status, headers, body))
        };

        tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)?
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

/// HTTPS connector with rustls and the Mozilla root certificates.
///
/// Plain `http` is still allowed, for local test servers.
fn https_connector(connect_timeout: Duration) -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(connect_timeout));

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(http)
}

impl Service<Call> for RawHyperClient {
    type Response = Response;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, call: Call) -> Self::Future {
        let client = self.clone();
        Box::pin(async move { client.execute(call).await })
    }
}

// ============================================================================
// Public Client
// ============================================================================

/// HTTP client using hyper-util with connection pooling, TLS, and middleware support.
///
/// # Example
///
/// ```no_run
/// use spotify_web_api::HyperClient;
/// use std::time::Duration;
///
/// let client = HyperClient::builder()
///     .timeout(Duration::from_secs(10))
///     .with_logging()
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    service: SyncService,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration (no middleware).
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let raw = RawHyperClient::new(config.clone());
        Self::with_service(BoxCloneService::new(raw), config)
    }

    fn with_service(service: BoxedService, config: ClientConfig) -> Self {
        Self {
            service: SyncService::new(service),
            config,
        }
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl spotify_web_api_core::HttpClient for HyperClient {
    async fn execute(&self, method: Method, request: &Request) -> Result<Response> {
        self.service.call(Call::new(method, request.clone())).await
    }
}

impl Service<Call> for HyperClient {
    type Response = Response;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        // SyncService is always ready (the underlying service is polled when called)
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, call: Call) -> Self::Future {
        self.service.call(call)
    }
}

/// Builder for [`HyperClient`].
///
/// ```no_run
/// use spotify_web_api::HyperClient;
/// use spotify_web_api::middleware::BearerAuthLayer;
///
/// let client = HyperClient::builder()
///     .with_defaults()
///     .layer(BearerAuthLayer::new("BQDx"))
///     .build();
/// ```
#[derive(Default)]
pub struct HyperClientBuilder {
    config: ClientConfigBuilder,
    layers: Vec<Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>>,
    use_defaults: bool,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("layers_count", &self.layers.len())
            .field("use_defaults", &self.use_defaults)
            .finish()
    }
}

impl HyperClientBuilder {
    // ========================================================================
    // Core Configuration
    // ========================================================================

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent);
        self
    }

    // ========================================================================
    // Middleware
    // ========================================================================

    /// Add a Tower layer to the client.
    ///
    /// Layers are applied in order: first added = innermost, the last one
    /// added sees the call first.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Call, Response = Response, Error = Error> + Clone + Send + 'static,
        <L::Service as Service<Call>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Alias for [`HyperClientBuilder::layer`].
    #[must_use]
    pub fn with<L>(self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Call, Response = Response, Error = Error> + Clone + Send + 'static,
        <L::Service as Service<Call>>::Future: Send,
    {
        self.layer(layer)
    }

    /// Enable default middleware (info-level logging), applied before any
    /// layer added with `.layer()`.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.use_defaults = true;
        self
    }

    /// Disable all default middleware.
    #[must_use]
    pub fn without_defaults(mut self) -> Self {
        self.use_defaults = false;
        self
    }

    /// Send `Authorization: Bearer <token>` on calls that carry no
    /// `Authorization` header of their own.
    #[must_use]
    pub fn with_bearer_auth(self, token: impl Into<String>) -> Self {
        self.layer(BearerAuthLayer::new(token))
    }

    /// Add request/response logging.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Add debug-level logging (includes headers).
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.layer(LoggingLayer::debug())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the client with all configured middleware.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let config = self.config.build();
        let mut service: BoxedService = BoxCloneService::new(RawHyperClient::new(config.clone()));

        if self.use_defaults {
            service = BoxCloneService::new(LoggingLayer::new().layer(service));
        }

        for layer_fn in self.layers {
            service = layer_fn(service);
        }

        HyperClient::with_service(service, config)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    fn call(request: Request) -> Call {
        Call::new(Method::Post, request)
    }

    #[tokio::test]
    async fn client_default() {
        let client = HyperClient::new();
        check!(client.config().timeout == Duration::from_secs(30));
    }

    #[tokio::test]
    async fn client_builder() {
        let client = HyperClient::builder()
            .timeout(Duration::from_secs(60))
            .pool_idle_per_host(16)
            .user_agent("test-agent")
            .build();

        check!(client.config().timeout == Duration::from_secs(60));
        check!(client.config().pool_idle_per_host == 16);
        check!(client.config().user_agent == "test-agent");
        check!(format!("{client:?}").contains("HyperClient"));
    }

    #[tokio::test]
    async fn hyper_request_carries_body_and_content_type() {
        let raw = RawHyperClient::new(ClientConfig::default());
        let request = Request::builder()
            .path("/v1/playlists/abc/tracks")
            .json_body(r#"{"uris":["spotify:track:1"]}"#)
            .build()
            .expect("request");

        let_assert!(Ok(hyper_request) = raw.build_hyper_request(call(request)));
        check!(hyper_request.method() == http::Method::POST);
        check!(hyper_request.uri() == "https://api.spotify.com/v1/playlists/abc/tracks");
        check!(hyper_request.headers()[http::header::CONTENT_TYPE] == "application/json");
        check!(hyper_request.headers().contains_key(http::header::USER_AGENT));
    }

    #[tokio::test]
    async fn explicit_headers_are_kept() {
        let raw = RawHyperClient::new(ClientConfig::default());
        let request = Request::builder()
            .path("/v1/me")
            .header("User-Agent", "custom")
            .header("Content-Type", "text/plain")
            .json_body("{}")
            .build()
            .expect("request");

        let_assert!(Ok(hyper_request) = raw.build_hyper_request(call(request)));
        check!(hyper_request.headers()[http::header::USER_AGENT] == "custom");
        check!(hyper_request.headers()[http::header::CONTENT_TYPE] == "text/plain");
        check!(hyper_request.headers().get_all(http::header::CONTENT_TYPE).iter().count() == 1);
    }
}
