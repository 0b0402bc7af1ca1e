//! Bearer token authentication middleware.
//!
//! Adds `Authorization: Bearer <token>` to calls that carry no
//! `Authorization` header. A token set on the request itself wins.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::{Call, Error, Response, Result};

/// Layer that adds bearer token authentication to calls.
#[derive(Debug, Clone)]
pub struct BearerAuthLayer {
    token: Arc<str>,
}

impl BearerAuthLayer {
    /// Create a new bearer auth layer with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BearerAuth {
            inner,
            token: Arc::clone(&self.token),
        }
    }
}

/// Service that adds bearer token authentication to calls.
#[derive(Debug, Clone)]
pub struct BearerAuth<S> {
    inner: S,
    token: Arc<str>,
}

impl<S> BearerAuth<S> {
    /// Create a new bearer auth service wrapping the given service.
    pub fn new(inner: S, token: impl Into<String>) -> Self {
        Self {
            inner,
            token: Arc::from(token.into()),
        }
    }
}

impl<S> Service<Call> for BearerAuth<S>
where
    S: Service<Call, Response = Response, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut call: Call) -> Self::Future {
        if call.request().header("Authorization").is_none() {
            call.request_mut()
                .set_header("Authorization", format!("Bearer {}", self.token));
        }

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(call).await })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{check, let_assert};
    use tower::{ServiceExt, service_fn};

    use super::*;
    use crate::{Method, Request};

    /// Echoes the `Authorization` header back as the body.
    fn echo_authorization(call: Call) -> std::future::Ready<Result<Response>> {
        let authorization = call.request().header("Authorization").unwrap_or_default().to_string();
        std::future::ready(Ok(Response::new(200, HashMap::new(), authorization)))
    }

    async fn authorization_sent(request: Request) -> String {
        let service = BearerAuthLayer::new("layer-token").layer(service_fn(echo_authorization));
        let_assert!(Ok(response) = service.oneshot(Call::new(Method::Get, request)).await);
        String::from_utf8_lossy(response.body()).into_owned()
    }

    #[tokio::test]
    async fn adds_missing_authorization() {
        let request = Request::builder().path("/v1/me").build().expect("request");
        check!(authorization_sent(request).await == "Bearer layer-token");
    }

    #[tokio::test]
    async fn keeps_request_token() {
        let request = Request::builder()
            .path("/v1/me")
            .access_token("request-token")
            .build()
            .expect("request");
        check!(authorization_sent(request).await == "Bearer request-token");
    }
}
