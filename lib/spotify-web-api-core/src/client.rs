//! HTTP client traits.
//!
//! - [`HttpClient`] - Low-level HTTP execution of a [`Request`]
//! - [`HttpClientExt`] - Per-method helpers returning the classified payload
//!
//! Implement [`HttpClient`] for custom transports or for testing.

use std::future::Future;

use crate::{Method, Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations send the request as rendered by [`Request::to_url`] with
/// its headers and [`Request::encode_body`], and return the raw response.
/// Status classification is not the transport's job.
pub trait HttpClient: Send + Sync {
    /// Execute a request with the given method and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        method: Method,
        request: &Request,
    ) -> impl Future<Output = Result<Response>> + Send;
}

/// Extension trait for [`HttpClient`] with one helper per method.
///
/// Each helper returns the payload of a successful response, or the error
/// its status maps to.
pub trait HttpClientExt: HttpClient {
    /// Execute a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    fn get(&self, request: &Request) -> impl Future<Output = Result<String>> + Send {
        async move { self.execute(Method::Get, request).await?.into_payload() }
    }

    /// Execute a POST request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    fn post(&self, request: &Request) -> impl Future<Output = Result<String>> + Send {
        async move { self.execute(Method::Post, request).await?.into_payload() }
    }

    /// Execute a PUT request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    fn put(&self, request: &Request) -> impl Future<Output = Result<String>> + Send {
        async move { self.execute(Method::Put, request).await?.into_payload() }
    }

    /// Execute a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    fn delete(&self, request: &Request) -> impl Future<Output = Result<String>> + Send {
        async move { self.execute(Method::Delete, request).await?.into_payload() }
    }
}

// Blanket implementation for all HttpClient implementors
impl<T: HttpClient> HttpClientExt for T {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert2::{check, let_assert};

    use super::*;
    use crate::Error;

    /// Replays a canned response and records what it was asked to send.
    struct Canned {
        status: u16,
        body: &'static str,
        sent: Mutex<Vec<(Method, String)>>,
    }

    impl Canned {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpClient for Canned {
        fn execute(
            &self,
            method: Method,
            request: &Request,
        ) -> impl Future<Output = Result<Response>> + Send {
            self.sent
                .lock()
                .expect("lock")
                .push((method, request.to_string()));
            let response = Response::new(self.status, HashMap::new(), self.body);
            async move { Ok(response) }
        }
    }

    fn block_on<F: Future>(future: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return output;
            }
        }
    }

    #[test]
    fn helpers_use_their_method() {
        let client = Canned::new(200, "{}");
        let request = Request::builder().path("/v1/me").build().expect("request");

        for payload in [
            block_on(client.get(&request)),
            block_on(client.post(&request)),
            block_on(client.put(&request)),
            block_on(client.delete(&request)),
        ] {
            check!(payload.as_deref().ok() == Some("{}"));
        }

        let sent = client.sent.lock().expect("lock");
        let methods: Vec<Method> = sent.iter().map(|(method, _)| *method).collect();
        check!(methods == [Method::Get, Method::Post, Method::Put, Method::Delete]);
        check!(sent[0].1 == "https://api.spotify.com:443/v1/me");
    }

    #[test]
    fn helpers_classify_status() {
        let client = Canned::new(401, r#"{"error":{"status":401,"message":"Invalid access token"}}"#);
        let request = Request::builder().path("/v1/me").build().expect("request");

        let_assert!(Err(Error::Unauthorized(details)) = block_on(client.get(&request)));
        check!(details.message() == Some("Invalid access token"));
    }
}
