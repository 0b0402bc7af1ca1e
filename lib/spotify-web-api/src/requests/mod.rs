//! One builder and one request type per Web API operation.
//!
//! Builders are handed out pre-configured by [`SpotifyApi`](crate::SpotifyApi).
//! They collect identifiers and optional parameters; `build()` freezes them
//! into an [`ApiRequest`] that can be executed any number of times:
//!
//! - [`ApiRequest::execute`] - `await` the result
//! - [`ApiRequest::execute_blocking`] - wait for the result on the calling thread
//! - [`ApiRequest::spawn`] - run on the current Tokio runtime, get a [`PendingResult`]
//!
//! Every mode yields exactly the same model or [`Error`].

mod artists;
mod playlists;
mod tracks;
mod users;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use spotify_web_api_core::dispatch;
use spotify_web_api_core::model::{ModelObject, SeveralTracks, Track};
use tokio::sync::oneshot;
use tracing::debug;

use crate::{Error, HttpClient, HttpClientExt, Method, Request, RequestBuilder, Result, Scheme};

pub use artists::{GetArtistBuilder, GetArtistRequest};
pub use playlists::{
    AddItemsToPlaylistBuilder, AddItemsToPlaylistRequest, ChangePlaylistDetailsBuilder,
    ChangePlaylistDetailsRequest, CreatePlaylistBuilder, CreatePlaylistRequest,
    GetPlaylistBuilder, GetPlaylistItemsBuilder, GetPlaylistItemsRequest, GetPlaylistRequest,
    RemoveItemsFromPlaylistBuilder, RemoveItemsFromPlaylistRequest, UnfollowPlaylistBuilder,
    UnfollowPlaylistRequest,
};
pub use tracks::{GetSeveralTracksBuilder, GetSeveralTracksRequest, GetTrackBuilder, GetTrackRequest};
pub use users::{
    GetCurrentUsersProfileBuilder, GetCurrentUsersProfileRequest, GetUsersProfileBuilder,
    GetUsersProfileRequest,
};

// ============================================================================
// Builders
// ============================================================================

/// Settings shared by every endpoint builder.
///
/// Each method forwards to the underlying [`RequestBuilder`] and returns the
/// concrete builder, so shared and endpoint-specific setters chain freely.
pub trait EndpointBuilder: Sized {
    /// Apply a change to the underlying [`RequestBuilder`].
    #[must_use]
    fn map_request(self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self;

    /// Override the scheme.
    #[must_use]
    fn scheme(self, scheme: Scheme) -> Self {
        self.map_request(|request| request.scheme(scheme))
    }

    /// Override the host.
    #[must_use]
    fn host(self, host: impl Into<String>) -> Self {
        let host = host.into();
        self.map_request(|request| request.host(host))
    }

    /// Override the port.
    #[must_use]
    fn port(self, port: u16) -> Self {
        self.map_request(|request| request.port(port))
    }

    /// Send `Authorization: Bearer <token>` instead of the API's token.
    #[must_use]
    fn access_token(self, access_token: impl AsRef<str>) -> Self {
        let access_token = access_token.as_ref().to_string();
        self.map_request(|request| request.access_token(access_token))
    }

    /// Append a header.
    #[must_use]
    fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        self.map_request(|request| request.header(name, value))
    }

    /// Append a query parameter.
    #[must_use]
    fn parameter(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        self.map_request(|request| request.parameter(name, value))
    }
}

/// Implements [`EndpointBuilder`] for a builder with a `request` field.
macro_rules! endpoint_builder {
    ($builder:ident) => {
        impl<C> $crate::requests::EndpointBuilder for $builder<C> {
            fn map_request(
                mut self,
                f: impl FnOnce(spotify_web_api_core::RequestBuilder) -> spotify_web_api_core::RequestBuilder,
            ) -> Self {
                self.request = f(self.request);
                self
            }
        }
    };
}
pub(crate) use endpoint_builder;

// ============================================================================
// Decoders
// ============================================================================

/// Turns the classified payload of a call into its result.
type Decoder<M> = fn(Result<String>) -> Result<M>;

fn model_result<M: ModelObject>(payload: Result<String>) -> Result<M> {
    M::from_payload(&payload?)
}

/// No content is the expected outcome of unit operations.
fn unit_result(payload: Result<String>) -> Result<()> {
    match payload {
        Err(Error::NoContent(_)) => Ok(()),
        payload => dispatch::decode_empty(&payload?),
    }
}

fn several_tracks_result(payload: Result<String>) -> Result<Vec<Option<Track>>> {
    model_result::<SeveralTracks>(payload).map(|several| several.tracks)
}

// ============================================================================
// Requests
// ============================================================================

/// A built operation: method, request descriptor and result decoder.
pub struct ApiRequest<C, M> {
    client: Arc<C>,
    method: Method,
    request: Request,
    decode: Decoder<M>,
}

impl<C, M> ApiRequest<C, M> {
    pub(crate) const fn new(
        client: Arc<C>,
        method: Method,
        request: Request,
        decode: Decoder<M>,
    ) -> Self {
        Self {
            client,
            method,
            request,
            decode,
        }
    }

    /// The HTTP method this operation is sent with.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The request descriptor.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }
}

impl<C: HttpClient, M> ApiRequest<C, M> {
    /// Send the request and decode the result.
    ///
    /// # Errors
    ///
    /// Returns the transport error, the error the response status maps to,
    /// or the error envelope or decoding failure found in the payload.
    pub async fn execute(&self) -> Result<M> {
        let payload = match self.method {
            Method::Get => self.client.get(&self.request).await,
            Method::Post => self.client.post(&self.request).await,
            Method::Put => self.client.put(&self.request).await,
            Method::Delete => self.client.delete(&self.request).await,
        };
        (self.decode)(payload)
    }

    /// Send the request on a dedicated current-thread runtime and wait for
    /// the result.
    ///
    /// # Errors
    ///
    /// Same as [`ApiRequest::execute`]. Calling this from within a Tokio
    /// runtime is an [`Error::InvalidRequest`]: use `execute().await` there.
    pub fn execute_blocking(&self) -> Result<M> {
        ensure_outside_runtime("execute_blocking")?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| Error::connection(format!("cannot start runtime: {err}")))?;
        runtime.block_on(self.execute())
    }
}

impl<C, M> ApiRequest<C, M>
where
    C: HttpClient + 'static,
    M: Send + 'static,
{
    /// Run the request as a task on the current Tokio runtime.
    ///
    /// The returned handle resolves exactly once, with the model or the
    /// error. Without a runtime it resolves immediately with
    /// [`Error::Connection`].
    #[must_use]
    pub fn spawn(&self) -> PendingResult<M> {
        let (sender, receiver) = oneshot::channel();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let request = self.clone();
                handle.spawn(async move {
                    // The handle may have been dropped: nobody waits for the result.
                    let _ = sender.send(request.execute().await);
                });
            }
            Err(err) => {
                debug!(error = %err, "no runtime to spawn the request on");
                let _ = sender.send(Err(Error::connection(format!("no async runtime: {err}"))));
            }
        }

        PendingResult { receiver }
    }
}

impl<C, M> Clone for ApiRequest<C, M> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            method: self.method,
            request: self.request.clone(),
            decode: self.decode,
        }
    }
}

impl<C, M> fmt::Debug for ApiRequest<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// The full URL, query string included.
impl<C, M> fmt::Display for ApiRequest<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.request, f)
    }
}

// ============================================================================
// Pending result
// ============================================================================

/// Result of a spawned request, resolved exactly once.
///
/// `await` it from async code, or [`PendingResult::wait`] from a thread that
/// is not driving a runtime.
#[derive(Debug)]
pub struct PendingResult<M> {
    receiver: oneshot::Receiver<Result<M>>,
}

impl<M> PendingResult<M> {
    /// Block the current thread until the result is available.
    ///
    /// # Errors
    ///
    /// The error of the request, or [`Error::Connection`] if the task was
    /// dropped before completing. Calling this from within a Tokio runtime
    /// is an [`Error::InvalidRequest`]: `await` the handle there.
    pub fn wait(self) -> Result<M> {
        ensure_outside_runtime("PendingResult::wait")?;
        self.receiver.blocking_recv().unwrap_or_else(|_| Err(task_dropped()))
    }
}

impl<M> Future for PendingResult<M> {
    type Output = Result<M>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| Err(task_dropped())))
    }
}

fn task_dropped() -> Error {
    Error::connection("request task dropped")
}

/// Blocking on a runtime thread would stall the tasks it drives.
fn ensure_outside_runtime(operation: &str) -> Result<()> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(Error::invalid_request(format!(
            "{operation} called from within an async runtime"
        )));
    }
    Ok(())
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{Response, SpotifyApi};

    /// Records every call and answers with a canned response.
    #[derive(Debug)]
    pub(crate) struct Recorder {
        status: u16,
        body: String,
        calls: Mutex<Vec<(Method, Request)>>,
    }

    impl Recorder {
        pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
            Self {
                status,
                body: body.into(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> Vec<(Method, Request)> {
            self.calls.lock().expect("lock").clone()
        }
    }

    impl HttpClient for Recorder {
        fn execute(
            &self,
            method: Method,
            request: &Request,
        ) -> impl Future<Output = Result<Response>> + Send {
            self.calls
                .lock()
                .expect("lock")
                .push((method, request.clone()));
            let response = Response::new(self.status, HashMap::new(), self.body.clone());
            async move { Ok(response) }
        }
    }

    /// An API whose calls all answer `status` with `body`.
    pub(crate) fn api(status: u16, body: impl Into<String>) -> SpotifyApi<Recorder> {
        SpotifyApi::builder()
            .client(Recorder::new(status, body))
            .access_token("BQDx")
            .build()
    }

    pub(crate) fn recorder(api: &SpotifyApi<Recorder>) -> Arc<Recorder> {
        api.shared_client()
    }
}
