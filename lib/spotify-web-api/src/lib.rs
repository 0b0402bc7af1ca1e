//! Typed async client for the Spotify Web API.
//!
//! [`SpotifyApi`] hands out one builder per operation. A builder collects
//! identifiers and options, `build()` freezes them into a request that is
//! sent by a pluggable [`HttpClient`] ([`HyperClient`] by default), and the
//! response is classified into a model object or a typed [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use spotify_web_api::prelude::*;
//!
//! # async fn run() -> spotify_web_api::Result<()> {
//! let api = SpotifyApi::builder().access_token("BQDx").build();
//!
//! match api.get_track("11dFghVXANMlKmJXsNCbNl").market("ES").build()?.execute().await {
//!     Ok(track) => println!("{:?}", track.name),
//!     Err(err) if err.is_not_found() => println!("no such track"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
pub mod middleware;
pub mod prelude;
pub mod requests;

pub use api::{SpotifyApi, SpotifyApiBuilder};
pub use client::{BoxedService, Call, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_USER_AGENT};
pub use requests::{ApiRequest, EndpointBuilder, PendingResult};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use spotify_web_api_core::{
    ContentType, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME, Error, ErrorDetails, HttpClient,
    HttpClientExt, Method, Parameter, Part, PathTemplate, Request, RequestBody, RequestBuilder,
    Response, Result, Scheme, dispatch, from_json, model, to_json,
};
