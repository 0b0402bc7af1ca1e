//! Tower middleware layers for the HTTP transport.
//!
//! Layers wrap the [`BoxedService`](crate::BoxedService) at the bottom of a
//! [`HyperClient`](crate::HyperClient) and see every [`Call`](crate::Call)
//! before it is sent.
//!
//! - [`LoggingLayer`] - Logs calls and their outcome using `tracing`
//! - [`BearerAuthLayer`] - Adds `Authorization: Bearer <token>` when absent
//!
//! Retries and rate limiting are left to the caller: a failed call surfaces
//! as its [`Error`](crate::Error) exactly once.
//!
//! # Example
//!
//! ```no_run
//! use spotify_web_api::HyperClient;
//! use spotify_web_api::middleware::{BearerAuthLayer, LoggingLayer};
//!
//! let client = HyperClient::builder()
//!     .layer(BearerAuthLayer::new("BQDx"))
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod bearer_auth;
mod logging;

pub use bearer_auth::{BearerAuth, BearerAuthLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
