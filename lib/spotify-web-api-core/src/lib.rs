//! Core types for the Spotify Web API client.
//!
//! This crate provides everything that does not touch the network:
//! - [`Request`] and [`RequestBuilder`] - Immutable request descriptors
//! - [`Response`] - Status, headers and body of a finished call
//! - [`dispatch`] - Mapping of statuses and error envelopes to [`Error`]
//! - [`Error`], [`ErrorDetails`] and [`Result`] - Error taxonomy
//! - [`model`] - Typed views of Web API resources
//! - [`HttpClient`] - Transport trait implemented by the `spotify-web-api` crate
//! - [`PathTemplate`] - Endpoint path templates, kept for logging

mod body;
mod client;
pub mod dispatch;
mod error;
mod method;
pub mod model;
mod multipart;
mod path_template;
pub mod prelude;
mod request;
mod response;

pub use body::{ContentType, from_json, from_json_value, to_form, to_json};
pub use client::{HttpClient, HttpClientExt};
pub use error::{Error, ErrorDetails, Result};
pub use method::Method;
pub use multipart::Part;
pub use path_template::PathTemplate;
pub use request::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME, Parameter, Request, RequestBody, RequestBuilder,
    Scheme,
};
pub use response::Response;
