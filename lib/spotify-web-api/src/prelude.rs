//! Prelude module for convenient imports.
//!
//! ```
//! use spotify_web_api::prelude::*;
//! ```

pub use crate::model::ModelObject;
pub use crate::{
    ClientConfig, EndpointBuilder, Error, ErrorDetails, HttpClient, HttpClientExt, HyperClient,
    Method, PendingResult, Request, RequestBuilder, Response, Result, Scheme, SpotifyApi,
};
