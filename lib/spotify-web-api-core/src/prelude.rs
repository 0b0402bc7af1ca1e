//! Prelude module for convenient imports.
//!
//! ```
//! use spotify_web_api_core::prelude::*;
//! ```

pub use crate::model::ModelObject;
pub use crate::{
    Error, ErrorDetails, HttpClient, HttpClientExt, Method, Part, Request, RequestBuilder,
    Response, Result, Scheme,
};
