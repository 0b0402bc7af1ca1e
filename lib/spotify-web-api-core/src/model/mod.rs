//! Model objects: typed views of Web API resources.
//!
//! Every model is built only from a successfully classified payload. Optional
//! members the API omits stay `None` (or empty) instead of failing the parse.

mod common;
mod error;
mod playlist;
mod track;
mod user;

pub use common::{ExternalUrls, Followers, Image, ModelObjectType, Paging, SnapshotResult};
pub use error::{AuthenticationError, RegularError, RegularErrorEnvelope};
pub use playlist::{Playlist, PlaylistTrack};
pub use track::{AlbumSimplified, Artist, ArtistSimplified, SeveralTracks, Track};
pub use user::{ProductType, User};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{Result, dispatch};

/// A type that can be built from a Web API JSON document.
pub trait ModelObject: DeserializeOwned {
    /// Build from a payload, rejecting error envelopes.
    fn from_payload(payload: &str) -> Result<Self> {
        dispatch::decode_model(payload)
    }

    /// Build from an optional JSON member.
    ///
    /// An absent member or JSON `null` yields `Ok(None)`.
    fn from_value(value: Option<Value>) -> Result<Option<Self>> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(value) => {
                dispatch::check_envelope(&value)?;
                crate::from_json_value(value).map(Some)
            }
        }
    }
}

impl<T: ModelObject> ModelObject for Vec<T> {}

/// Reads a JSON `null` member as the default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
