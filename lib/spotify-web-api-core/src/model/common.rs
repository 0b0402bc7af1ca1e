use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ModelObject;

/// Kind of object, from the `type` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelObjectType {
    /// An album.
    Album,
    /// An artist.
    Artist,
    /// Audio features of a track.
    AudioFeatures,
    /// A podcast episode.
    Episode,
    /// A genre.
    Genre,
    /// A playlist.
    Playlist,
    /// A podcast show.
    Show,
    /// A track.
    Track,
    /// A user.
    User,
    /// Any kind this client does not model (`audiobook`, `chapter`, ...).
    #[serde(other)]
    Unknown,
}

impl ModelObjectType {
    /// The value used by the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Artist => "artist",
            Self::AudioFeatures => "audio_features",
            Self::Episode => "episode",
            Self::Genre => "genre",
            Self::Playlist => "playlist",
            Self::Show => "show",
            Self::Track => "track",
            Self::User => "user",
            Self::Unknown => "unknown",
        }
    }
}

/// Known external URLs, keyed by type (`spotify`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalUrls(pub BTreeMap<String, String>);

impl ExternalUrls {
    /// URL of the given type.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&str> {
        self.0.get(kind).map(String::as_str)
    }

    /// The open.spotify.com URL.
    #[must_use]
    pub fn spotify(&self) -> Option<&str> {
        self.get("spotify")
    }
}

/// Follower information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    /// Always `null` in current API versions.
    pub href: Option<String>,
    /// Number of followers.
    pub total: Option<u64>,
}

/// Cover art or profile image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Height in pixels, when known.
    pub height: Option<u32>,
    /// Source URL.
    pub url: Option<String>,
    /// Width in pixels, when known.
    pub width: Option<u32>,
}

/// One page of a larger collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Paging<T> {
    /// Link to this page.
    pub href: Option<String>,
    /// Items of the page.
    #[serde(default = "Vec::new", deserialize_with = "super::null_as_default")]
    pub items: Vec<T>,
    /// Requested page size.
    pub limit: Option<u32>,
    /// Link to the next page.
    pub next: Option<String>,
    /// Offset of the first item.
    pub offset: Option<u32>,
    /// Link to the previous page.
    pub previous: Option<String>,
    /// Total number of items.
    pub total: Option<u32>,
}

impl<T: serde::de::DeserializeOwned> ModelObject for Paging<T> {}

/// Playlist version returned by item mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotResult {
    /// Identifier of the playlist version after the change.
    pub snapshot_id: Option<String>,
}

impl ModelObject for SnapshotResult {}
