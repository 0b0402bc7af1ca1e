use serde::{Deserialize, Serialize};

use super::{ExternalUrls, Followers, Image, ModelObject, ModelObjectType, Paging, Track, User};

/// An item of a playlist, with who added it and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    /// ISO 8601 timestamp; `null` on very old playlists.
    pub added_at: Option<String>,
    /// User who added the item.
    pub added_by: Option<User>,
    /// Whether the item is a local file.
    pub is_local: Option<bool>,
    /// The track; `null` when it is no longer available.
    pub track: Option<Track>,
}

/// A full playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Whether other users may modify the playlist.
    pub collaborative: Option<bool>,
    /// Description, when the owner set one.
    pub description: Option<String>,
    /// External URLs.
    pub external_urls: Option<ExternalUrls>,
    /// Follower count.
    pub followers: Option<Followers>,
    /// Web API link.
    pub href: Option<String>,
    /// Spotify ID.
    pub id: Option<String>,
    /// Cover images.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<Image>,
    /// Name.
    pub name: Option<String>,
    /// Owner.
    pub owner: Option<User>,
    /// Public/private status; `null` when not relevant.
    pub public: Option<bool>,
    /// Version identifier.
    pub snapshot_id: Option<String>,
    /// First page of the items.
    pub tracks: Option<Paging<PlaylistTrack>>,
    /// Always [`ModelObjectType::Playlist`].
    #[serde(rename = "type")]
    pub object_type: Option<ModelObjectType>,
    /// Spotify URI.
    pub uri: Option<String>,
}

impl ModelObject for Playlist {}
