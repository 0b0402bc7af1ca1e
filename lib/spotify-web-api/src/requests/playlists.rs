//! Playlist operations.

use std::sync::Arc;

use serde::Serialize;
use spotify_web_api_core::model::{Paging, Playlist, PlaylistTrack, SnapshotResult};

use super::{ApiRequest, EndpointBuilder, endpoint_builder, model_result, unit_result};
use crate::{Method, PathTemplate, RequestBuilder, Result};

const GET_PLAYLIST: PathTemplate = PathTemplate::new("/v1/users/{user_id}/playlists/{playlist_id}");
const PLAYLIST_ITEMS: PathTemplate = PathTemplate::new("/v1/playlists/{playlist_id}/tracks");
const USER_PLAYLISTS: PathTemplate = PathTemplate::new("/v1/users/{user_id}/playlists");
const PLAYLIST: PathTemplate = PathTemplate::new("/v1/playlists/{playlist_id}");
const PLAYLIST_FOLLOWERS: PathTemplate = PathTemplate::new("/v1/playlists/{playlist_id}/followers");

/// Get a playlist owned by a user.
pub type GetPlaylistRequest<C> = ApiRequest<C, Playlist>;
/// Get one page of the items of a playlist.
pub type GetPlaylistItemsRequest<C> = ApiRequest<C, Paging<PlaylistTrack>>;
/// Create a playlist for a user.
pub type CreatePlaylistRequest<C> = ApiRequest<C, Playlist>;
/// Add items to a playlist.
pub type AddItemsToPlaylistRequest<C> = ApiRequest<C, SnapshotResult>;
/// Change the name, visibility or description of a playlist.
pub type ChangePlaylistDetailsRequest<C> = ApiRequest<C, ()>;
/// Remove items from a playlist.
pub type RemoveItemsFromPlaylistRequest<C> = ApiRequest<C, SnapshotResult>;
/// Unfollow (delete) a playlist.
pub type UnfollowPlaylistRequest<C> = ApiRequest<C, ()>;

/// JSON body of playlist creation and detail changes.
#[derive(Debug, Clone, Default, Serialize)]
struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

// ============================================================================
// GetPlaylist
// ============================================================================

/// Builder for [`GetPlaylistRequest`].
pub struct GetPlaylistBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    user_id: String,
    playlist_id: String,
}

endpoint_builder!(GetPlaylistBuilder);

impl<C> GetPlaylistBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            user_id: String::new(),
            playlist_id: String::new(),
        }
    }

    /// Owner of the playlist.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Spotify ID of the playlist.
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = playlist_id.into();
        self
    }

    /// Only return the selected members, e.g. `name,tracks.items(track(name))`.
    #[must_use]
    pub fn fields(self, fields: impl Into<String>) -> Self {
        let fields = fields.into();
        self.map_request(|request| request.fields(fields))
    }

    /// Apply track relinking for the given market.
    #[must_use]
    pub fn market(self, market: impl Into<String>) -> Self {
        let market = market.into();
        self.map_request(|request| request.market(market))
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<GetPlaylistRequest<C>> {
        let request = self
            .request
            .path_template(
                GET_PLAYLIST,
                &[("user_id", self.user_id.as_str()), ("playlist_id", self.playlist_id.as_str())],
            )
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Get, request, model_result))
    }
}

// ============================================================================
// GetPlaylistItems
// ============================================================================

/// Builder for [`GetPlaylistItemsRequest`].
pub struct GetPlaylistItemsBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    playlist_id: String,
}

endpoint_builder!(GetPlaylistItemsBuilder);

impl<C> GetPlaylistItemsBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            playlist_id: String::new(),
        }
    }

    /// Spotify ID of the playlist.
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = playlist_id.into();
        self
    }

    /// Only return the selected members.
    #[must_use]
    pub fn fields(self, fields: impl Into<String>) -> Self {
        let fields = fields.into();
        self.map_request(|request| request.fields(fields))
    }

    /// Page size, between 1 and 100.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.parameter("limit", limit.to_string())
    }

    /// Index of the first item of the page.
    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.parameter("offset", offset.to_string())
    }

    /// Apply track relinking for the given market.
    #[must_use]
    pub fn market(self, market: impl Into<String>) -> Self {
        let market = market.into();
        self.map_request(|request| request.market(market))
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<GetPlaylistItemsRequest<C>> {
        let request = self
            .request
            .path_template(PLAYLIST_ITEMS, &[("playlist_id", self.playlist_id.as_str())])
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Get, request, model_result))
    }
}

// ============================================================================
// CreatePlaylist
// ============================================================================

/// Builder for [`CreatePlaylistRequest`].
pub struct CreatePlaylistBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    user_id: String,
    details: PlaylistDetails,
}

endpoint_builder!(CreatePlaylistBuilder);

impl<C> CreatePlaylistBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            user_id: String::new(),
            details: PlaylistDetails::default(),
        }
    }

    /// User the playlist is created for; must be the token owner.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Name of the new playlist.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.details.name = Some(name.into());
        self
    }

    /// Whether the playlist shows on the user's profile.
    #[must_use]
    pub fn public(mut self, public: bool) -> Self {
        self.details.public = Some(public);
        self
    }

    /// Whether other users may modify the playlist.
    #[must_use]
    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.details.collaborative = Some(collaborative);
        self
    }

    /// Description shown in Spotify clients.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.details.description = Some(description.into());
        self
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<CreatePlaylistRequest<C>> {
        let request = self
            .request
            .path_template(USER_PLAYLISTS, &[("user_id", self.user_id.as_str())])
            .json(&self.details)?
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Post, request, model_result))
    }
}

// ============================================================================
// AddItemsToPlaylist
// ============================================================================

#[derive(Debug, Serialize)]
struct AddItemsBody<'a> {
    uris: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<u32>,
}

/// Builder for [`AddItemsToPlaylistRequest`].
pub struct AddItemsToPlaylistBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    playlist_id: String,
    uris: Vec<String>,
    position: Option<u32>,
}

endpoint_builder!(AddItemsToPlaylistBuilder);

impl<C> AddItemsToPlaylistBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            playlist_id: String::new(),
            uris: Vec::new(),
            position: None,
        }
    }

    /// Spotify ID of the playlist.
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = playlist_id.into();
        self
    }

    /// Append Spotify URIs (`spotify:track:...`, `spotify:episode:...`) to add.
    #[must_use]
    pub fn uris<I>(mut self, uris: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.uris.extend(uris.into_iter().map(Into::into));
        self
    }

    /// Zero-based insertion index; items are appended when unset.
    #[must_use]
    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<AddItemsToPlaylistRequest<C>> {
        let body = AddItemsBody {
            uris: &self.uris,
            position: self.position,
        };
        let request = self
            .request
            .path_template(PLAYLIST_ITEMS, &[("playlist_id", self.playlist_id.as_str())])
            .json(&body)?
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Post, request, model_result))
    }
}

// ============================================================================
// ChangePlaylistDetails
// ============================================================================

/// Builder for [`ChangePlaylistDetailsRequest`].
pub struct ChangePlaylistDetailsBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    playlist_id: String,
    details: PlaylistDetails,
}

endpoint_builder!(ChangePlaylistDetailsBuilder);

impl<C> ChangePlaylistDetailsBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            playlist_id: String::new(),
            details: PlaylistDetails::default(),
        }
    }

    /// Spotify ID of the playlist.
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = playlist_id.into();
        self
    }

    /// New name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.details.name = Some(name.into());
        self
    }

    /// New visibility.
    #[must_use]
    pub fn public(mut self, public: bool) -> Self {
        self.details.public = Some(public);
        self
    }

    /// New collaborative flag; only private playlists can be collaborative.
    #[must_use]
    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.details.collaborative = Some(collaborative);
        self
    }

    /// New description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.details.description = Some(description.into());
        self
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<ChangePlaylistDetailsRequest<C>> {
        let request = self
            .request
            .path_template(PLAYLIST, &[("playlist_id", self.playlist_id.as_str())])
            .json(&self.details)?
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Put, request, unit_result))
    }
}

// ============================================================================
// RemoveItemsFromPlaylist
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct ItemToRemove {
    uri: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    positions: Vec<u32>,
}

#[derive(Debug, Serialize)]
struct RemoveItemsBody<'a> {
    tracks: &'a [ItemToRemove],
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<&'a str>,
}

/// Builder for [`RemoveItemsFromPlaylistRequest`].
pub struct RemoveItemsFromPlaylistBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    playlist_id: String,
    items: Vec<ItemToRemove>,
    snapshot_id: Option<String>,
}

endpoint_builder!(RemoveItemsFromPlaylistBuilder);

impl<C> RemoveItemsFromPlaylistBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            playlist_id: String::new(),
            items: Vec::new(),
            snapshot_id: None,
        }
    }

    /// Spotify ID of the playlist.
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = playlist_id.into();
        self
    }

    /// Remove every occurrence of an item.
    #[must_use]
    pub fn item(mut self, uri: impl Into<String>) -> Self {
        self.items.push(ItemToRemove {
            uri: uri.into(),
            positions: Vec::new(),
        });
        self
    }

    /// Remove an item only at the given zero-based positions.
    #[must_use]
    pub fn item_at(mut self, uri: impl Into<String>, positions: impl IntoIterator<Item = u32>) -> Self {
        self.items.push(ItemToRemove {
            uri: uri.into(),
            positions: positions.into_iter().collect(),
        });
        self
    }

    /// Playlist version the removal applies to.
    #[must_use]
    pub fn snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<RemoveItemsFromPlaylistRequest<C>> {
        let body = RemoveItemsBody {
            tracks: &self.items,
            snapshot_id: self.snapshot_id.as_deref(),
        };
        let request = self
            .request
            .path_template(PLAYLIST_ITEMS, &[("playlist_id", self.playlist_id.as_str())])
            .json(&body)?
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Delete, request, model_result))
    }
}

// ============================================================================
// UnfollowPlaylist
// ============================================================================

/// Builder for [`UnfollowPlaylistRequest`].
pub struct UnfollowPlaylistBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    playlist_id: String,
}

endpoint_builder!(UnfollowPlaylistBuilder);

impl<C> UnfollowPlaylistBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            playlist_id: String::new(),
        }
    }

    /// Spotify ID of the playlist.
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = playlist_id.into();
        self
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<UnfollowPlaylistRequest<C>> {
        let request = self
            .request
            .path_template(PLAYLIST_FOLLOWERS, &[("playlist_id", self.playlist_id.as_str())])
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Delete, request, unit_result))
    }
}
