//! The [`SpotifyApi`] entry point.

use std::fmt;
use std::sync::Arc;

use crate::requests::{
    AddItemsToPlaylistBuilder, ChangePlaylistDetailsBuilder, CreatePlaylistBuilder,
    GetArtistBuilder, GetCurrentUsersProfileBuilder, GetPlaylistBuilder, GetPlaylistItemsBuilder,
    GetSeveralTracksBuilder, GetTrackBuilder, GetUsersProfileBuilder,
    RemoveItemsFromPlaylistBuilder, UnfollowPlaylistBuilder,
};
use crate::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME, HyperClient, RequestBuilder, Scheme};

/// Hands out endpoint builders pre-configured with the target and the
/// access token.
///
/// # Example
///
/// ```no_run
/// use spotify_web_api::SpotifyApi;
///
/// # async fn run() -> spotify_web_api::Result<()> {
/// let api = SpotifyApi::builder().access_token("BQDx").build();
///
/// let playlist = api
///     .get_playlist("wizzler", "5lH9NjOeJvctAO92ZrKQNB")
///     .fields("name,tracks.total")
///     .build()?
///     .execute()
///     .await?;
/// println!("{:?}", playlist.name);
/// # Ok(())
/// # }
/// ```
pub struct SpotifyApi<C = HyperClient> {
    client: Arc<C>,
    scheme: Scheme,
    host: String,
    port: u16,
    access_token: Option<String>,
}

impl SpotifyApi<HyperClient> {
    /// Builder using a [`HyperClient`] with default middleware.
    #[must_use]
    pub fn builder() -> SpotifyApiBuilder<HyperClient> {
        SpotifyApiBuilder::new(HyperClient::builder().with_defaults().build())
    }
}

impl<C> SpotifyApi<C> {
    /// Target the Web API through the given transport, without access token.
    #[must_use]
    pub fn new(client: C) -> Self {
        SpotifyApiBuilder::new(client).build()
    }

    /// The transport.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[cfg(test)]
    pub(crate) fn shared_client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }

    /// The access token sent with every request, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Replace the access token, e.g. after a refresh.
    pub fn set_access_token(&mut self, access_token: Option<String>) {
        self.access_token = access_token;
    }

    fn request(&self) -> RequestBuilder {
        let request = RequestBuilder::new()
            .scheme(self.scheme)
            .host(self.host.clone())
            .port(self.port);
        match &self.access_token {
            Some(access_token) => request.access_token(access_token),
            None => request,
        }
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Get a playlist owned by a user.
    #[must_use]
    pub fn get_playlist(
        &self,
        user_id: impl Into<String>,
        playlist_id: impl Into<String>,
    ) -> GetPlaylistBuilder<C> {
        GetPlaylistBuilder::new(Arc::clone(&self.client), self.request())
            .user_id(user_id)
            .playlist_id(playlist_id)
    }

    /// Get the items of a playlist, one page at a time.
    #[must_use]
    pub fn get_playlist_items(&self, playlist_id: impl Into<String>) -> GetPlaylistItemsBuilder<C> {
        GetPlaylistItemsBuilder::new(Arc::clone(&self.client), self.request())
            .playlist_id(playlist_id)
    }

    /// Create a playlist for a user.
    #[must_use]
    pub fn create_playlist(
        &self,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> CreatePlaylistBuilder<C> {
        CreatePlaylistBuilder::new(Arc::clone(&self.client), self.request())
            .user_id(user_id)
            .name(name)
    }

    /// Add items to a playlist.
    #[must_use]
    pub fn add_items_to_playlist<I>(
        &self,
        playlist_id: impl Into<String>,
        uris: I,
    ) -> AddItemsToPlaylistBuilder<C>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        AddItemsToPlaylistBuilder::new(Arc::clone(&self.client), self.request())
            .playlist_id(playlist_id)
            .uris(uris)
    }

    /// Change the details of a playlist.
    #[must_use]
    pub fn change_playlist_details(
        &self,
        playlist_id: impl Into<String>,
    ) -> ChangePlaylistDetailsBuilder<C> {
        ChangePlaylistDetailsBuilder::new(Arc::clone(&self.client), self.request())
            .playlist_id(playlist_id)
    }

    /// Remove items from a playlist.
    #[must_use]
    pub fn remove_items_from_playlist(
        &self,
        playlist_id: impl Into<String>,
    ) -> RemoveItemsFromPlaylistBuilder<C> {
        RemoveItemsFromPlaylistBuilder::new(Arc::clone(&self.client), self.request())
            .playlist_id(playlist_id)
    }

    /// Unfollow a playlist, which deletes it for its owner.
    #[must_use]
    pub fn unfollow_playlist(&self, playlist_id: impl Into<String>) -> UnfollowPlaylistBuilder<C> {
        UnfollowPlaylistBuilder::new(Arc::clone(&self.client), self.request())
            .playlist_id(playlist_id)
    }

    // ========================================================================
    // Tracks and artists
    // ========================================================================

    /// Get a track.
    #[must_use]
    pub fn get_track(&self, id: impl Into<String>) -> GetTrackBuilder<C> {
        GetTrackBuilder::new(Arc::clone(&self.client), self.request()).id(id)
    }

    /// Get several tracks.
    #[must_use]
    pub fn get_several_tracks<I>(&self, ids: I) -> GetSeveralTracksBuilder<C>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        GetSeveralTracksBuilder::new(Arc::clone(&self.client), self.request()).ids(ids)
    }

    /// Get an artist.
    #[must_use]
    pub fn get_artist(&self, id: impl Into<String>) -> GetArtistBuilder<C> {
        GetArtistBuilder::new(Arc::clone(&self.client), self.request()).id(id)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Get the profile of the token owner.
    #[must_use]
    pub fn get_current_users_profile(&self) -> GetCurrentUsersProfileBuilder<C> {
        GetCurrentUsersProfileBuilder::new(Arc::clone(&self.client), self.request())
    }

    /// Get the public profile of a user.
    #[must_use]
    pub fn get_users_profile(&self, user_id: impl Into<String>) -> GetUsersProfileBuilder<C> {
        GetUsersProfileBuilder::new(Arc::clone(&self.client), self.request()).user_id(user_id)
    }
}

impl<C> Clone for SpotifyApi<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            scheme: self.scheme,
            host: self.host.clone(),
            port: self.port,
            access_token: self.access_token.clone(),
        }
    }
}

impl<C> fmt::Debug for SpotifyApi<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyApi")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Builder for [`SpotifyApi`].
#[derive(Debug, Clone)]
pub struct SpotifyApiBuilder<C> {
    client: C,
    scheme: Scheme,
    host: String,
    port: u16,
    access_token: Option<String>,
}

impl<C> SpotifyApiBuilder<C> {
    fn new(client: C) -> Self {
        Self {
            client,
            scheme: DEFAULT_SCHEME,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            access_token: None,
        }
    }

    /// Use another transport.
    #[must_use]
    pub fn client<D>(self, client: D) -> SpotifyApiBuilder<D> {
        SpotifyApiBuilder {
            client,
            scheme: self.scheme,
            host: self.host,
            port: self.port,
            access_token: self.access_token,
        }
    }

    /// Set the scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Build the [`SpotifyApi`].
    #[must_use]
    pub fn build(self) -> SpotifyApi<C> {
        SpotifyApi {
            client: Arc::new(self.client),
            scheme: self.scheme,
            host: self.host,
            port: self.port,
            access_token: self.access_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::requests::EndpointBuilder;
    use crate::requests::testing::Recorder;

    #[test]
    fn builders_inherit_target_and_token() {
        let api = SpotifyApi::builder()
            .client(Recorder::new(200, "{}"))
            .scheme(Scheme::Http)
            .host("127.0.0.1")
            .port(8080)
            .access_token("BQDx")
            .build();

        let request = api.get_current_users_profile().build().expect("request");
        check!(request.to_string() == "http://127.0.0.1:8080/v1/me");
        check!(request.request().header("Authorization") == Some("Bearer BQDx"));
    }

    #[test]
    fn endpoint_token_replaces_api_token() {
        let api = crate::requests::testing::api(200, "{}");
        let request = api
            .get_current_users_profile()
            .access_token("other")
            .build()
            .expect("request");

        let authorization: Vec<_> = request
            .request()
            .headers()
            .iter()
            .filter(|header| header.name().eq_ignore_ascii_case("authorization"))
            .map(crate::Parameter::value)
            .collect();
        check!(authorization == ["Bearer other"]);
    }

    #[test]
    fn no_token_no_authorization_header() {
        let api = SpotifyApi::new(Recorder::new(200, "{}"));
        let request = api.get_artist("0OdUWJ0sBjDrqHygGUXeCF").build().expect("request");

        check!(request.request().header("Authorization").is_none());
        check!(request.to_string() == "https://api.spotify.com:443/v1/artists/0OdUWJ0sBjDrqHygGUXeCF");
    }

    #[test]
    fn token_can_be_replaced() {
        let mut api = SpotifyApi::new(Recorder::new(200, "{}"));
        api.set_access_token(Some("refreshed".to_string()));

        check!(api.access_token() == Some("refreshed"));
        check!(!format!("{api:?}").contains("refreshed"));
    }
}
