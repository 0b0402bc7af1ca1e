//! Track operations.

use std::sync::Arc;

use spotify_web_api_core::model::Track;

use super::{ApiRequest, EndpointBuilder, endpoint_builder, model_result, several_tracks_result};
use crate::{Method, PathTemplate, RequestBuilder, Result};

const TRACK: PathTemplate = PathTemplate::new("/v1/tracks/{id}");
const TRACKS: PathTemplate = PathTemplate::new("/v1/tracks");

/// Get a track.
pub type GetTrackRequest<C> = ApiRequest<C, Track>;
/// Get several tracks at once; unknown IDs yield `None` in their slot.
pub type GetSeveralTracksRequest<C> = ApiRequest<C, Vec<Option<Track>>>;

/// Builder for [`GetTrackRequest`].
pub struct GetTrackBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    id: String,
}

endpoint_builder!(GetTrackBuilder);

impl<C> GetTrackBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            id: String::new(),
        }
    }

    /// Spotify ID of the track.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Apply track relinking for the given market.
    #[must_use]
    pub fn market(self, market: impl Into<String>) -> Self {
        let market = market.into();
        self.map_request(|request| request.market(market))
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<GetTrackRequest<C>> {
        let request = self.request.path_template(TRACK, &[("id", self.id.as_str())]).build()?;
        Ok(ApiRequest::new(self.client, Method::Get, request, model_result))
    }
}

/// Builder for [`GetSeveralTracksRequest`].
pub struct GetSeveralTracksBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    ids: Vec<String>,
}

endpoint_builder!(GetSeveralTracksBuilder);

impl<C> GetSeveralTracksBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            ids: Vec::new(),
        }
    }

    /// Append Spotify IDs to look up (at most 50 per call).
    #[must_use]
    pub fn ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Apply track relinking for the given market.
    #[must_use]
    pub fn market(self, market: impl Into<String>) -> Self {
        let market = market.into();
        self.map_request(|request| request.market(market))
    }

    /// Freeze the builder into a request; the IDs become one `ids` parameter.
    pub fn build(self) -> Result<GetSeveralTracksRequest<C>> {
        let request = self
            .request
            .path_template(TRACKS, &[])
            .parameter("ids", self.ids.join(","))
            .build()?;
        Ok(ApiRequest::new(self.client, Method::Get, request, several_tracks_result))
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::super::testing::api;
    use crate::Error;

    #[tokio::test]
    async fn get_track_with_market() {
        let api = api(200, r#"{"id":"11dFghVXANMlKmJXsNCbNl","name":"Cut To The Feeling","duration_ms":207959}"#);
        let request = api.get_track("11dFghVXANMlKmJXsNCbNl").market("ES").build().expect("request");

        insta::assert_snapshot!(
            request,
            @"https://api.spotify.com:443/v1/tracks/11dFghVXANMlKmJXsNCbNl?market=ES"
        );
        let_assert!(Ok(track) = request.execute().await);
        check!(track.name.as_deref() == Some("Cut To The Feeling"));
        check!(track.album.is_none());
    }

    #[tokio::test]
    async fn several_tracks_keep_their_slots() {
        let api = api(200, r#"{"tracks":[{"id":"a"},null,{"id":"c"}]}"#);
        let request = api.get_several_tracks(["a", "b", "c"]).build().expect("request");

        insta::assert_snapshot!(request, @"https://api.spotify.com:443/v1/tracks?ids=a%2Cb%2Cc");
        let_assert!(Ok(tracks) = request.execute().await);
        check!(tracks.len() == 3);
        check!(tracks.get(1).is_some_and(Option::is_none));
        check!(tracks.get(2).and_then(|track| track.as_ref()?.id.as_deref()) == Some("c"));
    }

    #[tokio::test]
    async fn error_envelope_in_success_payload() {
        let api = api(200, r#"{"error":{"status":429,"message":"API rate limit exceeded"}}"#);
        let_assert!(
            Err(Error::TooManyRequests { details, retry_after }) =
                api.get_track("x").build().expect("request").execute().await
        );
        check!(details.message() == Some("API rate limit exceeded"));
        check!(retry_after.is_none());
    }

    #[tokio::test]
    async fn not_found_without_body() {
        let api = api(404, "");
        let_assert!(Err(Error::NotFound(details)) = api.get_track("x").build().expect("request").execute().await);
        check!(details.message().is_none());
    }
}
