//! Artist operations.

use std::sync::Arc;

use spotify_web_api_core::model::Artist;

use super::{ApiRequest, endpoint_builder, model_result};
use crate::{Method, PathTemplate, RequestBuilder, Result};

const ARTIST: PathTemplate = PathTemplate::new("/v1/artists/{id}");

/// Get an artist.
pub type GetArtistRequest<C> = ApiRequest<C, Artist>;

/// Builder for [`GetArtistRequest`].
pub struct GetArtistBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    id: String,
}

endpoint_builder!(GetArtistBuilder);

impl<C> GetArtistBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            id: String::new(),
        }
    }

    /// Spotify ID of the artist.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<GetArtistRequest<C>> {
        let request = self.request.path_template(ARTIST, &[("id", self.id.as_str())]).build()?;
        Ok(ApiRequest::new(self.client, Method::Get, request, model_result))
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::super::testing::api;
    use crate::requests::EndpointBuilder;

    #[tokio::test]
    async fn get_artist() {
        let api = api(200, r#"{"id":"0OdUWJ0sBjDrqHygGUXeCF","name":"Band of Horses","genres":["indie folk"]}"#);
        let request = api
            .get_artist("0OdUWJ0sBjDrqHygGUXeCF")
            .header("Accept-Language", "sv")
            .build()
            .expect("request");

        check!(request.request().path() == "/v1/artists/0OdUWJ0sBjDrqHygGUXeCF");
        check!(request.request().header("accept-language") == Some("sv"));
        let_assert!(Ok(artist) = request.execute().await);
        check!(artist.genres == ["indie folk"]);
        check!(artist.popularity.is_none());
    }

    #[test]
    fn ids_are_percent_encoded() {
        let api = api(200, "{}");
        let request = api.get_artist("a b/c").build().expect("request");
        check!(request.request().path() == "/v1/artists/a%20b%2Fc");
    }
}
