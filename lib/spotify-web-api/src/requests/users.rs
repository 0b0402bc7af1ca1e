//! User profile operations.

use std::sync::Arc;

use spotify_web_api_core::model::User;

use super::{ApiRequest, endpoint_builder, model_result};
use crate::{Method, PathTemplate, RequestBuilder, Result};

const CURRENT_USER: PathTemplate = PathTemplate::new("/v1/me");
const USER: PathTemplate = PathTemplate::new("/v1/users/{user_id}");

/// Get the profile of the token owner.
pub type GetCurrentUsersProfileRequest<C> = ApiRequest<C, User>;
/// Get the public profile of a user.
pub type GetUsersProfileRequest<C> = ApiRequest<C, User>;

/// Builder for [`GetCurrentUsersProfileRequest`].
pub struct GetCurrentUsersProfileBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
}

endpoint_builder!(GetCurrentUsersProfileBuilder);

impl<C> GetCurrentUsersProfileBuilder<C> {
    pub(crate) const fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self { client, request }
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<GetCurrentUsersProfileRequest<C>> {
        let request = self.request.path_template(CURRENT_USER, &[]).build()?;
        Ok(ApiRequest::new(self.client, Method::Get, request, model_result))
    }
}

/// Builder for [`GetUsersProfileRequest`].
pub struct GetUsersProfileBuilder<C> {
    client: Arc<C>,
    request: RequestBuilder,
    user_id: String,
}

endpoint_builder!(GetUsersProfileBuilder);

impl<C> GetUsersProfileBuilder<C> {
    pub(crate) fn new(client: Arc<C>, request: RequestBuilder) -> Self {
        Self {
            client,
            request,
            user_id: String::new(),
        }
    }

    /// Spotify user ID.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Freeze the builder into a request.
    pub fn build(self) -> Result<GetUsersProfileRequest<C>> {
        let request = self.request.path_template(USER, &[("user_id", self.user_id.as_str())]).build()?;
        Ok(ApiRequest::new(self.client, Method::Get, request, model_result))
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::super::testing::api;
    use crate::model::ProductType;
    use crate::requests::EndpointBuilder;
    use crate::{Error, Scheme};

    #[tokio::test]
    async fn current_user_with_private_members() {
        let api = api(
            200,
            r#"{"id":"wizzler","email":"email@example.com","product":"premium","country":"SE"}"#,
        );
        let_assert!(Ok(user) = api.get_current_users_profile().build().expect("request").execute().await);

        check!(user.product == Some(ProductType::Premium));
        check!(user.country.as_deref() == Some("SE"));
    }

    #[tokio::test]
    async fn unauthorized_profile() {
        let api = api(401, r#"{"error":{"status":401,"message":"The access token expired"}}"#);
        let_assert!(
            Err(err @ Error::Unauthorized(_)) =
                api.get_users_profile("wizzler").build().expect("request").execute().await
        );
        check!(err.to_string() == "HTTP 401 Unauthorized: The access token expired");
    }

    #[test]
    fn target_can_be_overridden_per_request() {
        let api = api(200, "{}");
        let request = api
            .get_users_profile("wizzler")
            .scheme(Scheme::Http)
            .host("localhost")
            .port(8080)
            .build()
            .expect("request");

        check!(request.request().render(false) == "http://localhost:8080/v1/users/wizzler");
    }
}
