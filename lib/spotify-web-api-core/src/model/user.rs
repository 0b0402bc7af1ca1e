use serde::{Deserialize, Serialize};

use super::{ExternalUrls, Followers, Image, ModelObject, ModelObjectType};

/// Subscription level of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Paid subscription.
    Premium,
    /// Ad-supported tier.
    Free,
    /// Legacy unrestricted tier.
    Open,
    /// Day pass.
    Daypass,
    /// Any level this client does not know.
    #[serde(other)]
    Unknown,
}

impl ProductType {
    /// The value used by the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Free => "free",
            Self::Open => "open",
            Self::Daypass => "daypass",
            Self::Unknown => "unknown",
        }
    }
}

/// A Spotify user.
///
/// Private members (`country`, `email`, `product`) are only present on the
/// current user's profile and with the matching scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    /// Name displayed on the profile.
    pub display_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// External URLs.
    pub external_urls: Option<ExternalUrls>,
    /// Follower count.
    pub followers: Option<Followers>,
    /// Web API link.
    pub href: Option<String>,
    /// Spotify user ID.
    pub id: Option<String>,
    /// Profile images.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<Image>,
    /// Subscription level.
    pub product: Option<ProductType>,
    /// Always [`ModelObjectType::User`].
    #[serde(rename = "type")]
    pub object_type: Option<ModelObjectType>,
    /// Spotify URI.
    pub uri: Option<String>,
}

impl ModelObject for User {}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn public_profile_has_no_private_members() {
        let payload = r#"{"id":"wizzler","display_name":"Ronald Pompa","type":"user","uri":"spotify:user:wizzler"}"#;
        let user = User::from_payload(payload).expect("user");

        check!(user.id.as_deref() == Some("wizzler"));
        check!(user.email.is_none());
        check!(user.product.is_none());
        check!(user.object_type == Some(ModelObjectType::User));
    }

    #[test]
    fn unlisted_values_do_not_fail_the_profile() {
        let payload = r#"{"id":"wizzler","product":"family","type":"chapter","images":null}"#;
        let user = User::from_payload(payload).expect("user");

        check!(user.product == Some(ProductType::Unknown));
        check!(user.object_type == Some(ModelObjectType::Unknown));
        check!(user.images.is_empty());
    }

    #[test]
    fn product_type_values() {
        for product in [
            ProductType::Premium,
            ProductType::Free,
            ProductType::Open,
            ProductType::Daypass,
        ] {
            let json = serde_json::to_string(&product).expect("serialize");
            check!(json == format!("\"{}\"", product.as_str()));
        }
    }
}
