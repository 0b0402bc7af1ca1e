use serde::{Deserialize, Serialize};

use super::{ExternalUrls, Followers, Image, ModelObject, ModelObjectType};

/// Artist as embedded in tracks and albums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSimplified {
    /// External URLs.
    pub external_urls: Option<ExternalUrls>,
    /// Web API link to the full artist.
    pub href: Option<String>,
    /// Spotify ID.
    pub id: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Always [`ModelObjectType::Artist`].
    #[serde(rename = "type")]
    pub object_type: Option<ModelObjectType>,
    /// Spotify URI.
    pub uri: Option<String>,
}

/// Full artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// External URLs.
    pub external_urls: Option<ExternalUrls>,
    /// Follower count.
    pub followers: Option<Followers>,
    /// Genres the artist is associated with.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub genres: Vec<String>,
    /// Web API link.
    pub href: Option<String>,
    /// Spotify ID.
    pub id: Option<String>,
    /// Images in various sizes, widest first.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<Image>,
    /// Name.
    pub name: Option<String>,
    /// Popularity between 0 and 100.
    pub popularity: Option<u32>,
    /// Always [`ModelObjectType::Artist`].
    #[serde(rename = "type")]
    pub object_type: Option<ModelObjectType>,
    /// Spotify URI.
    pub uri: Option<String>,
}

impl ModelObject for Artist {}

/// Album as embedded in tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSimplified {
    /// `album`, `single` or `compilation`.
    pub album_type: Option<String>,
    /// Album artists.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub artists: Vec<ArtistSimplified>,
    /// Markets the album is available in.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub available_markets: Vec<String>,
    /// External URLs.
    pub external_urls: Option<ExternalUrls>,
    /// Web API link to the full album.
    pub href: Option<String>,
    /// Spotify ID.
    pub id: Option<String>,
    /// Cover art in various sizes.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<Image>,
    /// Name.
    pub name: Option<String>,
    /// Release date, as precise as `release_date_precision`.
    pub release_date: Option<String>,
    /// `year`, `month` or `day`.
    pub release_date_precision: Option<String>,
    /// Number of tracks.
    pub total_tracks: Option<u32>,
    /// Always [`ModelObjectType::Album`].
    #[serde(rename = "type")]
    pub object_type: Option<ModelObjectType>,
    /// Spotify URI.
    pub uri: Option<String>,
}

/// Full track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Album the track appears on.
    pub album: Option<AlbumSimplified>,
    /// Performing artists.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub artists: Vec<ArtistSimplified>,
    /// Markets the track is available in.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub available_markets: Vec<String>,
    /// Disc number, usually 1.
    pub disc_number: Option<u32>,
    /// Length in milliseconds.
    pub duration_ms: Option<u64>,
    /// Whether the track has explicit lyrics.
    pub explicit: Option<bool>,
    /// External URLs.
    pub external_urls: Option<ExternalUrls>,
    /// Web API link.
    pub href: Option<String>,
    /// Spotify ID.
    pub id: Option<String>,
    /// Set when a `market` was requested.
    pub is_playable: Option<bool>,
    /// Whether the track is a local file.
    pub is_local: Option<bool>,
    /// Name.
    pub name: Option<String>,
    /// Popularity between 0 and 100.
    pub popularity: Option<u32>,
    /// 30 second preview.
    pub preview_url: Option<String>,
    /// Position on its disc.
    pub track_number: Option<u32>,
    /// Always [`ModelObjectType::Track`].
    #[serde(rename = "type")]
    pub object_type: Option<ModelObjectType>,
    /// Spotify URI.
    pub uri: Option<String>,
}

impl ModelObject for Track {}

/// Result of a multi-track lookup; unknown IDs come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveralTracks {
    /// Tracks, in the order of the requested IDs.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tracks: Vec<Option<Track>>,
}

impl ModelObject for SeveralTracks {}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn track_tolerates_missing_members() {
        let track = Track::from_payload(r#"{"id":"11dFghVXANMlKmJXsNCbNl","name":"Cut To The Feeling"}"#)
            .expect("track");

        check!(track.id.as_deref() == Some("11dFghVXANMlKmJXsNCbNl"));
        check!(track.album.is_none());
        check!(track.artists.is_empty());
        check!(track.duration_ms.is_none());
    }

    #[test]
    fn track_with_album_and_artists() {
        let payload = r#"{
            "album": {"album_type": "single", "name": "Cut To The Feeling", "type": "album"},
            "artists": [{"name": "Carly Rae Jepsen", "type": "artist"}],
            "duration_ms": 207959,
            "explicit": false,
            "type": "track"
        }"#;
        let track = Track::from_payload(payload).expect("track");

        check!(track.album.and_then(|album| album.album_type).as_deref() == Some("single"));
        check!(track.artists.len() == 1);
        check!(track.object_type == Some(ModelObjectType::Track));
        check!(track.duration_ms == Some(207_959));
    }

    #[test]
    fn several_tracks_keep_unknown_ids_as_none() {
        let payload = r#"{"tracks":[{"id":"a"},null]}"#;
        let tracks = SeveralTracks::from_payload(payload).expect("tracks");

        check!(tracks.tracks.len() == 2);
        check!(tracks.tracks.last().is_some_and(Option::is_none));
    }

    #[test]
    fn artist_from_payload() {
        let payload = r#"{"name":"Queen","genres":["rock"],"followers":{"href":null,"total":42}}"#;
        let artist = Artist::from_payload(payload).expect("artist");

        check!(artist.genres == ["rock"]);
        check!(artist.followers.and_then(|followers| followers.total) == Some(42));
        check!(artist.images.is_empty());
    }

    #[test]
    fn null_collections_are_empty() {
        let payload = r#"{
            "id": "11dFghVXANMlKmJXsNCbNl",
            "album": {"artists": null, "available_markets": null, "images": null},
            "artists": null,
            "available_markets": null
        }"#;
        let track = Track::from_payload(payload).expect("track");

        check!(track.artists.is_empty());
        check!(track.available_markets.is_empty());
        let album = track.album.expect("album");
        check!(album.artists.is_empty());
        check!(album.available_markets.is_empty());
        check!(album.images.is_empty());

        let artist = Artist::from_payload(r#"{"name":"Queen","genres":null,"images":null}"#)
            .expect("artist");
        check!(artist.genres.is_empty());
        check!(artist.images.is_empty());

        let tracks = SeveralTracks::from_payload(r#"{"tracks":null}"#).expect("tracks");
        check!(tracks.tracks.is_empty());
    }

    #[test]
    fn unlisted_object_type_does_not_fail_the_track() {
        let payload = r#"{"id":"a","artists":[{"name":"Narrator","type":"chapter"}],"type":"audiobook"}"#;
        let track = Track::from_payload(payload).expect("track");

        check!(track.object_type == Some(ModelObjectType::Unknown));
        check!(track.artists.first().and_then(|artist| artist.object_type) == Some(ModelObjectType::Unknown));
    }
}
