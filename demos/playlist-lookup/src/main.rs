//! Looks up a playlist and its first items.
//!
//! ```text
//! SPOTIFY_ACCESS_TOKEN=BQDx cargo run -p playlist-lookup -- <user_id> <playlist_id>
//! ```
//!
//! Set `RUST_LOG=spotify_web_api=debug` to see every call.

use spotify_web_api::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playlist_lookup=info,spotify_web_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(user_id), Some(playlist_id)) = (args.next(), args.next()) else {
        return Err(Error::invalid_request("usage: playlist-lookup <user_id> <playlist_id>"));
    };
    let access_token = std::env::var("SPOTIFY_ACCESS_TOKEN")
        .map_err(|_| Error::invalid_request("SPOTIFY_ACCESS_TOKEN is not set"))?;

    let api = SpotifyApi::builder().access_token(access_token).build();

    let playlist = match api
        .get_playlist(&user_id, &playlist_id)
        .fields("name,owner(display_name),tracks.total")
        .build()?
        .execute()
        .await
    {
        Ok(playlist) => playlist,
        Err(err) if err.is_not_found() => {
            warn!(%user_id, %playlist_id, "no such playlist");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    info!(
        name = playlist.name.as_deref().unwrap_or_default(),
        owner = playlist
            .owner
            .and_then(|owner| owner.display_name)
            .unwrap_or_default(),
        total = playlist.tracks.and_then(|tracks| tracks.total).unwrap_or_default(),
        "playlist"
    );

    // Fetched concurrently with the profile lookup below.
    let items = api.get_playlist_items(&playlist_id).limit(10).build()?.spawn();
    let me = api.get_current_users_profile().build()?.execute().await?;
    info!(id = me.id.as_deref().unwrap_or_default(), "signed in");

    for (index, item) in items.await?.items.into_iter().enumerate() {
        let Some(track) = item.track else { continue };
        info!(
            index,
            name = track.name.as_deref().unwrap_or_default(),
            duration_ms = track.duration_ms.unwrap_or_default(),
            "item"
        );
    }

    Ok(())
}
