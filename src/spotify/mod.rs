//! # Spotify Integration Module
//!
//! HTTP client for the parts of the Spotify Web API the playlist builder
//! needs. [`SpotifyClient`] is constructed once in `main` and handed by
//! reference to every component; nothing in here reads global state after
//! construction.
//!
//! ## Layout
//!
//! ```text
//! Workflow (resolve, collect, rank, write)
//!          ↓  catalog::Catalog
//! SpotifyClient
//!     ├── search    GET  /search
//!     ├── artists   GET  /artists/{id}/albums, /artists/{id}/top-tracks
//!     ├── albums    GET  /albums/{id}/tracks, /albums?ids=
//!     ├── tracks    GET  /tracks?ids=
//!     └── playlist  GET  /me, /me/playlists
//!                   POST /users/{id}/playlists, /playlists/{id}/tracks
//!          ↓
//! reqwest
//! ```
//!
//! ## Retry behaviour
//!
//! - `502 Bad Gateway` is retried after 10 seconds.
//! - `429 Too Many Requests` is retried after the `Retry-After` delay when it
//!   is at most 120 seconds, otherwise the request fails with
//!   [`PlaylistError::RateLimited`].
//! - At most five attempts are made per request.

pub mod albums;
pub mod artists;
pub mod playlist;
pub mod search;
pub mod tracks;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::sleep;

use crate::{
    catalog::Catalog,
    errors::PlaylistError,
    types::{Album, AlbumDetail, Artist, Page, Track},
    warning,
};

const MAX_ATTEMPTS: u32 = 5;
const BAD_GATEWAY_BACKOFF: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER_SECS: u64 = 120;

pub struct SpotifyClient {
    client: Client,
    api_url: String,
    market: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(
        api_url: impl Into<String>,
        market: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            market: market.into(),
            token: token.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, PlaylistError> {
        let request = self.client.get(url).query(query);
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, PlaylistError> {
        let request = self.client.post(url).json(body);
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, PlaylistError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let Some(attempt_request) = request.try_clone() else {
                return Err(PlaylistError::RemoteRead(
                    "request body cannot be replayed".to_string(),
                ));
            };

            let response = attempt_request.bearer_auth(&self.token).send().await?;

            match response.status() {
                StatusCode::BAD_GATEWAY if attempt < MAX_ATTEMPTS => {
                    sleep(BAD_GATEWAY_BACKOFF).await;
                    continue; // retry
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let retry_after = retry_after_secs(&response);
                    if retry_after > MAX_RETRY_AFTER_SECS {
                        warning!(
                            "Retry after has reached an abnormal high of {} seconds. Try again later.",
                            retry_after
                        );
                        return Err(PlaylistError::RateLimited(retry_after));
                    }
                    if attempt < MAX_ATTEMPTS {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }
                }
                _ => {}
            }

            return Ok(response.error_for_status()?);
        }
    }
}

fn retry_after_secs(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1)
}

impl Catalog for SpotifyClient {
    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>, PlaylistError> {
        let response = self.search(query, "artist", limit).await?;
        Ok(response.artists.map(|page| page.items).unwrap_or_default())
    }

    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>, PlaylistError> {
        let response = self.search(query, "album", limit).await?;
        Ok(response.albums.map(|page| page.items).unwrap_or_default())
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, PlaylistError> {
        let response = self.search(query, "track", limit).await?;
        Ok(response.tracks.map(|page| page.items).unwrap_or_default())
    }

    async fn artist_albums(
        &self,
        artist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Album>, PlaylistError> {
        self.get_artist_albums(artist_id, cursor).await
    }

    async fn album_tracks(
        &self,
        album_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, PlaylistError> {
        self.get_album_tracks(album_id, cursor).await
    }

    async fn artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, PlaylistError> {
        self.get_artist_top_tracks(artist_id).await
    }

    async fn several_albums(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AlbumDetail>>, PlaylistError> {
        self.get_several_albums(ids).await
    }

    async fn several_tracks(&self, ids: &[String]) -> Result<Vec<Option<Track>>, PlaylistError> {
        self.get_several_tracks(ids).await
    }

    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<String, PlaylistError> {
        self.add_tracks(playlist_id, uris)
            .await
            .map_err(|e| PlaylistError::RemoteWrite(e.to_string()))
    }
}
