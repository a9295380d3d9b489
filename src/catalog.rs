//! The remote catalog as seen by the playlist workflow.
//!
//! Everything under [`crate::workflow`] talks to the catalog through this
//! trait only. [`crate::spotify::SpotifyClient`] is the real implementation;
//! the integration tests provide a recording fake.

use crate::{
    errors::PlaylistError,
    types::{Album, AlbumDetail, Artist, Page, Track},
};

/// Spotify's ceiling for `GET /albums?ids=`.
pub const ALBUM_BATCH_SIZE: usize = 20;
/// Spotify's ceiling for `GET /tracks?ids=`.
pub const TRACK_BATCH_SIZE: usize = 50;
/// Spotify's ceiling for `POST /playlists/{id}/tracks`.
pub const PLAYLIST_BATCH_SIZE: usize = 100;

pub const ARTIST_SEARCH_LIMIT: u32 = 5;
pub const ALBUM_SEARCH_LIMIT: u32 = 5;
pub const TRACK_SEARCH_LIMIT: u32 = 10;

#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Ranked artist candidates for a search query.
    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>, PlaylistError>;

    /// Ranked album candidates for a search query.
    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>, PlaylistError>;

    /// Ranked track candidates for a search query.
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, PlaylistError>;

    /// One page of an artist's albums and singles. `cursor` is the `next`
    /// value of the previous page, `None` for the first one.
    async fn artist_albums(
        &self,
        artist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Album>, PlaylistError>;

    /// One page of an album's tracks.
    async fn album_tracks(
        &self,
        album_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, PlaylistError>;

    async fn artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, PlaylistError>;

    /// Full album objects, position-aligned with `ids`. Unknown ids come back as `None`.
    async fn several_albums(&self, ids: &[String])
    -> Result<Vec<Option<AlbumDetail>>, PlaylistError>;

    /// Full track objects, position-aligned with `ids`. Unknown ids come back as `None`.
    async fn several_tracks(&self, ids: &[String]) -> Result<Vec<Option<Track>>, PlaylistError>;

    /// Appends `uris` to the playlist and returns the new snapshot id.
    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<String, PlaylistError>;
}
