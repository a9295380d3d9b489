use crate::{
    errors::PlaylistError,
    types::{Album, Page, Track, TopTracksResponse},
};

use super::SpotifyClient;

const ARTIST_ALBUMS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Retrieves one page of albums and singles released by an artist.
    ///
    /// Without a cursor the first page of
    /// `/artists/{id}/albums?include_groups=album,single&limit=50` is
    /// requested. With a cursor (the `next` URL of a previous page) that URL
    /// is followed as is.
    ///
    /// Compilations and `appears_on` releases are left out.
    pub async fn get_artist_albums(
        &self,
        artist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Album>, PlaylistError> {
        match cursor {
            Some(next) => self.get_json(&next, &[]).await,
            None => {
                let api_url = self.endpoint(&format!("/artists/{id}/albums", id = artist_id));
                self.get_json(
                    &api_url,
                    &[
                        ("include_groups", "album,single".to_string()),
                        ("limit", ARTIST_ALBUMS_PAGE_LIMIT.to_string()),
                    ],
                )
                .await
            }
        }
    }

    /// Retrieves the artist's top tracks in the configured market.
    ///
    /// Spotify returns at most ten tracks, already ordered by popularity.
    pub async fn get_artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, PlaylistError> {
        let api_url = self.endpoint(&format!("/artists/{id}/top-tracks", id = artist_id));
        let response: TopTracksResponse = self
            .get_json(&api_url, &[("market", self.market.clone())])
            .await?;

        Ok(response.tracks)
    }
}
