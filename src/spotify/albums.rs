use crate::{
    errors::PlaylistError,
    types::{AlbumDetail, GetSeveralAlbumsResponse, Page, Track},
};

use super::SpotifyClient;

const ALBUM_TRACKS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Retrieves one page of an album's track listing.
    pub async fn get_album_tracks(
        &self,
        album_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, PlaylistError> {
        match cursor {
            Some(next) => self.get_json(&next, &[]).await,
            None => {
                let api_url = self.endpoint(&format!("/albums/{id}/tracks", id = album_id));
                self.get_json(&api_url, &[("limit", ALBUM_TRACKS_PAGE_LIMIT.to_string())])
                    .await
            }
        }
    }

    /// Retrieves detailed information for several albums in one request.
    ///
    /// The caller keeps `ids` within Spotify's limit of 20 per request. The
    /// result is aligned with `ids`; albums Spotify cannot find are `None`.
    /// Each album carries only the first page of its tracks, so albums with
    /// more than 50 tracks come back truncated.
    pub async fn get_several_albums(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AlbumDetail>>, PlaylistError> {
        let api_url = self.endpoint("/albums");
        let response: GetSeveralAlbumsResponse = self
            .get_json(&api_url, &[("ids", ids.join(","))])
            .await?;

        Ok(response.albums)
    }
}
