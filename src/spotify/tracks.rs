use crate::{
    errors::PlaylistError,
    types::{GetSeveralTracksResponse, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves full track objects, including popularity, for up to 50 ids.
    pub async fn get_several_tracks(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<Track>>, PlaylistError> {
        let api_url = self.endpoint("/tracks");
        let response: GetSeveralTracksResponse = self
            .get_json(&api_url, &[("ids", ids.join(","))])
            .await?;

        Ok(response.tracks)
    }
}
