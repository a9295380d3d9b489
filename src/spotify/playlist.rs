use crate::{
    errors::PlaylistError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest, Page,
        Playlist, User,
    },
};

use super::SpotifyClient;

const PLAYLISTS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Profile of the user the access token belongs to.
    pub async fn current_user(&self) -> Result<User, PlaylistError> {
        let api_url = self.endpoint("/me");
        self.get_json(&api_url, &[]).await
    }

    /// One page of the current user's playlists, owned and followed.
    pub async fn user_playlists(
        &self,
        cursor: Option<String>,
    ) -> Result<Page<Playlist>, PlaylistError> {
        match cursor {
            Some(next) => self.get_json(&next, &[]).await,
            None => {
                let api_url = self.endpoint("/me/playlists");
                self.get_json(&api_url, &[("limit", PLAYLISTS_PAGE_LIMIT.to_string())])
                    .await
            }
        }
    }

    /// Creates a playlist for `user_id` and returns it.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<Playlist, PlaylistError> {
        let api_url = self.endpoint(&format!("/users/{user_id}/playlists", user_id = user_id));
        let request = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
            collaborative: false,
        };

        self.post_json(&api_url, &request).await
    }

    /// Appends up to 100 track uris to a playlist.
    ///
    /// Returns the snapshot id of the playlist after the insert.
    pub async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<String, PlaylistError> {
        let api_url = self.endpoint(&format!(
            "/playlists/{playlist_id}/tracks",
            playlist_id = playlist_id
        ));
        let request = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let response: AddTrackToPlaylistResponse = self.post_json(&api_url, &request).await?;
        Ok(response.snapshot_id)
    }
}
