use crate::{errors::PlaylistError, types::SearchResponse};

use super::SpotifyClient;

impl SpotifyClient {
    /// Runs a catalog search for a single item type.
    ///
    /// `query` may use Spotify's field filters (`artist:`, `album:`,
    /// `track:`). `kind` is one of `artist`, `album` or `track`; only the
    /// matching field of the returned [`SearchResponse`] is populated.
    /// Results come back in the server's relevance order.
    pub async fn search(
        &self,
        query: &str,
        kind: &str,
        limit: u32,
    ) -> Result<SearchResponse, PlaylistError> {
        let api_url = self.endpoint("/search");
        self.get_json(
            &api_url,
            &[
                ("q", query.to_string()),
                ("type", kind.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }
}
