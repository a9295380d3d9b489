use crate::{
    cli::{playlist::target_playlist, report},
    config,
    prompt::StdinPrompt,
    spotify::SpotifyClient,
    types::BatchResult,
    warning,
    workflow::{ArtistMode, PlaylistBuilder, SelectionPolicy},
};

pub async fn artists(
    client: &SpotifyClient,
    playlist: Option<String>,
    names: Vec<String>,
    file: Option<String>,
    mode: ArtistMode,
    policy: SelectionPolicy,
) {
    if names.is_empty() && file.is_none() {
        warning!("Nothing to add. Pass artist names as arguments or use --file.");
        return;
    }

    let Some(playlist_id) = target_playlist(client, playlist).await else {
        warning!("No playlist selected");
        return;
    };

    let mut builder = PlaylistBuilder::new(client, StdinPrompt, playlist_id)
        .with_policy(policy)
        .with_pacing(config::pacing());

    let mut result = BatchResult::default();
    if !names.is_empty() {
        result.merge(builder.add_artists(&names, mode).await);
    }
    if let Some(path) = file {
        result.merge(builder.add_artists_from_file(&path, mode).await);
    }

    report::summary(&result);
}
