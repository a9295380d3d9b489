use crate::{
    cli::{playlist::target_playlist, report},
    config,
    prompt::StdinPrompt,
    spotify::SpotifyClient,
    types::BatchResult,
    warning,
    workflow::PlaylistBuilder,
};

pub async fn songs(
    client: &SpotifyClient,
    playlist: Option<String>,
    entries: Vec<String>,
    file: Option<String>,
) {
    if entries.is_empty() && file.is_none() {
        warning!("Nothing to add. Pass songs as arguments or use --file.");
        return;
    }

    let Some(playlist_id) = target_playlist(client, playlist).await else {
        warning!("No playlist selected");
        return;
    };

    let mut builder =
        PlaylistBuilder::new(client, StdinPrompt, playlist_id).with_pacing(config::pacing());

    let mut result = BatchResult::default();
    if !entries.is_empty() {
        result.merge(builder.add_songs(&entries).await);
    }
    if let Some(path) = file {
        result.merge(builder.add_songs_from_file(&path).await);
    }

    report::summary(&result);
}
