mod common;

use std::time::Duration;

use common::{FakeCatalog, ScriptedPrompt, album, album_detail, artist, track, uris};
use playlistcli::types::Pacing;
use playlistcli::workflow::collect::{collect_album_tracks, collect_artist_albums};
use playlistcli::workflow::writer::add_tracks;
use playlistcli::workflow::{ArtistMode, PlaylistBuilder, SelectionPolicy};
use tokio::time::Instant;

fn assert_elapsed(start: Instant, expected: Duration) {
    let elapsed = start.elapsed();
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(50),
        "expected {:?}, took {:?}",
        expected,
        elapsed
    );
}

fn builder(catalog: &FakeCatalog) -> PlaylistBuilder<'_, FakeCatalog, ScriptedPrompt> {
    PlaylistBuilder::new(catalog, ScriptedPrompt::default(), "pl1")
        .with_policy(SelectionPolicy::Auto)
        .with_pacing(Pacing::default())
}

#[tokio::test(start_paused = true)]
async fn test_item_delay_between_songs() {
    let me = ("ar1", "Drake");
    let catalog = FakeCatalog::new()
        .with_tracks("track:Hotline Bling", vec![track("s1", "Hotline Bling", &[me], 90)])
        .with_tracks("track:Scorpion artist:Drake", vec![track("s2", "Scorpion", &[me], 70)])
        .with_tracks("track:Nonstop", vec![track("s3", "Nonstop", &[me], 80)]);
    let entries = vec![
        "Hotline Bling".to_string(),
        "Scorpion - Drake".to_string(),
        "Nonstop".to_string(),
    ];

    let start = Instant::now();
    let result = builder(&catalog).add_songs(&entries).await;

    assert_eq!(result.added, 3);
    assert_elapsed(start, Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn test_single_song_has_no_delay() {
    let catalog = FakeCatalog::new().with_tracks(
        "track:Hotline Bling",
        vec![track("s1", "Hotline Bling", &[("ar1", "Drake")], 90)],
    );

    let start = Instant::now();
    let result = builder(&catalog)
        .add_songs(&["Hotline Bling".to_string()])
        .await;

    assert_eq!(result.added, 1);
    assert_elapsed(start, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_page_delay_between_cursors() {
    let catalog = FakeCatalog::new().with_artist_albums(
        "ar1",
        vec![
            vec![album("a1", "One", "X")],
            vec![album("a2", "Two", "X")],
            vec![album("a3", "Three", "X")],
        ],
    );

    let start = Instant::now();
    let albums = collect_artist_albums(&catalog, "ar1", &Pacing::default()).await;

    assert_eq!(albums.len(), 3);
    assert_elapsed(start, Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_single_page_has_no_delay() {
    let catalog =
        FakeCatalog::new().with_album_tracks("al1", vec![vec![track("t1", "A", &[], 0)]]);

    let start = Instant::now();
    let tracks = collect_album_tracks(&catalog, "al1", &Pacing::default()).await;

    assert_eq!(tracks.len(), 1);
    assert_elapsed(start, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_batch_delay_between_inserts() {
    let catalog = FakeCatalog::new();

    let start = Instant::now();
    let result = add_tracks(&catalog, "pl1", &uris(250), &Pacing::default()).await;

    assert_eq!(result.added, 250);
    assert_elapsed(start, Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn test_all_mode_paces_popularity_and_inserts() {
    let me = ("ar1", "Drake");
    let tracks = (0..120)
        .map(|i| track(&format!("t{}", i), "Song", &[me], 50))
        .collect();
    let catalog = FakeCatalog::new()
        .with_artists("artist:Drake", vec![artist("ar1", "Drake", 100_000_000)])
        .with_artist_albums("ar1", vec![vec![album("al1", "Scorpion", "Drake")]])
        .with_album_detail(album_detail("al1", tracks));

    let start = Instant::now();
    let result = builder(&catalog).add_artist("Drake", ArtistMode::All).await;

    assert_eq!(result.added, 120);
    let batches: Vec<usize> = catalog.add_batches().iter().map(Vec::len).collect();
    assert_eq!(batches, vec![100, 20]);
    // two popularity pauses and one insert pause
    assert_elapsed(start, Duration::from_secs(3));
}
