use std::time::Duration;

use playlistcli::prompt::parse_choice;
use playlistcli::types::{AlbumArtist, BatchResult, FailureKind, Pacing, Track, TrackRecord};
use playlistcli::utils::*;

#[test]
fn test_parse_entry_with_artist() {
    assert_eq!(
        parse_entry("Scorpion - Drake"),
        ("Scorpion".to_string(), Some("Drake".to_string()))
    );
}

#[test]
fn test_parse_entry_without_artist() {
    assert_eq!(parse_entry("Scorpion"), ("Scorpion".to_string(), None));
    assert_eq!(parse_entry("  Hotline Bling  "), ("Hotline Bling".to_string(), None));
}

#[test]
fn test_parse_entry_splits_on_first_separator() {
    let (name, artist) = parse_entry("Song - Artist - Live");
    assert_eq!(name, "Song");
    assert_eq!(artist.as_deref(), Some("Artist - Live"));
}

#[test]
fn test_parse_entry_keeps_hyphenated_titles() {
    // no spaces around the dash, so it is part of the title
    let (name, artist) = parse_entry("Jay-Z");
    assert_eq!(name, "Jay-Z");
    assert!(artist.is_none());
}

#[test]
fn test_parse_entry_empty_artist_half() {
    let (name, artist) = parse_entry("Scorpion -  ");
    assert_eq!(name, "Scorpion");
    assert!(artist.is_none());

    let (name, artist) = parse_entry("Scorpion -   - x");
    assert_eq!(name, "Scorpion");
    assert_eq!(artist.as_deref(), Some("- x"));
}

#[test]
fn test_clean_path() {
    assert_eq!(clean_path("  \"/tmp/my songs.txt\"  "), "/tmp/my songs.txt");
    assert_eq!(clean_path("'/tmp/artists.txt'"), "/tmp/artists.txt");
    assert_eq!(clean_path("songs.txt\n"), "songs.txt");
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(54_321), "54,321");
    assert_eq!(format_count(100_000_000), "100,000,000");
}

#[test]
fn test_artist_names() {
    let artists = vec![
        AlbumArtist {
            id: "1".to_string(),
            name: "Drake".to_string(),
        },
        AlbumArtist {
            id: "2".to_string(),
            name: "Rihanna".to_string(),
        },
    ];
    assert_eq!(artist_names(&artists), "Drake, Rihanna");
    assert_eq!(artist_names(&[]), "");
}

#[test]
fn test_remove_duplicate_ids_keeps_first_occurrence() {
    let mut ids: Vec<String> = ["a", "b", "a", "c", "b"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    remove_duplicate_ids(&mut ids);
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_parse_choice() {
    assert_eq!(parse_choice("2", 3), Ok(Some(1)));
    assert_eq!(parse_choice(" 3 ", 3), Ok(Some(2)));
    assert_eq!(parse_choice("0", 3), Ok(None));
}

#[test]
fn test_parse_choice_rejects_bad_input() {
    assert_eq!(
        parse_choice("4", 3),
        Err("Please enter a number between 0 and 3".to_string())
    );
    assert_eq!(
        parse_choice("abc", 3),
        Err("Please enter a valid number".to_string())
    );
    assert_eq!(
        parse_choice("-1", 3),
        Err("Please enter a valid number".to_string())
    );
}

#[test]
fn test_track_record_from_track() {
    let track = Track {
        id: String::new(),
        name: "Local".to_string(),
        uri: "spotify:track:abc123".to_string(),
        artists: Vec::new(),
        popularity: None,
    };

    let record = TrackRecord::from(track);
    assert_eq!(record.id, "abc123");
    assert_eq!(record.popularity, 0);
}

#[test]
fn test_batch_result_merge() {
    let mut result = BatchResult {
        added: 3,
        failed: Vec::new(),
    };
    result.merge(BatchResult::failure("Nobody", FailureKind::NotFound));
    result.merge(BatchResult {
        added: 2,
        failed: Vec::new(),
    });

    assert_eq!(result.added, 5);
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.failed[0].item, "Nobody");
    assert_eq!(result.failed[0].kind, FailureKind::NotFound);
}

#[test]
fn test_failure_kind_display() {
    assert_eq!(FailureKind::WriteFailed.to_string(), "write failed");
    assert_eq!(FailureKind::NoTracks.to_string(), "no tracks");
}

#[test]
fn test_default_pacing() {
    let pacing = Pacing::default();
    assert_eq!(pacing.page, Duration::from_millis(500));
    assert_eq!(pacing.batch, Duration::from_secs(2));
    assert_eq!(pacing.item, Duration::from_secs(3));
    assert_eq!(Pacing::immediate().item, Duration::ZERO);
}

#[tokio::test]
async fn test_pause_zero_returns_immediately() {
    let start = std::time::Instant::now();
    pause(Duration::ZERO).await;
    assert!(start.elapsed() < Duration::from_millis(50));
}
