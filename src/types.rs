use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub followers: Followers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
    /// Missing on the simplified tracks embedded in album objects.
    #[serde(default)]
    pub popularity: Option<u32>,
}

/// Spotify paging object. `next` is the full URL of the following page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next: None,
            total: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub artists: Option<Page<Artist>>,
    pub albums: Option<Page<Album>>,
    pub tracks: Option<Page<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralAlbumsResponse {
    pub albums: Vec<Option<AlbumDetail>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: String,
    pub name: String,
    pub tracks: Page<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralTracksResponse {
    pub tracks: Vec<Option<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public: Option<bool>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub name: String,
    pub id: String,
    pub public: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Working record used while ranking an artist's catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub popularity: u32,
}

impl From<Track> for TrackRecord {
    fn from(track: Track) -> Self {
        // local files come without an id, the uri still carries one
        let id = if track.id.is_empty() {
            track.uri.rsplit(':').next().unwrap_or_default().to_string()
        } else {
            track.id
        };

        Self {
            id,
            name: track.name,
            uri: track.uri,
            popularity: track.popularity.unwrap_or(0),
        }
    }
}

#[derive(Tabled)]
pub struct RankedTrackTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub popularity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    InvalidInput,
    NoTracks,
    ReadFailed,
    WriteFailed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::NotFound => "not found",
            FailureKind::InvalidInput => "invalid input",
            FailureKind::NoTracks => "no tracks",
            FailureKind::ReadFailed => "read failed",
            FailureKind::WriteFailed => "write failed",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub item: String,
    pub kind: FailureKind,
}

impl Failure {
    pub fn new(item: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            item: item.into(),
            kind,
        }
    }
}

/// Outcome of any add operation, from a single song up to a whole file of
/// artists. `failed` holds input entries that could not be resolved as well
/// as track uris whose insertion batch was refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub added: usize,
    pub failed: Vec<Failure>,
}

impl BatchResult {
    pub fn failure(item: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            added: 0,
            failed: vec![Failure::new(item, kind)],
        }
    }

    pub fn merge(&mut self, other: BatchResult) {
        self.added += other.added;
        self.failed.extend(other.failed);
    }
}

/// Fixed delays used to stay below the remote rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Between page fetches and between detail batches.
    pub page: Duration,
    /// Between playlist insertion batches.
    pub batch: Duration,
    /// Between top-level items of a multi-item run.
    pub item: Duration,
}

impl Pacing {
    pub fn immediate() -> Self {
        Self {
            page: Duration::ZERO,
            batch: Duration::ZERO,
            item: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            page: Duration::from_millis(500),
            batch: Duration::from_secs(2),
            item: Duration::from_secs(3),
        }
    }
}
