use tabled::Table;

use crate::{
    catalog::Catalog,
    errors::PlaylistError,
    info,
    prompt::Prompt,
    types::{BatchResult, FailureKind, Pacing, RankedTrackTableRow},
    utils, warning,
};

use super::{
    collect, rank,
    resolve::{self, SelectionPolicy},
    writer,
};

const TOP_TRACKS_LIMIT: usize = 10;

/// Which of an artist's tracks to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistMode {
    /// Spotify's own top tracks list, no pagination needed.
    Top10,
    /// The N most popular tracks across the whole catalogue.
    TopN(i64),
    /// Every track the artist is credited on.
    All,
}

impl ArtistMode {
    /// Builds a mode from its textual name and, for `topn`, the raw count.
    ///
    /// Only the shape is checked here; see [`ArtistMode::validate`] for the
    /// count itself.
    pub fn parse(mode: &str, count: Option<&str>) -> Result<Self, PlaylistError> {
        match mode.trim().to_lowercase().as_str() {
            "top10" => Ok(ArtistMode::Top10),
            "all" => Ok(ArtistMode::All),
            "topn" => {
                let count = count.ok_or_else(|| {
                    PlaylistError::InvalidInput("topn mode needs a count".to_string())
                })?;
                count
                    .trim()
                    .parse::<i64>()
                    .map(ArtistMode::TopN)
                    .map_err(|_| {
                        PlaylistError::InvalidInput(format!("'{}' is not a valid number", count))
                    })
            }
            other => Err(PlaylistError::InvalidInput(format!(
                "unknown mode '{}', expected top10, topn or all",
                other
            ))),
        }
    }

    /// Rejects a [`ArtistMode::TopN`] count that is zero or negative.
    pub fn validate(self) -> Result<Self, PlaylistError> {
        match self {
            ArtistMode::TopN(n) if n <= 0 => Err(PlaylistError::InvalidInput(format!(
                "topn count must be positive, got {}",
                n
            ))),
            mode => Ok(mode),
        }
    }
}

/// What the entries of a list describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `"Song - Artist"` or a bare song title.
    Song,
    /// `"Album - Artist"` or a bare album title.
    Album,
    /// A bare artist name.
    Artist(ArtistMode),
}

impl EntryKind {
    fn label(&self) -> &'static str {
        match self {
            EntryKind::Song => "songs",
            EntryKind::Album => "albums",
            EntryKind::Artist(_) => "artists",
        }
    }
}

/// Reads one entry per line, trimming each and dropping blank lines.
pub async fn read_entries(path: &str) -> Result<Vec<String>, PlaylistError> {
    let content = async_fs::read_to_string(path).await?;
    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if entries.is_empty() {
        return Err(PlaylistError::InvalidInput(format!(
            "no entries found in {}",
            path
        )));
    }

    Ok(entries)
}

/// Drives songs, albums and artists into one playlist.
///
/// Every operation returns a [`BatchResult`]; nothing in here fails the
/// whole run. Items of a list are handled strictly in order with
/// `pacing.item` between them.
pub struct PlaylistBuilder<'a, C: Catalog, P: Prompt> {
    catalog: &'a C,
    prompt: P,
    playlist_id: String,
    policy: SelectionPolicy,
    pacing: Pacing,
}

impl<'a, C: Catalog, P: Prompt> PlaylistBuilder<'a, C, P> {
    pub fn new(catalog: &'a C, prompt: P, playlist_id: impl Into<String>) -> Self {
        Self {
            catalog,
            prompt,
            playlist_id: playlist_id.into(),
            policy: SelectionPolicy::default(),
            pacing: Pacing::default(),
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    /// Adds a single song given as `"Song - Artist"` or a bare title.
    pub async fn add_song(&mut self, entry: &str) -> BatchResult {
        let (song, artist) = utils::parse_entry(entry);
        info!("Searching for: {}{}", song, by_artist(artist.as_deref()));

        let track = match resolve::resolve_track(self.catalog, &song, artist.as_deref()).await {
            Ok(track) => track,
            Err(e) => {
                warning!("Song not found: {} ({})", entry, e);
                if artist.is_some() {
                    info!("Tip: Make sure the artist name is spelled correctly.");
                }
                return BatchResult::failure(entry, e.failure_kind());
            }
        };

        let written =
            writer::add_tracks(self.catalog, &self.playlist_id, &[track.uri], &self.pacing).await;

        if written.added == 1 {
            BatchResult {
                added: 1,
                failed: Vec::new(),
            }
        } else {
            BatchResult::failure(entry, FailureKind::WriteFailed)
        }
    }

    /// Adds every track of an album given as `"Album - Artist"` or a bare title.
    pub async fn add_album(&mut self, entry: &str) -> BatchResult {
        let (album_name, artist) = utils::parse_entry(entry);
        info!(
            "Searching for album: {}{}",
            album_name,
            by_artist(artist.as_deref())
        );

        let album = match resolve::resolve_album(
            self.catalog,
            &mut self.prompt,
            &album_name,
            artist.as_deref(),
            self.policy,
        )
        .await
        {
            Ok(album) => album,
            Err(e) => {
                warning!("Album not found: {} ({})", entry, e);
                return BatchResult::failure(entry, e.failure_kind());
            }
        };

        info!(
            "Fetching tracks from {} by {}...",
            album.name,
            utils::artist_names(&album.artists)
        );
        let tracks = collect::collect_album_tracks(self.catalog, &album.id, &self.pacing).await;

        if tracks.is_empty() {
            warning!("No tracks found for {}", album.name);
            return BatchResult::failure(entry, FailureKind::NoTracks);
        }

        let uris: Vec<String> = tracks.into_iter().map(|track| track.uri).collect();
        info!("Adding {} tracks to playlist...", uris.len());
        writer::add_tracks(self.catalog, &self.playlist_id, &uris, &self.pacing).await
    }

    /// Adds tracks of an artist according to `mode`.
    ///
    /// A non-positive count for [`ArtistMode::TopN`] is rejected before the
    /// catalog is contacted.
    pub async fn add_artist(&mut self, name: &str, mode: ArtistMode) -> BatchResult {
        let name = name.trim();
        if let Err(e) = mode.validate() {
            warning!("{}", e);
            return BatchResult::failure(name, e.failure_kind());
        }

        info!("Searching for artist: {}", name);
        let artist =
            match resolve::resolve_artist(self.catalog, &mut self.prompt, name, self.policy).await
            {
                Ok(artist) => artist,
                Err(e) => {
                    warning!("Artist not found: {} ({})", name, e);
                    return BatchResult::failure(name, e.failure_kind());
                }
            };

        info!("Fetching songs from {}...", artist.name);
        let uris: Vec<String> = match mode {
            ArtistMode::Top10 => match self.catalog.artist_top_tracks(&artist.id).await {
                Ok(tracks) => tracks
                    .into_iter()
                    .take(TOP_TRACKS_LIMIT)
                    .map(|track| {
                        println!("  - {}", track.name);
                        track.uri
                    })
                    .collect(),
                Err(e) => {
                    warning!("Failed to fetch top tracks for {}: {}", artist.name, e);
                    return BatchResult::failure(name, e.failure_kind());
                }
            },
            ArtistMode::TopN(n) => {
                let records =
                    collect::collect_artist_tracks(self.catalog, &artist.id, &self.pacing).await;
                let top = rank::top_n(records, usize::try_from(n).unwrap_or(usize::MAX));

                let rows: Vec<RankedTrackTableRow> = top
                    .iter()
                    .enumerate()
                    .map(|(i, record)| RankedTrackTableRow {
                        rank: i + 1,
                        name: record.name.clone(),
                        popularity: record.popularity,
                    })
                    .collect();
                info!("Top {} tracks:", top.len());
                println!("{}", Table::new(rows));

                top.into_iter().map(|record| record.uri).collect()
            }
            ArtistMode::All => {
                let records =
                    collect::collect_artist_tracks(self.catalog, &artist.id, &self.pacing).await;
                info!("All {} tracks will be added", records.len());
                records.into_iter().map(|record| record.uri).collect()
            }
        };

        if uris.is_empty() {
            warning!("No tracks found for {}", artist.name);
            return BatchResult::failure(name, FailureKind::NoTracks);
        }

        info!("Adding {} songs to playlist...", uris.len());
        writer::add_tracks(self.catalog, &self.playlist_id, &uris, &self.pacing).await
    }

    pub async fn add_songs(&mut self, entries: &[String]) -> BatchResult {
        self.add_all(EntryKind::Song, entries).await
    }

    pub async fn add_albums(&mut self, entries: &[String]) -> BatchResult {
        self.add_all(EntryKind::Album, entries).await
    }

    pub async fn add_artists(&mut self, names: &[String], mode: ArtistMode) -> BatchResult {
        self.add_all(EntryKind::Artist(mode), names).await
    }

    pub async fn add_songs_from_file(&mut self, path: &str) -> BatchResult {
        self.add_from_file(EntryKind::Song, path).await
    }

    pub async fn add_albums_from_file(&mut self, path: &str) -> BatchResult {
        self.add_from_file(EntryKind::Album, path).await
    }

    pub async fn add_artists_from_file(&mut self, path: &str, mode: ArtistMode) -> BatchResult {
        self.add_from_file(EntryKind::Artist(mode), path).await
    }

    /// Processes `entries` one after another and sums up their results.
    /// Blank entries are ignored.
    pub async fn add_all(&mut self, kind: EntryKind, entries: &[String]) -> BatchResult {
        let entries: Vec<&str> = entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .collect();
        let total = entries.len();
        let mut result = BatchResult::default();

        info!("Processing {} {}", total, kind.label());

        for (i, entry) in entries.into_iter().enumerate() {
            println!("\n[{}/{}] Processing: {}", i + 1, total, entry);
            println!("{}", "-".repeat(50));

            let outcome = match kind {
                EntryKind::Song => self.add_song(entry).await,
                EntryKind::Album => self.add_album(entry).await,
                EntryKind::Artist(mode) => self.add_artist(entry, mode).await,
            };
            result.merge(outcome);

            if i + 1 < total {
                info!(
                    "Waiting {} seconds before the next entry...",
                    self.pacing.item.as_secs_f32()
                );
                utils::pause(self.pacing.item).await;
            }
        }

        result
    }

    /// Like [`Self::add_all`] with entries read from a file.
    ///
    /// An unreadable or empty file yields nothing added and a single
    /// [`FailureKind::InvalidInput`] entry for the path.
    pub async fn add_from_file(&mut self, kind: EntryKind, path: &str) -> BatchResult {
        let path = utils::clean_path(path);
        match read_entries(&path).await {
            Ok(entries) => self.add_all(kind, &entries).await,
            Err(e) => {
                warning!("Cannot read {} from {}: {}", kind.label(), path, e);
                BatchResult::failure(path, FailureKind::InvalidInput)
            }
        }
    }
}

fn by_artist(artist: Option<&str>) -> String {
    artist
        .map(|artist| format!(" by {}", artist))
        .unwrap_or_default()
}
