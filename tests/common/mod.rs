#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet, VecDeque},
    io::Write,
    sync::Mutex,
};

use playlistcli::{
    catalog::Catalog,
    errors::PlaylistError,
    prompt::Prompt,
    types::{Album, AlbumArtist, AlbumDetail, Artist, Followers, Page, Track},
};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SearchArtists(String),
    SearchAlbums(String),
    SearchTracks(String),
    ArtistAlbums(String, Option<String>),
    AlbumTracks(String, Option<String>),
    TopTracks(String),
    SeveralAlbums(Vec<String>),
    SeveralTracks(Vec<String>),
    AddItems(String, Vec<String>),
}

/// In-memory catalog that records every call made against it.
///
/// Paginated listings are stored as a list of pages; page `i` points to the
/// next one with the cursor `"cursor-{i+1}"`.
#[derive(Default)]
pub struct FakeCatalog {
    pub artist_results: HashMap<String, Vec<Artist>>,
    pub album_results: HashMap<String, Vec<Album>>,
    pub track_results: HashMap<String, Vec<Track>>,
    pub artist_album_pages: HashMap<String, Vec<Vec<Album>>>,
    pub album_track_pages: HashMap<String, Vec<Vec<Track>>>,
    pub top_tracks: HashMap<String, Vec<Track>>,
    pub album_details: HashMap<String, AlbumDetail>,
    pub popularity: HashMap<String, u32>,
    /// Page fetches with this cursor fail.
    pub failing_cursor: Option<String>,
    /// Zero-based indexes of `add_items` calls that fail.
    pub failing_adds: HashSet<usize>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artists(mut self, query: &str, artists: Vec<Artist>) -> Self {
        self.artist_results.insert(query.to_string(), artists);
        self
    }

    pub fn with_albums(mut self, query: &str, albums: Vec<Album>) -> Self {
        self.album_results.insert(query.to_string(), albums);
        self
    }

    pub fn with_tracks(mut self, query: &str, tracks: Vec<Track>) -> Self {
        self.track_results.insert(query.to_string(), tracks);
        self
    }

    pub fn with_artist_albums(mut self, artist_id: &str, pages: Vec<Vec<Album>>) -> Self {
        self.artist_album_pages.insert(artist_id.to_string(), pages);
        self
    }

    pub fn with_album_tracks(mut self, album_id: &str, pages: Vec<Vec<Track>>) -> Self {
        self.album_track_pages.insert(album_id.to_string(), pages);
        self
    }

    pub fn with_top_tracks(mut self, artist_id: &str, tracks: Vec<Track>) -> Self {
        self.top_tracks.insert(artist_id.to_string(), tracks);
        self
    }

    /// Registers the album detail and the popularity of each of its tracks.
    pub fn with_album_detail(mut self, detail: AlbumDetail) -> Self {
        for track in &detail.tracks.items {
            if let Some(popularity) = track.popularity {
                self.popularity.insert(track.id.clone(), popularity);
            }
        }
        self.album_details.insert(detail.id.clone(), detail);
        self
    }

    pub fn failing_cursor(mut self, cursor: &str) -> Self {
        self.failing_cursor = Some(cursor.to_string());
        self
    }

    pub fn failing_add(mut self, index: usize) -> Self {
        self.failing_adds.insert(index);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Sizes of the submitted playlist insert batches, in order.
    pub fn add_batches(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AddItems(_, uris) => Some(uris),
                _ => None,
            })
            .collect()
    }

    pub fn added_uris(&self) -> Vec<String> {
        self.add_batches().into_iter().flatten().collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn page<T: Clone>(
        &self,
        pages: Option<&Vec<Vec<T>>>,
        cursor: Option<String>,
    ) -> Result<Page<T>, PlaylistError> {
        if cursor.is_some() && cursor == self.failing_cursor {
            return Err(PlaylistError::RemoteRead("page unavailable".to_string()));
        }

        let index = cursor
            .map(|c| c.trim_start_matches("cursor-").parse::<usize>().unwrap())
            .unwrap_or(0);
        let Some(pages) = pages else {
            return Ok(Page::last(Vec::new()));
        };

        let next = (index + 1 < pages.len()).then(|| format!("cursor-{}", index + 1));
        Ok(Page {
            items: pages[index].clone(),
            next,
            total: None,
        })
    }
}

impl Catalog for FakeCatalog {
    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>, PlaylistError> {
        self.record(Call::SearchArtists(query.to_string()));
        let mut artists = self.artist_results.get(query).cloned().unwrap_or_default();
        artists.truncate(limit as usize);
        Ok(artists)
    }

    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>, PlaylistError> {
        self.record(Call::SearchAlbums(query.to_string()));
        let mut albums = self.album_results.get(query).cloned().unwrap_or_default();
        albums.truncate(limit as usize);
        Ok(albums)
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, PlaylistError> {
        self.record(Call::SearchTracks(query.to_string()));
        let mut tracks = self.track_results.get(query).cloned().unwrap_or_default();
        tracks.truncate(limit as usize);
        Ok(tracks)
    }

    async fn artist_albums(
        &self,
        artist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Album>, PlaylistError> {
        self.record(Call::ArtistAlbums(artist_id.to_string(), cursor.clone()));
        self.page(self.artist_album_pages.get(artist_id), cursor)
    }

    async fn album_tracks(
        &self,
        album_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, PlaylistError> {
        self.record(Call::AlbumTracks(album_id.to_string(), cursor.clone()));
        self.page(self.album_track_pages.get(album_id), cursor)
    }

    async fn artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, PlaylistError> {
        self.record(Call::TopTracks(artist_id.to_string()));
        Ok(self.top_tracks.get(artist_id).cloned().unwrap_or_default())
    }

    async fn several_albums(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AlbumDetail>>, PlaylistError> {
        self.record(Call::SeveralAlbums(ids.to_vec()));
        Ok(ids
            .iter()
            .map(|id| {
                self.album_details.get(id).cloned().map(|mut detail| {
                    // the album endpoint returns simplified tracks
                    for track in &mut detail.tracks.items {
                        track.popularity = None;
                    }
                    detail
                })
            })
            .collect())
    }

    async fn several_tracks(&self, ids: &[String]) -> Result<Vec<Option<Track>>, PlaylistError> {
        self.record(Call::SeveralTracks(ids.to_vec()));
        Ok(ids
            .iter()
            .map(|id| {
                self.popularity.get(id).map(|popularity| Track {
                    id: id.clone(),
                    name: id.clone(),
                    uri: format!("spotify:track:{}", id),
                    artists: Vec::new(),
                    popularity: Some(*popularity),
                })
            })
            .collect())
    }

    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<String, PlaylistError> {
        let index = self.add_batches().len();
        self.record(Call::AddItems(playlist_id.to_string(), uris.to_vec()));

        if self.failing_adds.contains(&index) {
            return Err(PlaylistError::RemoteWrite("502 Bad Gateway".to_string()));
        }
        Ok(format!("snapshot-{}", index))
    }
}

/// Answers prompts from a fixed script. Runs out like a closed stdin.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front()
    }
}

pub fn artist(id: &str, name: &str, followers: u64) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:artist:{}", id),
        followers: Followers { total: followers },
    }
}

pub fn album(id: &str, name: &str, artist_name: &str) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:album:{}", id),
        total_tracks: 0,
        artists: vec![AlbumArtist {
            id: format!("{}-artist", id),
            name: artist_name.to_string(),
        }],
    }
}

/// Track credited to the given `(id, name)` artists.
pub fn track(id: &str, name: &str, artists: &[(&str, &str)], popularity: u32) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        artists: artists
            .iter()
            .map(|(id, name)| AlbumArtist {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
        popularity: Some(popularity),
    }
}

pub fn album_detail(id: &str, tracks: Vec<Track>) -> AlbumDetail {
    AlbumDetail {
        id: id.to_string(),
        name: id.to_string(),
        tracks: Page::last(tracks),
    }
}

pub fn uris(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("spotify:track:t{}", i)).collect()
}

/// Temporary file holding `content`, removed when dropped.
pub fn temp_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("playlistcli-")
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
