use crate::{
    catalog::{ALBUM_SEARCH_LIMIT, ARTIST_SEARCH_LIMIT, Catalog, TRACK_SEARCH_LIMIT},
    errors::PlaylistError,
    info,
    prompt::{self, Prompt},
    success,
    types::{Album, Artist, Track},
    utils,
};

/// How to pick among several search candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Take the first candidate in server order.
    Auto,
    /// List the candidates and let the user choose.
    #[default]
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    NoMatch,
    Single,
    AutoFirst,
    Ask,
}

/// Decides what to do with `count` candidates, without any I/O.
pub fn decide(count: usize, policy: SelectionPolicy) -> Decision {
    match (count, policy) {
        (0, _) => Decision::NoMatch,
        (1, _) => Decision::Single,
        (_, SelectionPolicy::Auto) => Decision::AutoFirst,
        (_, SelectionPolicy::Interactive) => Decision::Ask,
    }
}

pub fn artist_query(artist: &str) -> String {
    format!("artist:{}", artist)
}

pub fn album_query(album: &str, artist: Option<&str>) -> String {
    match artist {
        Some(artist) => format!("album:{} artist:{}", album, artist),
        None => format!("album:{}", album),
    }
}

pub fn track_query(song: &str, artist: Option<&str>) -> String {
    match artist {
        Some(artist) => format!("track:{} artist:{}", song, artist),
        None => format!("track:{}", song),
    }
}

/// Case-insensitive substring match of `hint` against the credited artists.
pub fn artist_matches(track: &Track, hint: &str) -> bool {
    let hint = hint.to_lowercase();
    track
        .artists
        .iter()
        .any(|artist| artist.name.to_lowercase().contains(&hint))
}

/// Picks the track to add among search results.
///
/// Without a hint the top result wins. With one, the first result crediting
/// a matching artist wins, and no result is returned when none does: a
/// cover by someone else is worse than nothing.
pub fn pick_track<'a>(candidates: &'a [Track], artist_hint: Option<&str>) -> Option<&'a Track> {
    match artist_hint {
        None => candidates.first(),
        Some(hint) => candidates.iter().find(|track| artist_matches(track, hint)),
    }
}

fn describe_artist(artist: &Artist) -> String {
    format!(
        "{} ({} followers)",
        artist.name,
        utils::format_count(artist.followers.total)
    )
}

fn describe_album(album: &Album) -> String {
    format!(
        "{} by {} ({} tracks)",
        album.name,
        utils::artist_names(&album.artists),
        album.total_tracks
    )
}

fn select<T, P: Prompt>(
    mut candidates: Vec<T>,
    policy: SelectionPolicy,
    prompt: &mut P,
    label: &str,
    describe: fn(&T) -> String,
) -> Option<T> {
    let index = match decide(candidates.len(), policy) {
        Decision::NoMatch => return None,
        Decision::Single => {
            success!("Found: {}", describe(&candidates[0]));
            0
        }
        decision => {
            println!("\nFound {} {}s:", candidates.len(), label);
            for (i, candidate) in candidates.iter().enumerate() {
                println!("{}. {}", i + 1, describe(candidate));
            }

            if decision == Decision::AutoFirst {
                info!("Auto-selected: {}", describe(&candidates[0]));
                0
            } else {
                prompt::choose(prompt, label, candidates.len())?
            }
        }
    };

    Some(candidates.swap_remove(index))
}

/// Resolves a bare artist name to a single artist.
pub async fn resolve_artist<C: Catalog, P: Prompt>(
    catalog: &C,
    prompt: &mut P,
    name: &str,
    policy: SelectionPolicy,
) -> Result<Artist, PlaylistError> {
    let artists = catalog
        .search_artists(&artist_query(name), ARTIST_SEARCH_LIMIT)
        .await?;

    select(artists, policy, prompt, "artist", describe_artist)
        .ok_or_else(|| PlaylistError::NotFound(name.to_string()))
}

/// Resolves an album title, optionally narrowed by artist.
pub async fn resolve_album<C: Catalog, P: Prompt>(
    catalog: &C,
    prompt: &mut P,
    album: &str,
    artist: Option<&str>,
    policy: SelectionPolicy,
) -> Result<Album, PlaylistError> {
    let albums = catalog
        .search_albums(&album_query(album, artist), ALBUM_SEARCH_LIMIT)
        .await?;

    select(albums, policy, prompt, "album", describe_album)
        .ok_or_else(|| PlaylistError::NotFound(album.to_string()))
}

/// Resolves a song title to a track, never prompting.
pub async fn resolve_track<C: Catalog>(
    catalog: &C,
    song: &str,
    artist: Option<&str>,
) -> Result<Track, PlaylistError> {
    let tracks = catalog
        .search_tracks(&track_query(song, artist), TRACK_SEARCH_LIMIT)
        .await?;

    match pick_track(&tracks, artist) {
        Some(track) => {
            success!(
                "Found: {} by {}",
                track.name,
                utils::artist_names(&track.artists)
            );
            Ok(track.clone())
        }
        None => Err(PlaylistError::NotFound(song.to_string())),
    }
}
