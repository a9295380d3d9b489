use std::{future::Future, time::Duration};

use indicatif::ProgressBar;

use crate::{
    catalog::{ALBUM_BATCH_SIZE, Catalog, TRACK_BATCH_SIZE},
    errors::PlaylistError,
    types::{Album, Page, Pacing, Track, TrackRecord},
    utils, warning,
};

/// Follows `next` cursors until the last page and returns every item in order.
///
/// `fetch` is called with `None` for the first page and with the previous
/// page's cursor afterwards. `delay` is slept between two fetches, never
/// before the first one. A failing fetch ends the collection; what was
/// gathered so far is returned.
pub async fn collect_pages<T, F, Fut>(fetch: F, delay: Duration) -> Vec<T>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, PlaylistError>>,
{
    let (items, error) = fetch_pages(fetch, delay).await;
    if let Some(e) = error {
        warning!("Failed to fetch page, keeping {} items: {}", items.len(), e);
    }
    items
}

/// Same loop as [`collect_pages`], handing the error that ended it back to
/// the caller instead of printing it.
async fn fetch_pages<T, F, Fut>(
    mut fetch: F,
    delay: Duration,
) -> (Vec<T>, Option<PlaylistError>)
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, PlaylistError>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        match fetch(cursor.take()).await {
            Ok(page) => {
                items.extend(page.items);
                match page.next {
                    Some(next) => {
                        utils::pause(delay).await;
                        cursor = Some(next);
                    }
                    None => return (items, None),
                }
            }
            Err(e) => return (items, Some(e)),
        }
    }
}

/// All albums and singles of an artist, in the order Spotify lists them.
pub async fn collect_artist_albums<C: Catalog>(
    catalog: &C,
    artist_id: &str,
    pacing: &Pacing,
) -> Vec<Album> {
    collect_pages(
        move |cursor| catalog.artist_albums(artist_id, cursor),
        pacing.page,
    )
    .await
}

/// Complete track listing of an album.
pub async fn collect_album_tracks<C: Catalog>(
    catalog: &C,
    album_id: &str,
    pacing: &Pacing,
) -> Vec<Track> {
    let tracks = collect_pages(
        move |cursor| catalog.album_tracks(album_id, cursor),
        pacing.page,
    )
    .await;

    for track in &tracks {
        println!("  - {}", track.name);
    }

    tracks
}

/// Every track the artist is credited on across their albums and singles,
/// with popularity filled in.
///
/// Album details are fetched 20 at a time; tracks whose credits do not
/// include `artist_id` are dropped so features on other artists' records
/// stay out. Popularity is then looked up 50 tracks at a time since the
/// album endpoint does not carry it. Tracks whose lookup fails keep a
/// popularity of 0.
pub async fn collect_artist_tracks<C: Catalog>(
    catalog: &C,
    artist_id: &str,
    pacing: &Pacing,
) -> Vec<TrackRecord> {
    let pb = utils::spinner("Fetching albums...");

    let (albums, error) = fetch_pages(
        move |cursor| catalog.artist_albums(artist_id, cursor),
        pacing.page,
    )
    .await;
    if let Some(e) = error {
        pb.suspend(|| warning!("Failed to fetch albums, keeping {}: {}", albums.len(), e));
    }

    let mut album_ids: Vec<String> = albums.into_iter().map(|album| album.id).collect();
    utils::remove_duplicate_ids(&mut album_ids);

    pb.set_message(format!("Found {} albums/singles", album_ids.len()));

    let mut records: Vec<TrackRecord> = Vec::new();
    for (index, chunk) in album_ids.chunks(ALBUM_BATCH_SIZE).enumerate() {
        if index > 0 {
            utils::pause(pacing.page).await;
        }

        match catalog.several_albums(chunk).await {
            Ok(details) => {
                for album in details.into_iter().flatten() {
                    records.extend(
                        album
                            .tracks
                            .items
                            .into_iter()
                            .filter(|track| track.artists.iter().any(|a| a.id == artist_id))
                            .map(TrackRecord::from),
                    );
                }
                pb.set_message(format!("Collected {} tracks...", records.len()));
            }
            Err(e) => {
                pb.suspend(|| warning!("Failed to fetch album batch {}: {}", index + 1, e));
            }
        }
    }

    pb.set_message(format!("Getting popularity for {} tracks...", records.len()));
    backfill_popularity(catalog, &mut records, pacing, &pb).await;

    pb.finish_and_clear();
    records
}

async fn backfill_popularity<C: Catalog>(
    catalog: &C,
    records: &mut [TrackRecord],
    pacing: &Pacing,
    pb: &ProgressBar,
) {
    let ids: Vec<String> = records.iter().map(|record| record.id.clone()).collect();

    for (index, chunk) in ids.chunks(TRACK_BATCH_SIZE).enumerate() {
        if index > 0 {
            utils::pause(pacing.page).await;
        }

        let tracks = match catalog.several_tracks(chunk).await {
            Ok(tracks) => tracks,
            Err(e) => {
                pb.suspend(|| warning!("Failed to fetch popularity batch {}: {}", index + 1, e));
                continue;
            }
        };

        let offset = index * TRACK_BATCH_SIZE;
        for (position, track) in tracks.into_iter().enumerate() {
            if let (Some(track), Some(record)) = (track, records.get_mut(offset + position)) {
                record.popularity = track.popularity.unwrap_or(0);
            }
        }
    }
}
