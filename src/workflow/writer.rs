use crate::{
    catalog::{Catalog, PLAYLIST_BATCH_SIZE},
    success,
    types::{BatchResult, Failure, FailureKind, Pacing},
    utils, warning,
};

/// Appends `uris` to the playlist in batches of 100.
///
/// Batches are submitted one after another with `pacing.batch` in between.
/// A refused batch does not stop the remaining ones: its uris are reported
/// as [`FailureKind::WriteFailed`] and only accepted batches count towards
/// `added`.
pub async fn add_tracks<C: Catalog>(
    catalog: &C,
    playlist_id: &str,
    uris: &[String],
    pacing: &Pacing,
) -> BatchResult {
    let mut result = BatchResult::default();
    let total = uris.len();

    for (index, batch) in uris.chunks(PLAYLIST_BATCH_SIZE).enumerate() {
        if index > 0 {
            utils::pause(pacing.batch).await;
        }

        match catalog.add_items(playlist_id, batch).await {
            Ok(_) => {
                result.added += batch.len();
                success!(
                    "Added {} songs ({}/{})",
                    batch.len(),
                    result.added,
                    total
                );
            }
            Err(e) => {
                warning!("Error adding batch {}: {}", index + 1, e);
                result.failed.extend(
                    batch
                        .iter()
                        .map(|uri| Failure::new(uri.clone(), FailureKind::WriteFailed)),
                );
            }
        }
    }

    result
}
