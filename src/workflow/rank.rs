use crate::types::TrackRecord;

/// Returns the `n` most popular records, most popular first.
///
/// The sort is stable, so records with equal popularity keep the order in
/// which they were collected. Asking for more than available returns all of
/// them.
pub fn top_n(mut records: Vec<TrackRecord>, n: usize) -> Vec<TrackRecord> {
    records.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    records.truncate(n);
    records
}
