use playlistcli::types::TrackRecord;
use playlistcli::workflow::rank::top_n;

fn record(id: &str, popularity: u32) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: id.to_string(),
        uri: format!("spotify:track:{}", id),
        popularity,
    }
}

fn ids(records: &[TrackRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_top_n_sorts_by_popularity() {
    let records = vec![record("a", 10), record("b", 90), record("c", 50), record("d", 70)];

    let top = top_n(records, 3);

    assert_eq!(ids(&top), vec!["b", "d", "c"]);
}

#[test]
fn test_top_n_keeps_collection_order_on_ties() {
    let records = vec![
        record("first", 50),
        record("high", 80),
        record("second", 50),
        record("third", 50),
    ];

    let top = top_n(records, 4);

    assert_eq!(ids(&top), vec!["high", "first", "second", "third"]);
}

#[test]
fn test_top_n_larger_than_available() {
    let records: Vec<TrackRecord> = (0..8).map(|i| record(&format!("t{}", i), i * 10)).collect();

    let top = top_n(records, 15);

    assert_eq!(top.len(), 8);
    assert!(top.windows(2).all(|w| w[0].popularity >= w[1].popularity));
    assert_eq!(top[0].id, "t7");
}

#[test]
fn test_top_n_zero() {
    assert!(top_n(vec![record("a", 1)], 0).is_empty());
    assert!(top_n(Vec::new(), 5).is_empty());
}
