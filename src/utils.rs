use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::types::AlbumArtist;

/// Splits `"Name - Artist"` into its two halves.
///
/// Only the first `" - "` separates, so titles containing further dashes stay
/// intact on the artist side. Both halves are trimmed; an empty artist half
/// counts as no artist.
pub fn parse_entry(input: &str) -> (String, Option<String>) {
    match input.split_once(" - ") {
        Some((name, artist)) => {
            let artist = artist.trim();
            let artist = if artist.is_empty() {
                None
            } else {
                Some(artist.to_string())
            };
            (name.trim().to_string(), artist)
        }
        None => (input.trim().to_string(), None),
    }
}

/// Strips whitespace and wrapping quotes from a path typed or pasted by the user.
pub fn clean_path(input: &str) -> String {
    input.trim().trim_matches('"').trim_matches('\'').to_string()
}

/// Formats a number with thousands separators, e.g. `1234567` → `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

pub fn artist_names(artists: &[AlbumArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Drops repeated ids while keeping the first occurrence in place.
pub fn remove_duplicate_ids(ids: &mut Vec<String>) {
    let mut seen_ids = HashSet::new();
    ids.retain(|id| seen_ids.insert(id.clone()));
}

/// Sleeps for `delay`, skipping the timer entirely for a zero delay.
pub async fn pause(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
