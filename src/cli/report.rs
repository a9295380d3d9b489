use colored::Colorize;

use crate::{success, types::BatchResult, warning};

/// Prints how many tracks made it into the playlist and lists what did not.
pub fn summary(result: &BatchResult) {
    println!("\n{}", "=".repeat(50));
    success!("Added {} tracks to the playlist", result.added);

    if result.failed.is_empty() {
        return;
    }

    warning!("Failed to add ({}):", result.failed.len());
    for failure in &result.failed {
        println!("  {} {} ({})", "✗".red(), failure.item, failure.kind);
    }
}
