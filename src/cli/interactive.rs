use crate::{
    cli::{playlist::target_playlist, report},
    config, info,
    prompt::{self, Prompt, StdinPrompt},
    spotify::SpotifyClient,
    success,
    types::BatchResult,
    utils, warning,
    workflow::{ArtistMode, PlaylistBuilder, SelectionPolicy, read_entries},
};

type Builder<'a> = PlaylistBuilder<'a, SpotifyClient, StdinPrompt>;

fn new_builder<'a>(
    client: &'a SpotifyClient,
    playlist_id: &str,
    policy: SelectionPolicy,
) -> Builder<'a> {
    PlaylistBuilder::new(client, StdinPrompt, playlist_id)
        .with_policy(policy)
        .with_pacing(config::pacing())
}

fn heading(title: &str) {
    println!("\n{}", "-".repeat(60));
    println!("{}", title);
    println!("{}", "-".repeat(60));
}

/// Menu driven session against one playlist until the user exits.
pub async fn interactive(client: &SpotifyClient, playlist: Option<String>) {
    println!("{}", "=".repeat(60));
    println!("          SPOTIFY PLAYLIST MANAGER");
    println!("{}", "=".repeat(60));

    let Some(playlist_id) = target_playlist(client, playlist).await else {
        warning!("No playlist selected");
        return;
    };

    let mut prompt = StdinPrompt;
    loop {
        println!("\n{}", "=".repeat(60));
        println!("WHAT WOULD YOU LIKE TO ADD?");
        println!("{}", "=".repeat(60));
        println!("1. Add songs (by name)");
        println!("2. Add songs by artist");
        println!("3. Add albums");
        println!("4. Exit");

        let Some(choice) = prompt.ask("\nEnter choice (1, 2, 3, or 4): ") else {
            break;
        };

        match choice.as_str() {
            "1" => songs_menu(client, &playlist_id, &mut prompt).await,
            "2" => artists_menu(client, &playlist_id, &mut prompt).await,
            "3" => albums_menu(client, &playlist_id, &mut prompt).await,
            "4" => {
                success!("Done! Enjoy your playlist!");
                break;
            }
            _ => println!("Invalid choice. Please enter 1, 2, 3, or 4."),
        }
    }
}

async fn songs_menu<P: Prompt>(client: &SpotifyClient, playlist_id: &str, prompt: &mut P) {
    heading("ADD SONGS BY NAME");
    println!("1. Add songs one by one (interactive)");
    println!("2. Add songs from a file");
    println!("3. Add songs from manual input (batch)");
    println!("4. Back to main menu");

    let Some(choice) = prompt.ask("\nEnter choice (1, 2, 3, or 4): ") else {
        return;
    };
    let mut builder = new_builder(client, playlist_id, SelectionPolicy::Interactive);

    match choice.as_str() {
        "1" => {
            let mut result = BatchResult::default();
            loop {
                let entry = prompt
                    .ask("\nEnter song ('Song Name - Artist' or just 'Song Name'): ")
                    .unwrap_or_default();
                if entry.is_empty() {
                    warning!("No song entered.");
                } else {
                    let outcome = builder.add_song(&entry).await;
                    if outcome.added > 0 {
                        success!("Added: {}", entry);
                    }
                    result.merge(outcome);
                }

                if !prompt::confirm(prompt, "\nAdd another song? (y/n): ") {
                    break;
                }
            }
            report::summary(&result);
        }
        "2" => {
            println!("\n=== File Input Mode ===");
            let Some(path) = prompt.ask("Enter the path to your song list file: ") else {
                return;
            };
            let path = utils::clean_path(&path);
            let entries = match read_entries(&path).await {
                Ok(entries) => entries,
                Err(e) => {
                    warning!("Cannot read songs from {}: {}", path, e);
                    return;
                }
            };

            info!("Found {} songs in file.", entries.len());
            if prompt::confirm(prompt, "Proceed to add them? (y/n): ") {
                let result = builder.add_songs(&entries).await;
                report::summary(&result);
            }
        }
        "3" => {
            println!("\n=== Manual Batch Mode ===");
            println!("Enter songs in 'Song Name - Artist' format, one per line.");
            println!("When done, enter a blank line.\n");

            let mut entries = Vec::new();
            while let Some(entry) = prompt.ask(&format!("Song {}: ", entries.len() + 1)) {
                if entry.is_empty() {
                    break;
                }
                entries.push(entry);
            }

            if entries.is_empty() {
                info!("No songs entered.");
                return;
            }
            let result = builder.add_songs(&entries).await;
            report::summary(&result);
        }
        "4" => {}
        _ => println!("Invalid choice."),
    }
}

fn ask_policy<P: Prompt>(prompt: &mut P, noun: &str) -> SelectionPolicy {
    println!("\nWhen multiple {} match:", noun);
    println!("1. Auto-select first match");
    println!("2. Let me choose manually");

    match prompt.ask("\nEnter choice (1 or 2, default: 2): ").as_deref() {
        Some("1") => SelectionPolicy::Auto,
        _ => SelectionPolicy::Interactive,
    }
}

fn ask_mode<P: Prompt>(prompt: &mut P) -> Option<ArtistMode> {
    println!("\nSelect mode:");
    println!("1. Top 10 songs (fast)");
    println!("2. Top N songs (custom number)");
    println!("3. All songs (may be slow for prolific artists)");

    match prompt.ask("\nEnter mode (1, 2, or 3): ")?.as_str() {
        "2" => loop {
            let answer = prompt.ask("How many top songs? ")?;
            match ArtistMode::parse("topn", Some(&answer)) {
                Ok(mode) => match mode.validate() {
                    Ok(mode) => return Some(mode),
                    Err(_) => println!("Please enter a positive number."),
                },
                Err(_) => println!("Please enter a valid number."),
            }
        },
        "3" => Some(ArtistMode::All),
        _ => Some(ArtistMode::Top10),
    }
}

async fn artists_menu<P: Prompt>(client: &SpotifyClient, playlist_id: &str, prompt: &mut P) {
    heading("ADD SONGS BY ARTIST");
    println!("1. Single artist");
    println!("2. Multiple artists from file");
    println!("3. Back to main menu");

    let Some(choice) = prompt.ask("\nEnter choice (1, 2, or 3): ") else {
        return;
    };
    if choice != "1" && choice != "2" {
        if choice != "3" {
            println!("Invalid choice.");
        }
        return;
    }

    let policy = ask_policy(prompt, "artists");
    let Some(mode) = ask_mode(prompt) else {
        return;
    };
    let mut builder = new_builder(client, playlist_id, policy);

    let result = if choice == "1" {
        let name = prompt.ask("\nEnter artist name: ").unwrap_or_default();
        if name.is_empty() {
            return;
        }
        builder.add_artist(&name, mode).await
    } else {
        let Some(path) = prompt.ask("\nEnter the path to your artist list file: ") else {
            return;
        };
        builder.add_artists_from_file(&path, mode).await
    };

    report::summary(&result);
}

async fn albums_menu<P: Prompt>(client: &SpotifyClient, playlist_id: &str, prompt: &mut P) {
    heading("ADD ALBUMS");
    println!("1. Single album");
    println!("2. Multiple albums from file");
    println!("3. Back to main menu");

    let Some(choice) = prompt.ask("\nEnter choice (1, 2, or 3): ") else {
        return;
    };
    if choice != "1" && choice != "2" {
        if choice != "3" {
            println!("Invalid choice.");
        }
        return;
    }

    let policy = ask_policy(prompt, "albums");
    let mut builder = new_builder(client, playlist_id, policy);

    let result = if choice == "1" {
        let entry = prompt
            .ask("\nEnter album in 'Album - Artist' format: ")
            .unwrap_or_default();
        if entry.is_empty() {
            return;
        }
        builder.add_album(&entry).await
    } else {
        let Some(path) = prompt.ask("\nEnter the path to your album list file: ") else {
            return;
        };
        builder.add_albums_from_file(&path).await
    };

    report::summary(&result);
}
