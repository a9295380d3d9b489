use tabled::Table;

use crate::{
    config, info,
    prompt::{Prompt, StdinPrompt},
    spotify::SpotifyClient,
    success,
    types::{Playlist, PlaylistTableRow},
    warning,
    workflow::collect,
};

const DEFAULT_PLAYLIST_NAME: &str = "My Playlist";

async fn fetch_playlists(client: &SpotifyClient) -> Vec<Playlist> {
    collect::collect_pages(
        move |cursor| client.user_playlists(cursor),
        config::pacing().page,
    )
    .await
}

pub async fn list_playlists(client: &SpotifyClient) {
    let playlists = fetch_playlists(client).await;
    if playlists.is_empty() {
        info!("You don't have any playlists yet.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .enumerate()
        .map(|(i, p)| PlaylistTableRow {
            index: i + 1,
            name: p.name,
            id: p.id,
            public: match p.public {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => "-".to_string(),
            },
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub async fn create_playlist(
    client: &SpotifyClient,
    name: &str,
    description: &str,
    public: bool,
) -> Option<String> {
    let user = match client.current_user().await {
        Ok(user) => user,
        Err(e) => {
            warning!("Failed to load current user: {}", e);
            return None;
        }
    };

    match client
        .create_playlist(&user.id, name, description, public)
        .await
    {
        Ok(playlist) => {
            success!("Created playlist: {} (ID: {})", playlist.name, playlist.id);
            Some(playlist.id)
        }
        Err(e) => {
            warning!("Failed to create playlist: {}", e);
            None
        }
    }
}

/// Returns `playlist` when given, otherwise lets the user pick one of their
/// playlists or create a new one.
pub async fn target_playlist(client: &SpotifyClient, playlist: Option<String>) -> Option<String> {
    match playlist {
        Some(id) => Some(id),
        None => select_or_create(client, &mut StdinPrompt).await,
    }
}

pub async fn select_or_create<P: Prompt>(client: &SpotifyClient, prompt: &mut P) -> Option<String> {
    println!("\n=== Playlist Selection ===");
    let playlists = fetch_playlists(client).await;

    if playlists.is_empty() {
        info!("You don't have any playlists yet.");
    } else {
        println!("\nYour existing playlists:");
        for (i, playlist) in playlists.iter().enumerate() {
            println!("{}. {}", i + 1, playlist.name);
        }
        let create_choice = playlists.len() + 1;
        println!("\n{}. Create a new playlist", create_choice);

        loop {
            let answer = prompt.ask(&format!("\nSelect a playlist (1-{}): ", create_choice))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..create_choice).contains(&n) => {
                    let selected = &playlists[n - 1];
                    success!("Selected: {}", selected.name);
                    return Some(selected.id.clone());
                }
                Ok(n) if n == create_choice => break,
                Ok(_) => println!("Please enter a number between 1 and {}", create_choice),
                Err(_) => println!("Please enter a valid number"),
            }
        }
    }

    let mut name = prompt
        .ask("\nEnter the name for the new playlist: ")
        .unwrap_or_default();
    if name.is_empty() {
        warning!(
            "Playlist name cannot be empty. Using '{}' as default.",
            DEFAULT_PLAYLIST_NAME
        );
        name = DEFAULT_PLAYLIST_NAME.to_string();
    }

    let description = prompt
        .ask("Enter a description (optional, press Enter to skip): ")
        .unwrap_or_default();
    let public = prompt
        .ask("Make it public? (y/n, default: y): ")
        .map(|answer| !answer.eq_ignore_ascii_case("n"))
        .unwrap_or(true);

    create_playlist(client, &name, &description, public).await
}
