use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playlistcli::{
    cli, config, error,
    management::TokenManager,
    spotify::SpotifyClient,
    warning,
    workflow::{ArtistMode, SelectionPolicy},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List your playlists
    Playlists,

    /// Create a new, empty playlist
    CreatePlaylist(CreatePlaylistOptions),

    /// Add songs by name
    Songs(SongsOptions),

    /// Add every track of one or more albums
    Albums(AlbumsOptions),

    /// Add songs by artist
    Artists(ArtistsOptions),

    /// Menu driven session
    Interactive(InteractiveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreatePlaylistOptions {
    /// Name of the playlist
    pub name: String,

    #[clap(long, default_value = "")]
    pub description: String,

    /// Create the playlist as private
    #[clap(long)]
    pub private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SongsOptions {
    /// Target playlist id, asks when omitted
    #[clap(long)]
    pub playlist: Option<String>,

    /// Read songs from a file, one "Song - Artist" per line
    #[clap(long)]
    pub file: Option<String>,

    /// Songs as "Song - Artist" or just "Song"
    pub entries: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumsOptions {
    /// Target playlist id, asks when omitted
    #[clap(long)]
    pub playlist: Option<String>,

    /// Read albums from a file, one "Album - Artist" per line
    #[clap(long)]
    pub file: Option<String>,

    /// Pick the first match instead of asking
    #[clap(long)]
    pub auto_select: bool,

    /// Albums as "Album - Artist" or just "Album"
    pub entries: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    Top10,
    Topn,
    All,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Target playlist id, asks when omitted
    #[clap(long)]
    pub playlist: Option<String>,

    /// Read artist names from a file, one per line
    #[clap(long)]
    pub file: Option<String>,

    #[clap(long, value_enum, default_value = "top10")]
    pub mode: ModeArg,

    /// Number of tracks for `--mode topn`
    #[clap(long, allow_negative_numbers = true)]
    pub count: Option<String>,

    /// Pick the most followed match instead of asking
    #[clap(long)]
    pub auto_select: bool,

    pub names: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct InteractiveOptions {
    /// Target playlist id, asks when omitted
    #[clap(long)]
    pub playlist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn policy(auto_select: bool) -> SelectionPolicy {
    if auto_select {
        SelectionPolicy::Auto
    } else {
        SelectionPolicy::Interactive
    }
}

fn artist_mode(mode: ModeArg, count: Option<&str>) -> ArtistMode {
    let name = match mode {
        ModeArg::Top10 => "top10",
        ModeArg::Topn => "topn",
        ModeArg::All => "all",
    };

    match ArtistMode::parse(name, count).and_then(ArtistMode::validate) {
        Ok(mode) => mode,
        Err(e) => error!("{}", e),
    }
}

async fn client() -> SpotifyClient {
    let token = match TokenManager::load().await {
        Ok(token) => token,
        Err(e) => error!("Cannot load access token. Err: {}", e),
    };

    if token.is_expired() {
        warning!("Cached access token has expired, requests will likely be rejected");
    }

    SpotifyClient::new(
        config::spotify_apiurl(),
        config::spotify_market(),
        token.access_token().to_string(),
    )
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Playlists => cli::list_playlists(&client().await).await,
        Command::CreatePlaylist(opt) => {
            cli::create_playlist(&client().await, &opt.name, &opt.description, !opt.private)
                .await;
        }
        Command::Songs(opt) => {
            cli::songs(&client().await, opt.playlist, opt.entries, opt.file).await
        }
        Command::Albums(opt) => {
            cli::albums(
                &client().await,
                opt.playlist,
                opt.entries,
                opt.file,
                policy(opt.auto_select),
            )
            .await
        }
        Command::Artists(opt) => {
            let mode = artist_mode(opt.mode, opt.count.as_deref());
            cli::artists(
                &client().await,
                opt.playlist,
                opt.names,
                opt.file,
                mode,
                policy(opt.auto_select),
            )
            .await
        }
        Command::Interactive(opt) => cli::interactive(&client().await, opt.playlist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
