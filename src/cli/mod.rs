//! # CLI Module
//!
//! User facing commands. Each command takes the shared [`SpotifyClient`],
//! settles on a target playlist and hands the actual work to a
//! [`crate::workflow::PlaylistBuilder`].
//!
//! ## Commands
//!
//! - [`list_playlists`] - Table of the current user's playlists
//! - [`create_playlist`] - Creates an empty playlist
//! - [`songs`] - Adds songs given as `"Song - Artist"` or bare titles
//! - [`albums`] - Adds every track of the given albums
//! - [`artists`] - Adds an artist's top 10, top N or all tracks
//! - [`interactive`] - Menu driven session mixing all of the above
//!
//! Commands that write take an optional playlist id. Without one the user
//! picks one of their playlists or creates a new one first.
//!
//! ## Usage
//!
//! ```bash
//! playlistcli songs --playlist 37i9dQZF1DXcBWIGoYBM5M "Scorpion - Drake" "Hotline Bling"
//! playlistcli albums --file albums.txt --auto-select
//! playlistcli artists "Daft Punk" --mode topn --count 25
//! playlistcli interactive
//! ```
//!
//! Each run ends with a summary of added tracks and the entries that failed.
//!
//! [`SpotifyClient`]: crate::spotify::SpotifyClient

mod albums;
mod artists;
mod interactive;
mod playlist;
mod report;
mod songs;

pub use albums::albums;
pub use artists::artists;
pub use interactive::interactive;
pub use playlist::create_playlist;
pub use playlist::list_playlists;
pub use playlist::select_or_create;
pub use songs::songs;
