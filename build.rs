//! Build script for playlistcli.
//!
//! Copies `.env.example` into the local data directory so users find a
//! configuration template next to where the `.env` is read from:
//! - Linux: `~/.local/share/playlistcli/.env.example`
//! - macOS: `~/Library/Application Support/playlistcli/.env.example`
//! - Windows: `%LOCALAPPDATA%/playlistcli/.env.example`

use std::{env, fs, path::PathBuf};

/// A missing template only produces a cargo warning. Directory or write
/// failures fail the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("playlistcli");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
