use std::path::PathBuf;

use chrono::Utc;

use crate::{Res, config, types::Token};

/// Holds the access token the Spotify client authenticates with.
///
/// The token is obtained outside of this tool. It is read from the cached
/// `token.json` in the data directory when present, otherwise from
/// `SPOTIFY_ACCESS_TOKEN`.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Res<Self> {
        match Self::load_from_cache().await {
            Ok(manager) => Ok(manager),
            Err(cache_err) => match config::spotify_access_token() {
                Some(access_token) => Ok(Self::new(Token {
                    access_token,
                    expires_in: 0,
                    obtained_at: 0,
                })),
                None => Err(format!(
                    "No cached token ({}) and SPOTIFY_ACCESS_TOKEN is not set",
                    cache_err
                )
                .into()),
            },
        }
    }

    pub async fn load_from_cache() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    /// Whether the token is past its lifetime. Tokens without a known
    /// lifetime are never considered expired.
    pub fn is_expired(&self) -> bool {
        if self.token.expires_in == 0 {
            return false;
        }

        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}
