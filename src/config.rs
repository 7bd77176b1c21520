//! Service Configuration
//!
//! Loads the document store credentials and network settings once at startup.
//! Business logic never reads the environment directly; everything it needs
//! arrives through this struct.

use anyhow::{Context, Result, bail};
use std::net::SocketAddr;

/// Default base URL of the external document store API.
pub const DEFAULT_API_BASE: &str = "https://api.jsonbin.io/v3/b";

/// Credentials and endpoint for the external document store.
///
/// Constructed once in `main` and shared with the store client behind an
/// `Arc`. The master key authorizes both reads and writes against the bin;
/// it must never appear in logs or responses.
#[derive(Clone)]
pub struct StoreConfig {
    pub master_key: String,
    pub bin_id: String,
    pub api_base: String,
}

impl StoreConfig {
    pub fn new(master_key: String, bin_id: String, api_base: String) -> Self {
        Self {
            master_key,
            bin_id,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the store configuration from the environment.
    ///
    /// `LEADERBOARD_MASTER_KEY` and `LEADERBOARD_BIN_ID` are required; an
    /// absent or empty value aborts startup rather than failing on the first
    /// request. `LEADERBOARD_API_BASE` is optional and mainly useful for
    /// pointing the client at a test server.
    pub fn from_env() -> Result<Self> {
        let master_key = std::env::var("LEADERBOARD_MASTER_KEY")
            .context("LEADERBOARD_MASTER_KEY is not set")?;
        let bin_id =
            std::env::var("LEADERBOARD_BIN_ID").context("LEADERBOARD_BIN_ID is not set")?;

        if master_key.trim().is_empty() {
            bail!("LEADERBOARD_MASTER_KEY is empty");
        }
        if bin_id.trim().is_empty() {
            bail!("LEADERBOARD_BIN_ID is empty");
        }

        let api_base =
            std::env::var("LEADERBOARD_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self::new(master_key, bin_id, api_base))
    }

    /// URL for reading the latest version of the leaderboard document.
    pub fn read_url(&self) -> String {
        format!("{}/{}/latest", self.api_base, self.bin_id)
    }

    /// URL for overwriting the leaderboard document.
    pub fn write_url(&self) -> String {
        format!("{}/{}", self.api_base, self.bin_id)
    }
}

// Debug must not leak the master key.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("master_key", &"<redacted>")
            .field("bin_id", &self.bin_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Address the HTTP server binds to, from `LEADERBOARD_BIND`.
pub fn bind_addr_from_env() -> Result<SocketAddr> {
    let addr = std::env::var("LEADERBOARD_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    addr.parse()
        .with_context(|| format!("invalid LEADERBOARD_BIND address: {}", addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_built_from_base_and_bin() {
        let config = StoreConfig::new(
            "secret".to_string(),
            "bin-123".to_string(),
            "https://store.example/v3/b".to_string(),
        );

        assert_eq!(config.read_url(), "https://store.example/v3/b/bin-123/latest");
        assert_eq!(config.write_url(), "https://store.example/v3/b/bin-123");
    }

    #[test]
    fn test_trailing_slash_in_base_is_trimmed() {
        let config = StoreConfig::new(
            "secret".to_string(),
            "bin-123".to_string(),
            "https://store.example/v3/b/".to_string(),
        );

        assert_eq!(config.write_url(), "https://store.example/v3/b/bin-123");
    }

    #[test]
    fn test_debug_redacts_master_key() {
        let config = StoreConfig::new(
            "super-secret-key".to_string(),
            "bin-123".to_string(),
            DEFAULT_API_BASE.to_string(),
        );

        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("<redacted>"));
    }
}
