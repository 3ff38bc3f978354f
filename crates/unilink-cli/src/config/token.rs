//! Token persistence configuration.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::{Deserialize, Serialize};
use unilink_reqwest::{FileTokenStore, MemoryTokenStore, SharedTokenStore};

use crate::TRACING_TARGET_CONFIG;

/// Default location of the persisted token, relative to the working directory.
pub const DEFAULT_TOKEN_FILE: &str = ".unilink/token.json";

/// Where the authentication token is kept between runs.
#[derive(Debug, Clone, PartialEq, Eq, Args, Serialize, Deserialize)]
pub struct TokenConfig {
    /// JSON file holding the authentication token
    #[arg(long = "token-file", env = "UNILINK_TOKEN_FILE", default_value = DEFAULT_TOKEN_FILE)]
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,

    /// Keep the token in memory only; nothing is read from or written to disk
    #[arg(long, env = "UNILINK_EPHEMERAL")]
    #[serde(default)]
    pub ephemeral: bool,
}

fn default_token_file() -> PathBuf {
    PathBuf::from(DEFAULT_TOKEN_FILE)
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
            ephemeral: false,
        }
    }
}

impl TokenConfig {
    /// Creates the configured token store.
    pub fn create_store(&self) -> SharedTokenStore {
        if self.ephemeral {
            tracing::debug!(target: TRACING_TARGET_CONFIG, "Using in-memory token store");
            return Arc::new(MemoryTokenStore::new());
        }

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            path = %self.token_file.display(),
            "Using file token store"
        );
        Arc::new(FileTokenStore::new(&self.token_file))
    }
}
