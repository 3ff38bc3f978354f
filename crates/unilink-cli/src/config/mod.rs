//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── api: ApiConfig        # Base URL, timeout, user agent, GET retries
//! ├── token: TokenConfig    # Token file or in-memory token
//! └── command: Command      # What to do
//! ```
//!
//! Every option can also be provided through its environment variable; see
//! `--help`.

mod token;

use std::process;

use anyhow::Context;
use clap::Parser;
pub use token::TokenConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use unilink_reqwest::{ApiClient, ApiConfig};

use crate::commands::Command;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "unilink")]
#[command(about = "Command-line client for the unilink platform")]
#[command(version)]
pub struct Cli {
    /// Backend connection settings.
    #[clap(flatten)]
    pub api: ApiConfig,

    /// Token persistence settings.
    #[clap(flatten)]
    pub token: TokenConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Logs are written to stderr so stdout carries command output only.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.api.validate().context("invalid API configuration")?;
        Ok(())
    }

    /// Creates the API client over the configured token store.
    pub fn create_client(&self) -> anyhow::Result<ApiClient> {
        ApiClient::with_shared_tokens(self.api.clone(), self.token.create_store())
            .context("failed to create API client")
    }

    /// Logs configuration at debug level (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            api_url = %self.api.api_url,
            http_timeout_secs = self.api.http_timeout,
            get_retries = self.api.get_retries,
            token_file = %self.token.token_file.display(),
            ephemeral = self.token.ephemeral,
            "Client configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [
            cfg!(feature = "dotenv").then_some("dotenv"),
            cfg!(feature = "demo").then_some("demo"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "unilink",
            "--api-url",
            "https://api.unilink.dev/api",
            "--http-get-retries",
            "2",
            "--token-file",
            "/tmp/unilink.json",
            "me",
        ])
        .unwrap();

        assert_eq!(cli.api.api_url.as_str(), "https://api.unilink.dev/api");
        assert_eq!(cli.api.get_retries, 2);
        assert_eq!(cli.token.token_file, PathBuf::from("/tmp/unilink.json"));
        assert!(matches!(cli.command, Command::Me));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unsupported_scheme() {
        let cli = Cli::try_parse_from(["unilink", "--api-url", "ftp://example.com/api", "me"])
            .unwrap();
        assert!(cli.validate().is_err());
    }
}
