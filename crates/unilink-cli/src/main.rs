#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod commands;
mod config;

use std::process;

use tokio_util::sync::CancellationToken;

use crate::commands::App;
use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "unilink_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "unilink_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "unilink_cli::config";
pub const TRACING_TARGET_COMMAND: &str = "unilink_cli::command";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::debug!(
            target: TRACING_TARGET_SHUTDOWN,
            "command completed successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = format!("{error:#}"),
            "command failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate()?;

    let client = cli.create_client()?;

    // Ctrl-C aborts in-flight requests; they resolve with a cancellation error.
    let cancel = CancellationToken::new();
    let client = client.with_cancellation(cancel.clone());
    tokio::spawn(cancel_on_interrupt(cancel));

    let app = App::new(client);
    let output = cli.command.execute(&app).await?;

    println!("{output}");
    Ok(())
}

/// Cancels `token` on the first interrupt signal.
async fn cancel_on_interrupt(token: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::warn!(
            target: TRACING_TARGET_SHUTDOWN,
            "interrupt received, cancelling in-flight requests"
        );
        token.cancel();
    }
}
