#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod retry;
mod token;

pub use unilink_core::{Error, ErrorKind, Result};

pub use crate::client::ApiClient;
pub use crate::config::{ApiConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use crate::retry::RetryConfig;
pub use crate::token::{FileTokenStore, MemoryTokenStore, SharedTokenStore, TOKEN_KEY, TokenStore};

/// Tracing target for request pipeline operations.
pub const TRACING_TARGET: &str = "unilink_reqwest::client";

/// Tracing target for token store operations.
pub const TRACING_TARGET_TOKEN: &str = "unilink_reqwest::token";
