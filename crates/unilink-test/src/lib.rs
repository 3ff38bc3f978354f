#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod backend;
mod fixtures;
mod routes;

pub use backend::{MockBackend, RecordedRequest};
pub use fixtures::{MOCK_PASSWORD_REJECTED, MOCK_SLOW_DELAY};

/// Tracing target for mock backend operations.
pub const TRACING_TARGET: &str = "unilink_test::backend";
