#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod slice;
mod status;
mod store;

pub use crate::slice::{Slice, SliceAction, SliceStore};
pub use crate::status::SliceStatus;
pub use crate::store::Store;

/// Tracing target for slice transitions.
pub const TRACING_TARGET: &str = "unilink_state::slice";
