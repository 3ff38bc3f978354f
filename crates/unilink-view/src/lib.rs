#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod counter;
mod debounce;
mod teammates;

pub use crate::counter::{Counter, FRAME_INTERVAL, StatItem, StatsSection};
pub use crate::debounce::Debouncer;
pub use crate::teammates::{
    NO_TEAMMATES_FOUND, SEARCH_DEBOUNCE, SearchState, Teammate, TeammateSearch, TeammatesTab,
    filter_teammates, render_teammates, roster,
};

// Tracing target constants
pub const TRACING_TARGET_COUNTER: &str = "unilink_view::counter";
pub const TRACING_TARGET_TEAMMATES: &str = "unilink_view::teammates";
