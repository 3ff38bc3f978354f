#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod auth;
mod chatbot;
mod forum;
mod internship;
mod portfolio;
mod project;
mod services;

pub use unilink_core::{Error, ErrorKind, Result};
pub use unilink_reqwest::ApiClient;

pub use crate::auth::AuthService;
pub use crate::chatbot::ChatbotService;
pub use crate::forum::ForumService;
pub use crate::internship::InternshipService;
#[cfg(any(test, feature = "demo"))]
#[cfg_attr(docsrs, doc(cfg(feature = "demo")))]
pub use crate::portfolio::{DEMO_CREATE_DELAY, DemoPortfolio};
pub use crate::portfolio::{PortfolioProvider, PortfolioService};
pub use crate::project::ProjectService;
pub use crate::services::Services;

// Tracing target constants
pub const TRACING_TARGET_AUTH: &str = "unilink_service::auth";
pub const TRACING_TARGET_INTERNSHIP: &str = "unilink_service::internship";
pub const TRACING_TARGET_PROJECT: &str = "unilink_service::project";
pub const TRACING_TARGET_FORUM: &str = "unilink_service::forum";
pub const TRACING_TARGET_CHATBOT: &str = "unilink_service::chatbot";
pub const TRACING_TARGET_PORTFOLIO: &str = "unilink_service::portfolio";
