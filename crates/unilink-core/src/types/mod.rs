//! Record types exchanged with the backend.
//!
//! Records travel as camelCase JSON. Identifiers are opaque strings and the
//! `_id` spelling used by document stores is accepted on input. Unknown
//! fields are ignored and optional fields default, so older or newer
//! backends decode without errors.

mod auth;
mod chat;
mod forum;
mod internship;
mod portfolio;
mod profile;
mod project;

pub use auth::{AuthSession, LoginRequest, RegisterRequest, User};
pub use chat::{ChatMessage, ChatReply};
pub use forum::{ForumComment, ForumFilter, ForumPost, NewComment, NewForumPost};
pub use internship::{
    ApplicationReceipt, Internship, InternshipApplication, InternshipFilter, NewInternship,
};
pub use portfolio::{
    NewPortfolio, Portfolio, PortfolioCreated, PortfolioSection, PortfolioTemplate,
    PortfolioUpdate, ShareLink,
};
pub use profile::{Education, Skill};
pub use project::{NewProject, Project, ProjectFilter};

/// A record addressable by its identifier.
///
/// State slices use this to remove items by id.
pub trait Record {
    /// Returns the opaque identifier of this record.
    fn record_id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                #[inline]
                fn record_id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_record!(
    User,
    Internship,
    ApplicationReceipt,
    Project,
    ForumPost,
    ForumComment,
    Portfolio,
    PortfolioTemplate,
    Education,
    Skill,
);
