//! Teammate directory with debounced search.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tokio::sync::watch;

use crate::{Debouncer, TRACING_TARGET_TEAMMATES};

/// Quiet period before a search recomputes.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Text shown when a search matches nobody.
pub const NO_TEAMMATES_FOUND: &str = "No teammates found";

/// A potential collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Teammate {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Job title.
    pub title: String,
    /// Short biography.
    pub bio: String,
    /// Skill names.
    pub skills: Vec<String>,
    /// Projects worked on.
    pub projects: Vec<String>,
    /// Internships held.
    pub internships: Vec<String>,
    /// Role within teams.
    pub role: String,
    /// Whether the teammate is online now.
    pub online: bool,
    /// Human-readable last activity.
    pub last_active: String,
}

impl Teammate {
    /// Returns true if the name, title or any skill contains `needle`.
    ///
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(needle))
    }
}

/// Tabs shown above the teammate list.
///
/// Only the selection is tracked: no tab narrows the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[derive(AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TeammatesTab {
    /// Everyone.
    #[default]
    All,
    /// Frequent collaborators.
    Frequent,
    /// Team leads.
    TeamLeads,
}

#[allow(clippy::too_many_arguments)]
fn teammate(
    id: &str,
    name: &str,
    title: &str,
    bio: &str,
    skills: &[&str],
    projects: &[&str],
    internships: &[&str],
    role: &str,
    online: bool,
    last_active: &str,
) -> Teammate {
    let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect();
    Teammate {
        id: id.to_owned(),
        name: name.to_owned(),
        avatar: format!("https://i.pravatar.cc/150?u={id}"),
        title: title.to_owned(),
        bio: bio.to_owned(),
        skills: owned(skills),
        projects: owned(projects),
        internships: owned(internships),
        role: role.to_owned(),
        online,
        last_active: last_active.to_owned(),
    }
}

/// The fixed teammate roster.
pub fn roster() -> Vec<Teammate> {
    vec![
        teammate(
            "tm-1",
            "Sarah Chen",
            "Full Stack Developer",
            "Builds web platforms end to end and mentors first-year students.",
            &["React", "Node.js", "MongoDB", "TypeScript"],
            &["Campus Marketplace", "Study Buddy"],
            &["Google Summer Internship"],
            "Team Lead",
            true,
            "Active now",
        ),
        teammate(
            "tm-2",
            "Marcus Johnson",
            "UI/UX Designer",
            "Turns research into interfaces people enjoy using.",
            &["Figma", "Prototyping", "User Research"],
            &["Study Buddy"],
            &[],
            "Designer",
            false,
            "2 hours ago",
        ),
        teammate(
            "tm-3",
            "Priya Patel",
            "Data Scientist",
            "Works on recommendation models and data pipelines.",
            &["Python", "Machine Learning", "SQL"],
            &["Internship Recommender"],
            &["Microsoft Research Internship"],
            "Member",
            true,
            "Active now",
        ),
        teammate(
            "tm-4",
            "Alex Rivera",
            "Mobile Developer",
            "Ships cross-platform apps with a focus on offline support.",
            &["Flutter", "Kotlin", "Swift"],
            &["Campus Events App"],
            &[],
            "Member",
            false,
            "Yesterday",
        ),
        teammate(
            "tm-5",
            "Emily Zhang",
            "Backend Engineer",
            "Designs APIs and keeps services fast and observable.",
            &["Rust", "PostgreSQL", "Docker"],
            &["Campus Marketplace", "Internship Recommender"],
            &["Amazon SDE Internship"],
            "Team Lead",
            true,
            "5 minutes ago",
        ),
        teammate(
            "tm-6",
            "David Kim",
            "DevOps Engineer",
            "Automates deployments and maintains the team's infrastructure.",
            &["Kubernetes", "AWS", "Terraform"],
            &["Campus Events App"],
            &[],
            "Member",
            false,
            "3 days ago",
        ),
    ]
}

/// Returns the teammates whose name, title or any skill contains `query`,
/// ignoring case. Whitespace in `query` is matched literally. An empty
/// query matches everyone.
pub fn filter_teammates(teammates: &[Teammate], query: &str) -> Vec<Teammate> {
    let needle = query.to_lowercase();
    teammates
        .iter()
        .filter(|teammate| teammate.matches(&needle))
        .cloned()
        .collect()
}

/// Renders a result list as plain text, one teammate per line.
pub fn render_teammates(teammates: &[Teammate]) -> String {
    if teammates.is_empty() {
        return NO_TEAMMATES_FOUND.to_owned();
    }

    teammates
        .iter()
        .map(|t| {
            let status = if t.online { "online" } else { t.last_active.as_str() };
            format!("{} - {} [{}] ({status})", t.name, t.title, t.skills.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Observable state of a [`TeammateSearch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Text currently typed.
    pub query: String,
    /// Selected tab.
    pub tab: TeammatesTab,
    /// Result of the last recomputation.
    pub results: Vec<Teammate>,
    /// True while a recomputation is scheduled. Purely cosmetic.
    pub loading: bool,
    /// How many times the results were recomputed.
    pub recomputations: u64,
}

/// Search box over the teammate roster.
///
/// Each keystroke updates the query immediately and schedules a
/// recomputation [`SEARCH_DEBOUNCE`] later, cancelling the previous one.
#[derive(Debug)]
pub struct TeammateSearch {
    roster: Arc<[Teammate]>,
    state: Arc<watch::Sender<SearchState>>,
    debouncer: Debouncer,
}

impl Default for TeammateSearch {
    fn default() -> Self {
        Self::new(roster())
    }
}

impl TeammateSearch {
    /// Creates a search over `roster` showing everyone.
    pub fn new(roster: Vec<Teammate>) -> Self {
        let initial = SearchState {
            query: String::new(),
            tab: TeammatesTab::default(),
            results: roster.clone(),
            loading: false,
            recomputations: 0,
        };

        Self {
            roster: roster.into(),
            state: Arc::new(watch::Sender::new(initial)),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    /// Overrides the debounce delay.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Handles a keystroke: the full text of the search box.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn input(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|state| {
            state.query = query.clone();
            state.loading = true;
        });

        let roster = self.roster.clone();
        let state = self.state.clone();
        self.debouncer.call(move || {
            let results = filter_teammates(&roster, &query);
            tracing::debug!(
                target: TRACING_TARGET_TEAMMATES,
                query = %query,
                matches = results.len(),
                "Teammate search recomputed"
            );
            state.send_modify(|state| {
                state.results = results;
                state.loading = false;
                state.recomputations += 1;
            });
        });
    }

    /// Selects a tab. The result list is left untouched.
    pub fn select_tab(&mut self, tab: TeammatesTab) {
        self.state.send_modify(|state| state.tab = tab);
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Renders the current results.
    pub fn render(&self) -> String {
        render_teammates(&self.state.borrow().results)
    }
}
