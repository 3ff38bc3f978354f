//! Application-root state container.

use unilink_core::types::{Education, Internship, Skill};

use crate::SliceStore;

/// Owns every shared slice.
///
/// Created once by the application root and handed to whatever needs it.
/// Cloning shares the underlying slices.
#[derive(Debug, Clone)]
pub struct Store {
    /// Education entries of the signed-in profile.
    pub education: SliceStore<Education>,
    /// Skills of the signed-in profile.
    pub skills: SliceStore<Skill>,
    /// Internship listings.
    pub internships: SliceStore<Internship>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            education: SliceStore::new("education"),
            skills: SliceStore::new("skills"),
            internships: SliceStore::new("internships"),
        }
    }
}

impl Store {
    /// Creates a store with every slice empty and idle.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use unilink_core::Error;

    use super::*;

    fn education(id: &str) -> Education {
        Education {
            id: id.into(),
            institution: "ETH Zurich".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_clones_share_slices() {
        let store = Store::new();
        let view = store.clone();

        store.education.set(vec![education("a"), education("b")]);
        store.education.add(education("c"));
        assert_eq!(view.education.snapshot().items.len(), 3);
    }

    #[tokio::test]
    async fn test_slices_transition_independently() {
        let store = Store::new();
        store.skills.load(async { Ok(vec![Skill::default()]) }).await;
        store
            .internships
            .load(async { Err(Error::network().with_message("offline")) })
            .await;

        assert_eq!(store.skills.snapshot().items.len(), 1);
        assert!(store.skills.snapshot().error.is_none());
        assert_eq!(
            store.internships.snapshot().error.as_deref(),
            Some("offline")
        );
        assert!(store.education.snapshot().items.is_empty());
    }
}
