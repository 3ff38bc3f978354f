//! Inline rendering of slice state.

use std::fmt;

use crate::Slice;

/// What a view should show for a slice.
///
/// A recorded error always wins: it is rendered even while a new load is in
/// flight, so failures are never hidden behind a spinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceStatus {
    /// The last operation failed.
    Failed(String),
    /// A load is in flight.
    Loading,
    /// Idle with no items.
    Empty,
    /// Idle with this many items.
    Ready(usize),
}

impl SliceStatus {
    /// Derives the status of a slice.
    pub fn of<T>(slice: &Slice<T>) -> Self {
        if let Some(error) = &slice.error {
            Self::Failed(error.clone())
        } else if slice.loading {
            Self::Loading
        } else if slice.items.is_empty() {
            Self::Empty
        } else {
            Self::Ready(slice.items.len())
        }
    }

    /// Returns true for [`SliceStatus::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for SliceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(error) => write!(f, "error: {error}"),
            Self::Loading => f.write_str("loading..."),
            Self::Empty => f.write_str("nothing here yet"),
            Self::Ready(1) => f.write_str("1 item"),
            Self::Ready(count) => write!(f, "{count} items"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_surfaced_while_loading() {
        let slice = Slice::<()> {
            items: Vec::new(),
            loading: true,
            error: Some("Internship not found".into()),
        };
        let status = SliceStatus::of(&slice);
        assert!(status.is_failed());
        assert_eq!(status.to_string(), "error: Internship not found");
    }

    #[test]
    fn test_idle_states() {
        let mut slice = Slice::<()>::default();
        assert_eq!(SliceStatus::of(&slice), SliceStatus::Empty);

        slice.loading = true;
        assert_eq!(SliceStatus::of(&slice).to_string(), "loading...");

        slice.loading = false;
        slice.items = vec![(), ()];
        assert_eq!(SliceStatus::of(&slice).to_string(), "2 items");
    }
}
