//! Resource slices and their reducer.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use unilink_core::Result;
use unilink_core::types::Record;

use crate::TRACING_TARGET;

/// State of one resource collection.
///
/// `loading` and `error` are independent fields: setting one never resets
/// the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice<T> {
    /// Records in display order.
    pub items: Vec<T>,
    /// Whether a fetch or mutation currently owns the slice.
    pub loading: bool,
    /// Message of the last failure, if any.
    pub error: Option<String>,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// The only ways a [`Slice`] can change.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceAction<T> {
    /// Replaces all items.
    Set(Vec<T>),
    /// Appends one item.
    Add(T),
    /// Removes every item with the given identifier.
    Remove {
        /// Identifier of the record to remove.
        id: String,
    },
    /// Sets the loading flag.
    SetLoading(bool),
    /// Sets or clears the error message.
    SetError(Option<String>),
}

impl<T> SliceAction<T> {
    fn name(&self) -> &'static str {
        match self {
            Self::Set(_) => "set",
            Self::Add(_) => "add",
            Self::Remove { .. } => "remove",
            Self::SetLoading(_) => "set_loading",
            Self::SetError(_) => "set_error",
        }
    }
}

impl<T: Record> Slice<T> {
    /// Applies an action in place.
    pub fn reduce(&mut self, action: SliceAction<T>) {
        match action {
            SliceAction::Set(items) => self.items = items,
            SliceAction::Add(item) => self.items.push(item),
            SliceAction::Remove { id } => self.items.retain(|item| item.record_id() != id),
            SliceAction::SetLoading(loading) => self.loading = loading,
            SliceAction::SetError(error) => self.error = error,
        }
    }

    /// Returns true when no load is in flight.
    pub fn is_idle(&self) -> bool {
        !self.loading
    }
}

/// An observable, exclusively-owned [`Slice`].
///
/// Clones share the same slice. Readers get snapshots or subscriptions;
/// every change goes through [`dispatch`](Self::dispatch).
#[derive(Clone)]
pub struct SliceStore<T> {
    name: &'static str,
    sender: Arc<watch::Sender<Slice<T>>>,
}

impl<T> fmt::Debug for SliceStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceStore")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> SliceStore<T>
where
    T: Record + Clone,
{
    /// Creates an empty, idle slice.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            sender: Arc::new(watch::Sender::new(Slice::default())),
        }
    }

    /// Returns the slice name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies an action and notifies subscribers.
    pub fn dispatch(&self, action: SliceAction<T>) {
        tracing::trace!(
            target: TRACING_TARGET,
            slice = self.name,
            action = action.name(),
            "Dispatching slice action"
        );
        self.sender.send_modify(|slice| slice.reduce(action));
    }

    /// Replaces all items.
    pub fn set(&self, items: Vec<T>) {
        self.dispatch(SliceAction::Set(items));
    }

    /// Appends one item.
    pub fn add(&self, item: T) {
        self.dispatch(SliceAction::Add(item));
    }

    /// Removes every item with the given identifier.
    pub fn remove(&self, id: impl Into<String>) {
        self.dispatch(SliceAction::Remove { id: id.into() });
    }

    /// Sets the loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.dispatch(SliceAction::SetLoading(loading));
    }

    /// Sets the error message.
    pub fn set_error(&self, error: impl Into<String>) {
        self.dispatch(SliceAction::SetError(Some(error.into())));
    }

    /// Clears the error message.
    pub fn clear_error(&self) {
        self.dispatch(SliceAction::SetError(None));
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> Slice<T> {
        self.sender.borrow().clone()
    }

    /// Subscribes to changes.
    pub fn subscribe(&self) -> watch::Receiver<Slice<T>> {
        self.sender.subscribe()
    }

    /// Runs a fetch against this slice.
    ///
    /// The slice goes `loading`, then either receives the items or records
    /// the failure message in `error`, and finally returns to idle. The
    /// failure is captured, not returned.
    pub async fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        self.clear_error();
        self.set_loading(true);

        match fetch.await {
            Ok(items) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    slice = self.name,
                    count = items.len(),
                    "Slice loaded"
                );
                self.set(items);
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    slice = self.name,
                    error = %err,
                    "Slice load failed"
                );
                self.set_error(err.message_or_kind());
            }
        }

        self.set_loading(false);
    }
}
