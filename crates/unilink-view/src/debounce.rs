//! Trailing-edge debouncing.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs an action once input has been quiet for a fixed delay.
///
/// Every [`call`](Self::call) invalidates the previously scheduled action,
/// so a burst of calls produces exactly one run, timed from the last call.
/// Dropping the debouncer cancels any pending action.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `action`, replacing whatever was pending.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Returns true while an action is scheduled but has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancels the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicU32>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let runs = Arc::new(AtomicU32::new(0));
        let make = {
            let runs = runs.clone();
            move || {
                let runs = runs.clone();
                Box::new(move || {
                    runs.fetch_add(1, Ordering::SeqCst);
                }) as Box<dyn FnOnce() + Send>
            }
        };
        (runs, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_once_after_last_call() {
        let (runs, action) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        for _ in 0..5 {
            debouncer.call(action());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        // 100 ms have passed since the last call.
        tokio::time::sleep(Duration::from_millis(399)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_action() {
        let (runs, action) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.call(action());
        drop(debouncer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
