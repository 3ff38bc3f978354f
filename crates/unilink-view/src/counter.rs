//! Animated stat counters.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::TRACING_TARGET_COUNTER;

/// Interval between animation frames, roughly 60 per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// One number on the stats section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatItem {
    /// Caption shown under the number.
    pub label: String,
    /// Final value.
    pub target: f64,
    /// Time to reach the final value.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Text appended to the number, e.g. `+` or `%`.
    pub suffix: String,
}

impl StatItem {
    /// Creates a whole-number stat animated over the default duration.
    pub fn new(label: impl Into<String>, target: f64) -> Self {
        Self {
            label: label.into(),
            target,
            duration: DEFAULT_DURATION,
            decimals: 0,
            suffix: String::new(),
        }
    }

    /// Sets the animation duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the number of decimals shown.
    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Formats a value the way this stat displays it.
    pub fn format(&self, value: f64) -> String {
        format!("{value:.prec$}{}", self.suffix, prec = self.decimals)
    }

    /// Starts animating this stat.
    pub fn animate(&self) -> Counter {
        Counter::start(self.clone())
    }

    /// Value shown `elapsed` into the animation.
    fn value_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.target * progress
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }
}

/// A running counter animation.
///
/// Each instance owns its task. Dropping the counter aborts the task, after
/// which the value never changes again.
#[derive(Debug)]
pub struct Counter {
    item: StatItem,
    value: watch::Receiver<f64>,
    task: JoinHandle<()>,
}

impl Counter {
    /// Spawns the frame loop for `item`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(item: StatItem) -> Self {
        let (sender, value) = watch::channel(0.0);
        let task = tokio::spawn(run_frames(item.clone(), sender));
        Self { item, value, task }
    }

    /// Returns the stat being animated.
    pub fn item(&self) -> &StatItem {
        &self.item
    }

    /// Returns the current value.
    pub fn value(&self) -> f64 {
        *self.value.borrow()
    }

    /// Returns the current value formatted for display.
    pub fn display(&self) -> String {
        self.item.format(self.value())
    }

    /// Subscribes to value changes.
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.value.clone()
    }

    /// Returns true once the target has been reached.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits until the animation reaches its target.
    pub async fn finished(&self) {
        let mut value = self.value.clone();
        // The sender is dropped once the final frame has been published.
        while value.changed().await.is_ok() {}
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display(), self.item.label)
    }
}

impl Drop for Counter {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_frames(item: StatItem, sender: watch::Sender<f64>) {
    let started = Instant::now();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        frames.tick().await;
        let elapsed = started.elapsed();
        let value = item.value_at(elapsed);
        sender.send_if_modified(|current| {
            // Never step backwards, even if a frame computes a smaller value.
            if value > *current {
                *current = value;
                true
            } else {
                false
            }
        });

        if elapsed >= item.duration {
            break;
        }
    }

    tracing::trace!(
        target: TRACING_TARGET_COUNTER,
        label = %item.label,
        target_value = item.target,
        "Counter finished"
    );
}

/// The landing page stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSection {
    /// Stats in display order.
    pub items: Vec<StatItem>,
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            items: vec![
                StatItem::new("Active Students", 10_000.0).with_suffix("+"),
                StatItem::new("Internships Posted", 2_500.0).with_suffix("+"),
                StatItem::new("Partner Companies", 500.0).with_suffix("+"),
                StatItem::new("Placement Rate", 94.5)
                    .with_decimals(1)
                    .with_suffix("%"),
            ],
        }
    }
}

impl StatsSection {
    /// Starts one independent counter per stat.
    pub fn animate(&self) -> Vec<Counter> {
        self.items.iter().map(StatItem::animate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> StatItem {
        StatItem::new("Students", 1_000.0).with_duration(Duration::from_millis(500))
    }

    #[test]
    fn test_format_uses_decimals_and_suffix() {
        let item = StatItem::new("Rate", 94.5).with_decimals(1).with_suffix("%");
        assert_eq!(item.format(94.5), "94.5%");
        assert_eq!(item.format(0.0), "0.0%");

        let item = StatItem::new("Students", 10_000.0).with_suffix("+");
        assert_eq!(item.format(10_000.0), "10000+");
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_starts_at_zero_and_ends_on_target() {
        let counter = item().animate();
        assert_eq!(counter.value(), 0.0);

        counter.finished().await;
        assert_eq!(counter.value(), 1_000.0);
        assert_eq!(counter.display(), "1000");
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_is_monotonic() {
        let counter = item().animate();
        let mut rx = counter.subscribe();
        let mut last = 0.0;

        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 1_000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_target_reached_at_duration() {
        let counter = item().animate();
        tokio::time::sleep(Duration::from_millis(500) + FRAME_INTERVAL).await;
        assert_eq!(counter.value(), 1_000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_update_after_drop() {
        let counter = item().animate();
        let rx = counter.subscribe();

        tokio::time::sleep(Duration::from_millis(100)).await;
        let before = *rx.borrow();
        assert!(before < 1_000.0);

        drop(counter);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(*rx.borrow(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_section_counters_are_independent() {
        let section = StatsSection::default();
        let counters = section.animate();
        assert_eq!(counters.len(), section.items.len());

        for counter in &counters {
            counter.finished().await;
        }
        assert_eq!(counters[3].display(), "94.5%");
        assert_eq!(counters[0].to_string(), "10000+ Active Students");
    }
}
