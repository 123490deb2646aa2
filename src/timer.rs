//! Repeating-timer abstraction.
//!
//! The widget never owns a real timer; it registers an interval with whatever
//! scheduler the host provides and remembers the returned handle. Hosts
//! bridge [`Timers`] to their event loop. [`ManualTimers`] is a deterministic
//! scheduler driven by explicit time advances, used by the test suite and by
//! hosts that pump their own loop.

use std::time::Duration;

/// Handle to one repeating-timer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a raw registration number. Host scheduler implementations use
    /// this to mint handles.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw registration number.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Repeating-timer capability consumed by the widget.
///
/// Cancellation is synchronous: once `clear_interval` returns, the handle
/// never fires again.
pub trait Timers {
    /// Registers a repeating interval and returns its handle.
    fn set_interval(&mut self, interval: Duration) -> TimerId;

    /// Cancels a registration. Cancelling an unknown or already-cancelled
    /// handle is a no-op.
    fn clear_interval(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Registration {
    id: TimerId,
    interval: Duration,
    // Time accumulated toward the next firing; always below `interval`
    // between advances.
    elapsed: Duration,
}

/// Deterministic scheduler driven by explicit [`advance`](ManualTimers::advance) calls.
///
/// # Examples
///
/// ```rust
/// use domclock::timer::{ManualTimers, Timers};
/// use std::time::Duration;
///
/// let mut timers = ManualTimers::new();
/// let id = timers.set_interval(Duration::from_millis(250));
///
/// // One second holds four 250ms firings.
/// assert_eq!(timers.advance(Duration::from_secs(1)), vec![id; 4]);
///
/// timers.clear_interval(id);
/// assert!(timers.advance(Duration::from_secs(10)).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    next_raw: u64,
    active: Vec<Registration>,
}

impl ManualTimers {
    /// Creates a scheduler with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live registrations.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Advances simulated time by `dt` and returns every firing that falls
    /// inside the window, in chronological order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        let mut fired: Vec<(Duration, TimerId)> = Vec::new();
        for registration in &mut self.active {
            let before = registration.elapsed;
            registration.elapsed += dt;
            let mut count = 1u32;
            while registration.elapsed >= registration.interval {
                registration.elapsed -= registration.interval;
                fired.push((registration.interval * count - before, registration.id));
                count += 1;
            }
        }
        fired.sort_by_key(|(offset, id)| (*offset, id.raw()));
        fired.into_iter().map(|(_, id)| id).collect()
    }
}

impl Timers for ManualTimers {
    fn set_interval(&mut self, interval: Duration) -> TimerId {
        self.next_raw += 1;
        let id = TimerId(self.next_raw);
        self.active.push(Registration {
            id,
            // A zero interval would fire unboundedly within any window.
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.active.retain(|registration| registration.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut timers = ManualTimers::new();
        let a = timers.set_interval(Duration::from_secs(1));
        let b = timers.set_interval(Duration::from_secs(1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_no_firing_before_interval_elapses() {
        let mut timers = ManualTimers::new();
        let id = timers.set_interval(Duration::from_secs(1));

        assert!(timers.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(timers.advance(Duration::from_millis(1)), vec![id]);
    }

    #[test]
    fn test_multiple_firings_in_one_window() {
        let mut timers = ManualTimers::new();
        let id = timers.set_interval(Duration::from_millis(100));

        assert_eq!(timers.advance(Duration::from_millis(350)), vec![id; 3]);
        // The leftover 50ms carries into the next window.
        assert_eq!(timers.advance(Duration::from_millis(50)), vec![id]);
    }

    #[test]
    fn test_chronological_order_across_registrations() {
        let mut timers = ManualTimers::new();
        let slow = timers.set_interval(Duration::from_millis(300));
        let fast = timers.set_interval(Duration::from_millis(200));

        // 600ms window: fast at 200/400/600, slow at 300/600. Ties break on
        // registration id.
        assert_eq!(
            timers.advance(Duration::from_millis(600)),
            vec![fast, slow, fast, slow, fast]
        );
    }

    #[test]
    fn test_cancellation_is_synchronous() {
        let mut timers = ManualTimers::new();
        let id = timers.set_interval(Duration::from_millis(10));
        assert_eq!(timers.active_count(), 1);

        timers.clear_interval(id);
        assert_eq!(timers.active_count(), 0);
        assert!(timers.advance(Duration::from_secs(60)).is_empty());

        // Double-cancel is a no-op.
        timers.clear_interval(id);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timers = ManualTimers::new();
        let id = timers.set_interval(Duration::ZERO);
        assert_eq!(timers.advance(Duration::from_millis(3)), vec![id; 3]);
    }
}
