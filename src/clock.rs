//! Wall-clock abstraction.
//!
//! The widget never reads the system time directly; it goes through the
//! [`Clock`] trait so tests and doc examples can pin the time with
//! [`FixedClock`] while real hosts use [`SystemClock`].

use chrono::{Local, Timelike};

/// A single wall-clock reading, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute of hour, `0..=59`.
    pub minute: u32,
    /// Second of minute, `0..=59`.
    pub second: u32,
    /// Millisecond of second, `0..=999`.
    pub millisecond: u32,
}

/// Source of wall-clock readings.
pub trait Clock {
    /// Returns the current local time of day.
    fn now(&self) -> WallTime;
}

/// Reads the host's local time via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            // Leap-second readings land at 1000..=1999; clamp into range.
            millisecond: now.timestamp_subsec_millis().min(999),
        }
    }
}

/// A clock pinned to one instant, for tests and documentation examples.
///
/// # Examples
///
/// ```rust
/// use domclock::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::at(9, 5, 3, 7);
/// assert_eq!(clock.now().hour, 9);
/// assert_eq!(clock.now().millisecond, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub WallTime);

impl FixedClock {
    /// Creates a clock frozen at the given time of day.
    pub fn at(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self(WallTime {
            hour,
            minute,
            second,
            millisecond,
        })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_in_range() {
        let reading = SystemClock.now();
        assert!(reading.hour < 24);
        assert!(reading.minute < 60);
        assert!(reading.second < 60);
        assert!(reading.millisecond < 1000);
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::at(23, 59, 59, 999);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(
            clock.now(),
            WallTime {
                hour: 23,
                minute: 59,
                second: 59,
                millisecond: 999,
            }
        );
    }
}
