//! Time formatting.
//!
//! Turns a raw [`WallTime`] reading into the zero-padded strings the renderer
//! displays. Formatting is a pure function of the reading and the two flags
//! that affect it; nothing here touches the element tree.

use crate::clock::WallTime;
use crate::config::TimeFormat;

/// One formatted clock reading.
///
/// Every field is already padded for display. A fresh record is produced on
/// every tick; records are never mutated in place.
///
/// # Examples
///
/// ```rust
/// use domclock::clock::{Clock, FixedClock};
/// use domclock::config::TimeFormat;
/// use domclock::format::TimeRecord;
///
/// let reading = FixedClock::at(13, 5, 3, 7).now();
/// let record = TimeRecord::format(reading, TimeFormat::TwelveHour, true);
/// assert_eq!(record.hours, "01");
/// assert_eq!(record.abbreviation, "PM");
/// assert_eq!(record.display(true), "01:05:03.007 PM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRecord {
    /// Hour of day, two digits, already converted for 12-hour mode.
    pub hours: String,
    /// Minute of hour, two digits.
    pub minutes: String,
    /// Second of minute, two digits.
    pub seconds: String,
    /// Millisecond of second; values below 100 carry a leading zero.
    pub milliseconds: String,
    /// `"AM"`, `"PM"`, or empty when the abbreviation is disabled or the
    /// widget runs in 24-hour mode.
    pub abbreviation: String,
}

impl TimeRecord {
    /// Formats a wall-clock reading.
    ///
    /// In 12-hour mode the hour wraps via `h % 12` with 0 mapped to 12, and
    /// the AM/PM abbreviation is computed only when `show_ampm` is set
    /// (hour-of-day 12 and above is "PM", everything below is "AM").
    pub fn format(time: WallTime, format: TimeFormat, show_ampm: bool) -> Self {
        let mut hour = time.hour;
        let mut abbreviation = String::new();

        if format == TimeFormat::TwelveHour {
            if show_ampm {
                abbreviation = if hour >= 12 { "PM" } else { "AM" }.to_string();
            }
            hour = match hour % 12 {
                0 => 12,
                wrapped => wrapped,
            };
        }

        Self {
            hours: pad_two(hour),
            minutes: pad_two(time.minute),
            seconds: pad_two(time.second),
            milliseconds: pad_milliseconds(time.millisecond),
            abbreviation,
        }
    }

    /// Builds the single-string rendition used by string-mode rendering:
    /// `"HH:MM:SS"`, extended with `".mmm"` when `show_milliseconds` is set
    /// and suffixed with `" AM"`/`" PM"` when the abbreviation is present.
    pub fn display(&self, show_milliseconds: bool) -> String {
        let mut out = format!("{}:{}:{}", self.hours, self.minutes, self.seconds);
        if show_milliseconds {
            out.push('.');
            out.push_str(&self.milliseconds);
        }
        if !self.abbreviation.is_empty() {
            out.push(' ');
            out.push_str(&self.abbreviation);
        }
        out
    }
}

fn pad_two(value: u32) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

// Milliseconds pad below 100, not below 1000: values at or above 100 are
// displayed as-is. The boundary is deliberate and load-bearing for hosts
// styling fixed-width faces.
fn pad_milliseconds(value: u32) -> String {
    if value < 100 {
        format!("0{:02}", value)
    } else {
        value.to_string()
    }
}
