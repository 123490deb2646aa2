//! Interval resolution.
//!
//! `run()` accepts either a raw number of milliseconds or one of a small set
//! of symbolic unit tokens. Units derive the effective interval from the
//! widget's configured base interval rather than naming absolute durations:
//! with the default 1000 ms base, `"min"` ticks once a minute while `"ms"`
//! ticks every 10 ms.

use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;

use crate::error::Error;

/// Recognized symbolic interval tokens, shared by all widget instances.
pub const UNIT_TOKENS: &[&str] = &[
    "ms",
    "millisecond",
    "sec",
    "second",
    "min",
    "minute",
    "h",
    "hour",
];

static UNIT_TABLE: Lazy<HashMap<&'static str, IntervalUnit>> = Lazy::new(|| {
    HashMap::from([
        ("ms", IntervalUnit::Milliseconds),
        ("millisecond", IntervalUnit::Milliseconds),
        ("sec", IntervalUnit::Seconds),
        ("second", IntervalUnit::Seconds),
        ("min", IntervalUnit::Minutes),
        ("minute", IntervalUnit::Minutes),
        ("h", IntervalUnit::Hours),
        ("hour", IntervalUnit::Hours),
    ])
});

/// Symbolic interval unit, scaling the configured base interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    /// Base interval divided by 100.
    Milliseconds,
    /// Base interval unchanged.
    Seconds,
    /// Base interval times 60.
    Minutes,
    /// Base interval times 3600.
    Hours,
}

impl IntervalUnit {
    /// Looks a token up in the shared table, `None` for unrecognized input.
    pub fn parse(token: &str) -> Option<Self> {
        UNIT_TABLE.get(token).copied()
    }

    /// Derives the effective interval in milliseconds from `base_ms`.
    ///
    /// The result never drops to zero; a base below 100 ms still yields a
    /// 1 ms interval for the `Milliseconds` unit.
    pub fn apply(self, base_ms: u64) -> u64 {
        match self {
            IntervalUnit::Milliseconds => (base_ms / 100).max(1),
            IntervalUnit::Seconds => base_ms,
            IntervalUnit::Minutes => base_ms * 60,
            IntervalUnit::Hours => base_ms * 3600,
        }
    }
}

/// What `run()` does with an unrecognized unit token.
///
/// The behavior is an explicit configuration contract rather than a single
/// normative rule; pick the variant your host expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitPolicy {
    /// Fail the `run()` call with [`Error::UnknownIntervalUnit`].
    #[default]
    Strict,
    /// Log a warning and keep the configured numeric base interval.
    Fallback,
}

/// Interval argument accepted by `run()`.
///
/// # Examples
///
/// ```rust
/// use domclock::interval::IntervalSpec;
///
/// let raw: IntervalSpec = 250u64.into();
/// assert_eq!(raw, IntervalSpec::Millis(250));
///
/// let unit: IntervalSpec = "min".into();
/// assert_eq!(unit, IntervalSpec::Unit("min".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalSpec {
    /// A raw interval in milliseconds.
    Millis(u64),
    /// A symbolic token from [`UNIT_TOKENS`], resolved against the base
    /// interval when `run()` executes.
    Unit(String),
}

impl From<u64> for IntervalSpec {
    fn from(ms: u64) -> Self {
        IntervalSpec::Millis(ms)
    }
}

impl From<&str> for IntervalSpec {
    fn from(token: &str) -> Self {
        IntervalSpec::Unit(token.to_string())
    }
}

impl From<IntervalUnit> for IntervalSpec {
    fn from(unit: IntervalUnit) -> Self {
        let token = match unit {
            IntervalUnit::Milliseconds => "ms",
            IntervalUnit::Seconds => "sec",
            IntervalUnit::Minutes => "min",
            IntervalUnit::Hours => "h",
        };
        IntervalSpec::Unit(token.to_string())
    }
}

/// Resolves the effective interval for one `run()` call.
///
/// `None` keeps the configured base. A raw zero is coerced back to the base
/// to preserve the positive-interval invariant. Unknown tokens follow
/// `policy`.
pub(crate) fn resolve(
    spec: Option<IntervalSpec>,
    base_ms: u64,
    policy: UnitPolicy,
) -> Result<u64, Error> {
    match spec {
        None => Ok(base_ms),
        Some(IntervalSpec::Millis(0)) => {
            warn!("ignoring zero interval, keeping {base_ms}ms");
            Ok(base_ms)
        }
        Some(IntervalSpec::Millis(ms)) => Ok(ms),
        Some(IntervalSpec::Unit(token)) => match IntervalUnit::parse(&token) {
            Some(unit) => Ok(unit.apply(base_ms)),
            None => match policy {
                UnitPolicy::Strict => Err(Error::UnknownIntervalUnit(token)),
                UnitPolicy::Fallback => {
                    warn!("unknown interval unit `{token}`, keeping {base_ms}ms");
                    Ok(base_ms)
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_parses() {
        for token in UNIT_TOKENS {
            assert!(
                IntervalUnit::parse(token).is_some(),
                "token `{token}` should parse"
            );
        }
        assert_eq!(IntervalUnit::parse("day"), None);
        assert_eq!(IntervalUnit::parse(""), None);
        assert_eq!(IntervalUnit::parse("MS"), None); // tokens are case-sensitive
    }

    #[test]
    fn test_alias_tokens_agree() {
        assert_eq!(
            IntervalUnit::parse("ms"),
            IntervalUnit::parse("millisecond")
        );
        assert_eq!(IntervalUnit::parse("sec"), IntervalUnit::parse("second"));
        assert_eq!(IntervalUnit::parse("min"), IntervalUnit::parse("minute"));
        assert_eq!(IntervalUnit::parse("h"), IntervalUnit::parse("hour"));
    }

    #[test]
    fn test_derivation_table() {
        assert_eq!(IntervalUnit::Milliseconds.apply(1000), 10);
        assert_eq!(IntervalUnit::Seconds.apply(1000), 1000);
        assert_eq!(IntervalUnit::Minutes.apply(1000), 60_000);
        assert_eq!(IntervalUnit::Hours.apply(1000), 3_600_000);
    }

    #[test]
    fn test_millisecond_unit_stays_positive() {
        assert_eq!(IntervalUnit::Milliseconds.apply(50), 1);
        assert_eq!(IntervalUnit::Milliseconds.apply(99), 1);
        assert_eq!(IntervalUnit::Milliseconds.apply(100), 1);
        assert_eq!(IntervalUnit::Milliseconds.apply(200), 2);
    }

    #[test]
    fn test_resolve_defaults_and_raw_values() {
        assert_eq!(resolve(None, 1000, UnitPolicy::Strict), Ok(1000));
        assert_eq!(
            resolve(Some(IntervalSpec::Millis(250)), 1000, UnitPolicy::Strict),
            Ok(250)
        );
        // Zero keeps the base interval instead of producing a busy loop.
        assert_eq!(
            resolve(Some(IntervalSpec::Millis(0)), 1000, UnitPolicy::Strict),
            Ok(1000)
        );
    }

    #[test]
    fn test_resolve_unknown_token_strict() {
        let result = resolve(
            Some(IntervalSpec::Unit("fortnight".to_string())),
            1000,
            UnitPolicy::Strict,
        );
        assert_eq!(
            result,
            Err(Error::UnknownIntervalUnit("fortnight".to_string()))
        );
    }

    #[test]
    fn test_resolve_unknown_token_fallback() {
        let result = resolve(
            Some(IntervalSpec::Unit("fortnight".to_string())),
            500,
            UnitPolicy::Fallback,
        );
        assert_eq!(result, Ok(500));
    }

    #[test]
    fn test_resolve_known_tokens_ignore_policy() {
        for policy in [UnitPolicy::Strict, UnitPolicy::Fallback] {
            assert_eq!(
                resolve(Some(IntervalSpec::Unit("min".to_string())), 1000, policy),
                Ok(60_000)
            );
        }
    }

    #[test]
    fn test_spec_conversions() {
        assert_eq!(IntervalSpec::from(42u64), IntervalSpec::Millis(42));
        assert_eq!(
            IntervalSpec::from(IntervalUnit::Hours),
            IntervalSpec::Unit("h".to_string())
        );
    }
}
