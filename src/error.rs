//! Error types surfaced by widget operations.

use thiserror::Error;

/// Failures a [`TimeWidget`](crate::widget::TimeWidget) can report to its caller.
///
/// Everything else the widget accepts is coerced rather than rejected: missing
/// options fall back to defaults and malformed class names are sanitized, so
/// this taxonomy stays intentionally small.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `run()` was called while no target element is resolved.
    ///
    /// This happens when the widget was constructed without a target, or when
    /// its selector matched nothing. The call fails before any timer is
    /// registered.
    #[error("invalid target: no element resolved for this widget")]
    InvalidTarget,

    /// A symbolic interval token outside the recognized set was passed to
    /// `run()` while the widget is configured with
    /// [`UnitPolicy::Strict`](crate::interval::UnitPolicy::Strict).
    #[error("unknown interval unit `{0}`; use \"ms\", \"sec\", \"min\" or \"h\"")]
    UnknownIntervalUnit(String),
}
