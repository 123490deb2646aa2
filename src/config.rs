//! Widget configuration.
//!
//! User-supplied [`Options`] are merged with defaults into a [`Config`]
//! snapshot when the widget is constructed or reconfigured. The snapshot is
//! immutable for the life of a tick: renders read it, nothing writes it, and
//! a reconfiguration replaces it wholesale.

use crate::dom::Dom;
use crate::interval::UnitPolicy;
use log::warn;

/// Default update interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Clock face format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// Hours 1–12 with optional AM/PM abbreviation.
    TwelveHour,
    /// Hours 0–23.
    #[default]
    TwentyFourHour,
}

/// Where the widget renders: a selector to resolve, a direct element handle,
/// or nothing.
///
/// A widget may legally carry no target; it idles until reconfigured with
/// one, and `run()` fails with
/// [`Error::InvalidTarget`](crate::error::Error::InvalidTarget) in the
/// meantime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Target<E> {
    /// No target; resolution yields no element.
    #[default]
    None,
    /// A selector resolved against the element tree. A selector that matches
    /// nothing resolves to no element rather than an error.
    Selector(String),
    /// A direct element handle, used as-is.
    Element(E),
}

impl<E> Target<E> {
    /// Targets a selector.
    pub fn selector(selector: impl Into<String>) -> Self {
        Target::Selector(selector.into())
    }

    /// Targets an element handle directly.
    pub fn element(element: E) -> Self {
        Target::Element(element)
    }
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

/// User-supplied options bag.
///
/// Unset fields fall back to defaults at resolve time. Fields are public and
/// the builder methods are sugar over them; use whichever reads better.
///
/// # Examples
///
/// ```rust
/// use domclock::config::{Options, TimeFormat};
///
/// let options = Options::new()
///     .time_format(TimeFormat::TwelveHour)
///     .show_milliseconds(true)
///     .add_prefix("clock-");
/// assert_eq!(options.interval, None); // resolves to 1000ms
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Base update interval in milliseconds. Defaults to
    /// [`DEFAULT_INTERVAL_MS`]; zero is rejected back to the default.
    pub interval: Option<u64>,
    /// Clock face format. Defaults to 24-hour.
    pub time_format: Option<TimeFormat>,
    /// Show the AM/PM abbreviation in 12-hour mode. Defaults to off.
    pub show_ampm: Option<bool>,
    /// Newer alias for [`show_ampm`](Options::show_ampm); wins when both are
    /// supplied. Resolved once into a single flag, not re-checked per render.
    pub show_abbreviation: Option<bool>,
    /// Show milliseconds. Defaults to off.
    pub show_milliseconds: Option<bool>,
    /// Render each time unit into its own child element. Defaults to off.
    pub wrap_each: Option<bool>,
    /// Class-name prefix for per-unit elements. Sanitized to
    /// `[-_a-zA-Z0-9]`; an empty result disables it.
    pub add_prefix: Option<String>,
    /// Class-name suffix for per-unit elements, sanitized like the prefix.
    pub add_suffix: Option<String>,
    /// Unknown-interval-unit handling. Defaults to
    /// [`UnitPolicy::Strict`].
    pub unit_policy: Option<UnitPolicy>,
}

impl Options {
    /// An empty bag; everything resolves to defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base update interval in milliseconds.
    pub fn interval(mut self, ms: u64) -> Self {
        self.interval = Some(ms);
        self
    }

    /// Sets the clock face format.
    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = Some(format);
        self
    }

    /// Enables or disables the AM/PM abbreviation.
    pub fn show_ampm(mut self, show: bool) -> Self {
        self.show_ampm = Some(show);
        self
    }

    /// Sets the newer abbreviation alias, which wins over
    /// [`show_ampm`](Options::show_ampm).
    pub fn show_abbreviation(mut self, show: bool) -> Self {
        self.show_abbreviation = Some(show);
        self
    }

    /// Enables or disables millisecond display.
    pub fn show_milliseconds(mut self, show: bool) -> Self {
        self.show_milliseconds = Some(show);
        self
    }

    /// Enables or disables per-unit child elements.
    pub fn wrap_each(mut self, wrap: bool) -> Self {
        self.wrap_each = Some(wrap);
        self
    }

    /// Sets the class-name prefix for per-unit elements.
    pub fn add_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.add_prefix = Some(prefix.into());
        self
    }

    /// Sets the class-name suffix for per-unit elements.
    pub fn add_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.add_suffix = Some(suffix.into());
        self
    }

    /// Sets the unknown-interval-unit policy.
    pub fn unit_policy(mut self, policy: UnitPolicy) -> Self {
        self.unit_policy = Some(policy);
        self
    }
}

/// Strips every character outside `[-_a-zA-Z0-9]`.
///
/// # Examples
///
/// ```rust
/// use domclock::config::sanitize_class_name;
///
/// assert_eq!(sanitize_class_name("foo!"), "foo");
/// assert_eq!(sanitize_class_name("a b.c"), "abc");
/// assert_eq!(sanitize_class_name("-my_class2"), "-my_class2");
/// ```
pub fn sanitize_class_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Resolved configuration snapshot.
///
/// Produced by [`Config::resolve`]; lives unchanged until the next
/// reconfiguration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config<E> {
    pub(crate) element: Option<E>,
    pub(crate) time_format: TimeFormat,
    pub(crate) show_ampm: bool,
    pub(crate) show_milliseconds: bool,
    pub(crate) wrap_each: bool,
    pub(crate) class_prefix: Option<String>,
    pub(crate) class_suffix: Option<String>,
    pub(crate) interval: u64,
    pub(crate) unit_policy: UnitPolicy,
}

impl<E: Copy + Eq> Config<E> {
    /// Merges `options` with defaults and resolves `target` against the
    /// element tree. Resolution reads the tree but never mutates it.
    pub fn resolve<D: Dom<Element = E>>(dom: &D, target: Target<E>, options: Options) -> Self {
        let element = match target {
            Target::None => None,
            Target::Selector(selector) => dom.query_selector(&selector),
            Target::Element(element) => Some(element),
        };

        let interval = match options.interval {
            Some(0) => {
                warn!("interval must be positive, using {DEFAULT_INTERVAL_MS}ms");
                DEFAULT_INTERVAL_MS
            }
            Some(ms) => ms,
            None => DEFAULT_INTERVAL_MS,
        };

        Self {
            element,
            time_format: options.time_format.unwrap_or_default(),
            // The newer alias wins whenever it is supplied at all.
            show_ampm: options
                .show_abbreviation
                .or(options.show_ampm)
                .unwrap_or(false),
            show_milliseconds: options.show_milliseconds.unwrap_or(false),
            wrap_each: options.wrap_each.unwrap_or(false),
            class_prefix: resolve_class_name(options.add_prefix),
            class_suffix: resolve_class_name(options.add_suffix),
            interval,
            unit_policy: options.unit_policy.unwrap_or_default(),
        }
    }

    /// The resolved target element, if any.
    pub fn element(&self) -> Option<E> {
        self.element
    }

    /// The clock face format.
    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    /// Whether the AM/PM abbreviation is shown in 12-hour mode.
    pub fn show_ampm(&self) -> bool {
        self.show_ampm
    }

    /// Whether milliseconds are shown.
    pub fn show_milliseconds(&self) -> bool {
        self.show_milliseconds
    }

    /// Whether each unit renders into its own child element.
    pub fn wrap_each(&self) -> bool {
        self.wrap_each
    }

    /// The sanitized class-name prefix, if enabled.
    pub fn class_prefix(&self) -> Option<&str> {
        self.class_prefix.as_deref()
    }

    /// The sanitized class-name suffix, if enabled.
    pub fn class_suffix(&self) -> Option<&str> {
        self.class_suffix.as_deref()
    }

    /// The base update interval in milliseconds. Always positive.
    pub fn interval_ms(&self) -> u64 {
        self.interval
    }

    /// The unknown-interval-unit policy.
    pub fn unit_policy(&self) -> UnitPolicy {
        self.unit_policy
    }
}

// An affix that sanitizes to nothing is disabled, matching the absent case.
fn resolve_class_name(name: Option<String>) -> Option<String> {
    name.map(|n| sanitize_class_name(&n))
        .filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Dom, MemoryDom};

    #[test]
    fn test_defaults() {
        let dom = MemoryDom::new();
        let config = Config::resolve(&dom, Target::None, Options::default());

        assert_eq!(config.element(), None);
        assert_eq!(config.time_format(), TimeFormat::TwentyFourHour);
        assert!(!config.show_ampm());
        assert!(!config.show_milliseconds());
        assert!(!config.wrap_each());
        assert_eq!(config.class_prefix(), None);
        assert_eq!(config.class_suffix(), None);
        assert_eq!(config.interval_ms(), DEFAULT_INTERVAL_MS);
        assert_eq!(config.unit_policy(), UnitPolicy::Strict);
    }

    #[test]
    fn test_target_resolution() {
        let mut dom = MemoryDom::new();
        let el = dom.create_element("div");
        dom.set_class(el, "clock");

        let config = Config::resolve(&dom, Target::selector(".clock"), Options::default());
        assert_eq!(config.element(), Some(el));

        let config = Config::resolve(&dom, Target::element(el), Options::default());
        assert_eq!(config.element(), Some(el));

        // A selector miss resolves to no element rather than an error.
        let config = Config::resolve(&dom, Target::selector(".absent"), Options::default());
        assert_eq!(config.element(), None);
    }

    #[test]
    fn test_abbreviation_alias_wins() {
        let dom = MemoryDom::new();

        let config = Config::resolve(
            &dom,
            Target::<crate::dom::ElementId>::None,
            Options::new().show_ampm(true),
        );
        assert!(config.show_ampm());

        // The newer name overrides the older one in both directions.
        let config = Config::resolve(
            &dom,
            Target::<crate::dom::ElementId>::None,
            Options::new().show_ampm(true).show_abbreviation(false),
        );
        assert!(!config.show_ampm());

        let config = Config::resolve(
            &dom,
            Target::<crate::dom::ElementId>::None,
            Options::new().show_ampm(false).show_abbreviation(true),
        );
        assert!(config.show_ampm());
    }

    #[test]
    fn test_affix_sanitization() {
        let dom = MemoryDom::new();
        let config = Config::resolve(
            &dom,
            Target::<crate::dom::ElementId>::None,
            Options::new().add_prefix("foo!").add_suffix("--bar baz"),
        );
        assert_eq!(config.class_prefix(), Some("foo"));
        assert_eq!(config.class_suffix(), Some("--barbaz"));
    }

    #[test]
    fn test_affix_empty_after_sanitizing_is_disabled() {
        let dom = MemoryDom::new();
        let config = Config::resolve(
            &dom,
            Target::<crate::dom::ElementId>::None,
            Options::new().add_prefix("!?!").add_suffix(""),
        );
        assert_eq!(config.class_prefix(), None);
        assert_eq!(config.class_suffix(), None);
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let dom = MemoryDom::new();
        let config = Config::resolve(
            &dom,
            Target::<crate::dom::ElementId>::None,
            Options::new().interval(0),
        );
        assert_eq!(config.interval_ms(), DEFAULT_INTERVAL_MS);

        let config = Config::resolve(
            &dom,
            Target::<crate::dom::ElementId>::None,
            Options::new().interval(250),
        );
        assert_eq!(config.interval_ms(), 250);
    }
}
