//! The clock widget: lifecycle controller and renderer.
//!
//! [`TimeWidget`] composes three steps on every tick: read the clock, format
//! the reading, mutate the target element. The widget owns its configuration
//! snapshot, its clock, and the handles that make up its render state; the
//! element tree and the scheduler belong to the host and are borrowed per
//! call.

use std::time::Duration;

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, Options, Target};
use crate::dom::Dom;
use crate::error::Error;
use crate::format::TimeRecord;
use crate::interval::{self, IntervalSpec};
use crate::timer::{TimerId, Timers};

/// The five data-bearing elements of element-mode rendering.
///
/// Created once when rendering starts and reused on every subsequent tick:
/// only text content changes, so element identity (and anything the host
/// attached to the nodes) survives between ticks. Separator elements are not
/// retained.
#[derive(Debug, Clone, Copy)]
struct UnitElements<E> {
    hours: E,
    minutes: E,
    seconds: E,
    milliseconds: E,
    ampm: E,
}

/// A clock widget bound to one target element.
///
/// The widget renders in one of two mutually exclusive modes, selected by the
/// `wrap_each` option:
///
/// - **String mode** replaces the target's entire text content with
///   `"HH:MM:SS"` (plus optional milliseconds and AM/PM suffix) on every
///   tick.
/// - **Element mode** builds one child element per time unit on the first
///   render and only updates their text afterwards.
///
/// # Examples
///
/// String mode against the in-memory tree, with a pinned clock:
///
/// ```rust
/// use domclock::clock::FixedClock;
/// use domclock::config::{Options, Target};
/// use domclock::dom::{Dom, MemoryDom};
/// use domclock::timer::ManualTimers;
/// use domclock::widget::TimeWidget;
/// use std::time::Duration;
///
/// let mut dom = MemoryDom::new();
/// let face = dom.create_element("div");
/// let mut timers = ManualTimers::new();
///
/// let mut widget = TimeWidget::with_clock(
///     &dom,
///     Target::element(face),
///     Options::default(),
///     FixedClock::at(9, 5, 3, 7),
/// );
/// widget.run(&mut dom, &mut timers, None).unwrap();
/// assert_eq!(dom.text_content(face), "09:05:03");
///
/// // The host pumps the scheduler and routes firings back to the widget.
/// for fired in timers.advance(Duration::from_secs(3)) {
///     widget.on_timer(&mut dom, fired);
/// }
///
/// widget.stop(&mut timers);
/// assert!(!widget.is_running());
/// ```
#[derive(Debug, Clone)]
pub struct TimeWidget<E, C = SystemClock> {
    config: Config<E>,
    clock: C,
    units: Option<UnitElements<E>>,
    timer: Option<TimerId>,
}

impl<E: Copy + Eq + std::fmt::Debug> TimeWidget<E, SystemClock> {
    /// Creates a widget reading the system clock.
    ///
    /// The target may resolve to nothing; the widget then idles until
    /// reconfigured, and [`run`](TimeWidget::run) fails with
    /// [`Error::InvalidTarget`].
    pub fn new<D: Dom<Element = E>>(dom: &D, target: Target<E>, options: Options) -> Self {
        Self::with_clock(dom, target, options, SystemClock)
    }
}

impl<E: Copy + Eq + std::fmt::Debug, C: Clock> TimeWidget<E, C> {
    /// Creates a widget with an explicit clock source.
    pub fn with_clock<D: Dom<Element = E>>(
        dom: &D,
        target: Target<E>,
        options: Options,
        clock: C,
    ) -> Self {
        Self {
            config: Config::resolve(dom, target, options),
            clock,
            units: None,
            timer: None,
        }
    }

    /// The current configuration snapshot.
    pub fn snapshot(&self) -> &Config<E> {
        &self.config
    }

    /// Whether a timer registration is live.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The active timer handle, if running.
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer
    }

    /// Formats the current clock reading under the active configuration.
    ///
    /// Pure with respect to the widget: no element tree or timer state is
    /// touched, and repeated calls are independent.
    pub fn get_time(&self) -> TimeRecord {
        TimeRecord::format(
            self.clock.now(),
            self.config.time_format,
            self.config.show_ampm,
        )
    }

    /// Replaces the configuration snapshot.
    ///
    /// Render state and any live timer are left untouched: a running widget
    /// keeps ticking against its existing child elements (and its existing
    /// render mode) until the next [`run`](TimeWidget::run) rebuilds them.
    pub fn config<D: Dom<Element = E>>(&mut self, dom: &D, target: Target<E>, options: Options) {
        self.config = Config::resolve(dom, target, options);
        debug!("clock reconfigured, interval base {}ms", self.config.interval);
    }

    /// Starts (or restarts) the clock.
    ///
    /// Resolves the effective interval from `interval` (a raw millisecond
    /// count or a symbolic unit token; `None` keeps the configured base),
    /// validates the target, renders once immediately, and registers a
    /// repeating timer. A previous registration is always cancelled first,
    /// so at most one timer is live per widget.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTarget`] when no target element is resolved, and
    /// [`Error::UnknownIntervalUnit`] for an unrecognized unit token under
    /// [`UnitPolicy::Strict`](crate::interval::UnitPolicy::Strict). In both
    /// cases no timer is registered and no previous timer is cancelled.
    pub fn run<D, T>(
        &mut self,
        dom: &mut D,
        timers: &mut T,
        interval: Option<IntervalSpec>,
    ) -> Result<(), Error>
    where
        D: Dom<Element = E>,
        T: Timers,
    {
        let interval_ms =
            interval::resolve(interval, self.config.interval, self.config.unit_policy)?;
        let target = self.config.element.ok_or(Error::InvalidTarget)?;

        if let Some(previous) = self.timer.take() {
            timers.clear_interval(previous);
        }

        dom.clear_children(target);
        self.units = None;
        if self.config.wrap_each {
            self.mount_units(dom, target);
        } else {
            self.render_string(dom, target);
        }

        self.timer = Some(timers.set_interval(Duration::from_millis(interval_ms)));
        debug!(
            "clock started: interval {interval_ms}ms, wrap_each={}",
            self.config.wrap_each
        );
        Ok(())
    }

    /// Stops the clock and discards element-mode render state.
    ///
    /// A no-op when idle. Once this returns, no further renders happen for
    /// the cancelled registration.
    pub fn stop<T: Timers>(&mut self, timers: &mut T) {
        if let Some(id) = self.timer.take() {
            timers.clear_interval(id);
            self.units = None;
            debug!("clock stopped");
        }
    }

    /// Host dispatch point for timer firings.
    ///
    /// Renders one tick when `fired` matches this widget's live registration
    /// and returns whether it did. Firings for other registrations (or for a
    /// registration this widget already cancelled) are ignored, so hosts may
    /// fan every firing out to every widget.
    pub fn on_timer<D: Dom<Element = E>>(&mut self, dom: &mut D, fired: TimerId) -> bool {
        if self.timer != Some(fired) {
            return false;
        }
        self.render(dom);
        true
    }

    // One render step. The mode was fixed when rendering started: unit
    // handles exist exactly when the widget mounted in element mode, so a
    // reconfiguration mid-run does not switch modes until the next run().
    fn render<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let Some(target) = self.config.element else {
            return;
        };
        if let Some(units) = self.units {
            self.update_units(dom, units);
        } else {
            self.render_string(dom, target);
        }
    }

    fn render_string<D: Dom<Element = E>>(&self, dom: &mut D, target: E) {
        let time = self.get_time();
        dom.set_text(target, &time.display(self.config.show_milliseconds));
    }

    // First element-mode render: builds hours ':' minutes ':' seconds, then
    // optionally '.' milliseconds and the AM/PM marker. All five unit
    // elements are created and retained even when not appended, so a later
    // tick can address them uniformly.
    fn mount_units<D: Dom<Element = E>>(&mut self, dom: &mut D, target: E) {
        let time = self.get_time();
        let hours = self.create_unit(dom, &time.hours, Some("hours"));
        let minutes = self.create_unit(dom, &time.minutes, Some("minutes"));
        let seconds = self.create_unit(dom, &time.seconds, Some("seconds"));
        let milliseconds = self.create_unit(dom, &time.milliseconds, Some("milliseconds"));
        let ampm = self.create_unit(dom, &time.abbreviation, Some("ampm"));

        dom.append_child(target, hours);
        let colon = self.create_unit(dom, ":", None);
        dom.append_child(target, colon);
        dom.append_child(target, minutes);
        let colon = self.create_unit(dom, ":", None);
        dom.append_child(target, colon);
        dom.append_child(target, seconds);

        if self.config.show_milliseconds {
            let dot = self.create_unit(dom, ".", None);
            dom.append_child(target, dot);
            dom.append_child(target, milliseconds);
        }
        if self.config.show_ampm {
            dom.append_child(target, ampm);
        }

        self.units = Some(UnitElements {
            hours,
            minutes,
            seconds,
            milliseconds,
            ampm,
        });
    }

    fn update_units<D: Dom<Element = E>>(&self, dom: &mut D, units: UnitElements<E>) {
        let time = self.get_time();
        dom.set_text(units.hours, &time.hours);
        dom.set_text(units.minutes, &time.minutes);
        dom.set_text(units.seconds, &time.seconds);
        if self.config.show_milliseconds {
            dom.set_text(units.milliseconds, &time.milliseconds);
        }
        if self.config.show_ampm {
            dom.set_text(units.ampm, &time.abbreviation);
        }
    }

    // Data-bearing elements get `prefix + base + suffix` as their class when
    // either affix is configured; separators never get one.
    fn create_unit<D: Dom<Element = E>>(&self, dom: &mut D, text: &str, base: Option<&str>) -> E {
        let element = dom.create_element("span");
        if let Some(base) = base {
            if self.config.class_prefix.is_some() || self.config.class_suffix.is_some() {
                let prefix = self.config.class_prefix.as_deref().unwrap_or("");
                let suffix = self.config.class_suffix.as_deref().unwrap_or("");
                dom.set_class(element, &format!("{prefix}{base}{suffix}"));
            }
        }
        dom.set_text(element, text);
        element
    }
}
