#![warn(missing_docs)]

//! # domclock
//!
//! A configurable clock widget that renders and periodically refreshes
//! wall-clock time inside a DOM-like element tree.
//!
//! ## Overview
//!
//! The crate is built around one component, [`widget::TimeWidget`], which
//! composes three steps on every tick:
//!
//! 1. **Configuration resolution** — user options merge with defaults into an
//!    immutable snapshot ([`config`]).
//! 2. **Time formatting** — the current clock reading becomes a structured,
//!    zero-padded [`format::TimeRecord`].
//! 3. **Rendering** — the target element is updated in place, either as a
//!    single text string or as per-unit child elements ([`widget`]).
//!
//! The widget does not assume a browser, a terminal, or any concrete UI
//! stack. It consumes three capability seams the host provides:
//!
//! - [`dom::Dom`] — element lookup, creation, and mutation. The crate ships
//!   [`dom::MemoryDom`], an in-memory tree for tests and headless hosts.
//! - [`timer::Timers`] — a repeating-timer primitive. The crate ships
//!   [`timer::ManualTimers`], a deterministic scheduler pumped by the host.
//! - [`clock::Clock`] — wall-clock readings. [`clock::SystemClock`] reads the
//!   local time; [`clock::FixedClock`] pins it for tests.
//!
//! ## Quick start
//!
//! ```rust
//! use domclock::prelude::*;
//! use std::time::Duration;
//!
//! let mut dom = MemoryDom::new();
//! let face = dom.create_element("div");
//! dom.set_class(face, "clock");
//! let mut timers = ManualTimers::new();
//!
//! // Selector targets resolve like element handles do.
//! let mut widget = TimeWidget::new(&dom, Target::selector(".clock"), Options::new());
//! widget.run(&mut dom, &mut timers, None).unwrap();
//!
//! // The host owns the event loop: pump the scheduler and route firings.
//! for fired in timers.advance(Duration::from_secs(1)) {
//!     widget.on_timer(&mut dom, fired);
//! }
//!
//! widget.stop(&mut timers);
//! ```
//!
//! ## Element mode
//!
//! With `wrap_each` enabled the widget builds one child element per time
//! unit on the first render and afterwards only rewrites their text, so
//! element identity (and anything the host hung off those nodes) survives
//! between ticks:
//!
//! ```rust
//! use domclock::prelude::*;
//!
//! let mut dom = MemoryDom::new();
//! let face = dom.create_element("div");
//! let mut timers = ManualTimers::new();
//!
//! let options = Options::new().wrap_each(true).add_prefix("clock-");
//! let mut widget = TimeWidget::new(&dom, Target::element(face), options);
//! widget.run(&mut dom, &mut timers, None).unwrap();
//!
//! // hours ':' minutes ':' seconds — separators carry no class.
//! let hours = dom.children(face)[0];
//! assert_eq!(dom.class(hours), Some("clock-hours"));
//! ```
//!
//! ## Error handling and logging
//!
//! Operations that can fail return [`error::Error`]; everything else is
//! coerced to defaults rather than rejected. Lifecycle transitions log at
//! `debug` level and swallowed fallbacks at `warn` through the [`log`]
//! facade; the library installs no logger.
//!
//! A render that fires against a target the host has since torn down is not
//! guarded against — the widget follows whatever semantics the host's
//! [`dom::Dom`] implementation gives stale handles.

pub mod clock;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod interval;
pub mod timer;
pub mod widget;

/// Convenient re-exports of the types most hosts need.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock, WallTime};
    pub use crate::config::{Options, Target, TimeFormat};
    pub use crate::dom::{Dom, ElementId, MemoryDom};
    pub use crate::error::Error;
    pub use crate::format::TimeRecord;
    pub use crate::interval::{IntervalSpec, IntervalUnit, UnitPolicy};
    pub use crate::timer::{ManualTimers, TimerId, Timers};
    pub use crate::widget::TimeWidget;
}

pub use error::Error;
pub use widget::TimeWidget;
