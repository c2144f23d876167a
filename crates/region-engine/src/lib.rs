//! # region-engine
//!
//! A region-aware date engine: component-based construction, calendar
//! arithmetic, boundary queries, classification predicates, and locale
//! formatting over an opaque absolute-time value.
//!
//! An [`AbsoluteTime`] is a region-independent instant. A [`Region`]
//! (calendar + timezone + locale) is required to derive or construct any
//! human-meaningful calendar field; two instants are equal iff their
//! elapsed time since the epoch is equal, regardless of region. All
//! calendrical computation is delegated to chrono and chrono-tz through
//! the [`CalendarEngine`] trait — nothing here reimplements leap rules,
//! timezone data, or locale data.
//!
//! # Design Principle
//!
//! Every higher-level operation funnels through one projection step —
//! "interpret this instant in this region" — and invalid inputs are
//! rejected, never silently corrected: a nonexistent calendar date or a
//! wall-clock time skipped by a DST transition is an error, not a clamp.
//!
//! # Modules
//!
//! - [`region`] — the calendar/timezone/locale triple and the process-wide default
//! - [`components`] — decomposed calendar fields and sparse override specs
//! - [`engine`] — the calendar-engine seam and its Gregorian implementation
//! - [`resolver`] — partial-override resolution with documented precedence
//! - [`instant`] — the absolute-time value and its region-aware operations
//! - [`delta`] — signed unit bundles, arithmetic, and differences
//! - [`format`] — pattern/style formatting and relative phrasing
//! - [`error`] — error types

pub mod components;
pub mod delta;
pub mod engine;
pub mod error;
pub mod format;
pub mod instant;
pub mod region;
pub mod resolver;

pub use components::{ComponentSet, DateSpec, TimeUnit};
pub use delta::ComponentDelta;
pub use engine::{CalendarEngine, GregorianEngine};
pub use error::{RegionError, Result};
pub use format::{DateStyle, TimeStyle};
pub use instant::AbsoluteTime;
pub use region::{Calendar, Region};
pub use resolver::resolve_spec;
