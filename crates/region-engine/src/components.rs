//! Calendar component types: the decomposed view of an instant within a
//! region, the sparse override spec used for construction, and the unit
//! hierarchy shared by arithmetic and boundary queries.

use chrono::Weekday;
use serde::Serialize;

/// Calendar units in descending order of significance.
///
/// Arithmetic applies units in this order; boundary queries zero out every
/// field below the requested unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Nanosecond,
}

impl TimeUnit {
    /// All units, largest first.
    pub const DESCENDING: [TimeUnit; 8] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Week,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
        TimeUnit::Nanosecond,
    ];
}

/// The decomposed representation of an instant within a region.
///
/// Derived, never authoritative: recomputing a `ComponentSet` from the same
/// instant and region always yields the same value. Week fields use the ISO
/// week calendar (weeks start Monday; `year_for_week_of_year` is the ISO
/// week-year, which differs from `year` near year boundaries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentSet {
    /// Era: 1 = CE, 0 = BCE.
    pub era: u8,
    /// Era-relative year (always >= 1).
    pub year: i32,
    /// Month of year (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute of hour (0-59).
    pub minute: u32,
    /// Second of minute (0-59).
    pub second: u32,
    /// Nanosecond of second.
    pub nanosecond: u32,
    /// Day of week.
    pub weekday: Weekday,
    /// ISO week of year (1-53).
    pub week_of_year: u32,
    /// Week of month, Monday-based (1-6).
    pub week_of_month: u32,
    /// ISO week-year (signed; may differ from `year` in the first/last days
    /// of a year).
    pub year_for_week_of_year: i32,
    /// Ordinal day of year (1-366).
    pub day_of_year: u32,
    /// Number of days in this month.
    pub month_days: u32,
    /// Whether the year is a leap year.
    pub leap_year: bool,
    /// Whether the month is a leap month (always false for Gregorian).
    pub leap_month: bool,
}

/// A sparse set of component overrides used to construct or mutate a date.
///
/// Two mutually exclusive addressing families are supported:
///
/// - **absolute calendar**: `era`, `year`, `month`, `day`
/// - **ISO week calendar**: `era`, `year_for_week_of_year`, `week_of_year`,
///   `weekday`
///
/// Time-of-day fields (`hour`, `minute`, `second`, `nanosecond`) are shared.
/// Supplying fields from both families in one spec is rejected with
/// [`RegionError::InvalidComponentCombination`](crate::RegionError::InvalidComponentCombination).
///
/// Unset fields fall back to the corresponding field of the reference date
/// (when one is supplied), and otherwise to the documented defaults: era 1,
/// year 2001, month 1, day 1, 00:00:00.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateSpec {
    pub era: Option<u8>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub year_for_week_of_year: Option<i32>,
    pub week_of_year: Option<u32>,
    pub weekday: Option<Weekday>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub nanosecond: Option<u32>,
}

impl DateSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn era(mut self, era: u8) -> Self {
        self.era = Some(era);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn year_for_week_of_year(mut self, year: i32) -> Self {
        self.year_for_week_of_year = Some(year);
        self
    }

    pub fn week_of_year(mut self, week: u32) -> Self {
        self.week_of_year = Some(week);
        self
    }

    pub fn weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(mut self, second: u32) -> Self {
        self.second = Some(second);
        self
    }

    pub fn nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = Some(nanosecond);
        self
    }

    /// Whether any absolute-calendar date field is set.
    pub(crate) fn has_absolute_fields(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Whether any ISO-week-calendar date field is set.
    pub(crate) fn has_week_fields(&self) -> bool {
        self.year_for_week_of_year.is_some()
            || self.week_of_year.is_some()
            || self.weekday.is_some()
    }
}
