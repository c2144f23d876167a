//! The calendar engine seam.
//!
//! All calendrical computation (validity rules, leap years, month lengths,
//! DST-aware wall-clock resolution) is delegated through the
//! [`CalendarEngine`] trait. [`GregorianEngine`] implements it on chrono +
//! chrono-tz; the resolver and projector never reach past the trait, so
//! they can be exercised against a fake engine.

use chrono::{
    Datelike, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
    Weekday,
};
use chrono_tz::Tz;

use crate::components::ComponentSet;
use crate::error::{RegionError, Result};
use crate::instant::AbsoluteTime;

/// A calendar system's computation surface.
pub trait CalendarEngine: Send + Sync {
    /// Decompose an instant into calendar components for a timezone,
    /// using the offset in effect at that instant.
    fn project(&self, t: AbsoluteTime, tz: Tz) -> ComponentSet;

    /// Map a wall-clock datetime to an instant.
    ///
    /// A wall-clock time skipped by a forward DST transition fails with
    /// [`RegionError::InvalidDate`]. A wall-clock time repeated by a
    /// backward transition resolves to the **earlier** occurrence.
    fn unproject(&self, local: NaiveDateTime, tz: Tz) -> Result<AbsoluteTime>;

    /// Like [`unproject`](Self::unproject), but tolerant of DST gaps:
    /// a skipped wall-clock time is rolled forward past the gap instead of
    /// failing. Used by arithmetic, where the wall clock is derived rather
    /// than caller-supplied.
    fn resolve_wall(&self, local: NaiveDateTime, tz: Tz) -> Result<AbsoluteTime>;

    /// Validate an era-relative year/month/day. Invalid combinations
    /// (day 30 in February) fail with [`RegionError::InvalidDate`]; they
    /// are never clamped or rolled over.
    fn resolve_ymd(&self, era: u8, year: i32, month: u32, day: u32) -> Result<NaiveDate>;

    /// Validate an ISO week-calendar address (week-year, week, weekday).
    /// The week-year is signed (astronomical), matching
    /// [`ComponentSet::year_for_week_of_year`]; it has no era.
    fn resolve_isoywd(&self, iso_year: i32, week: u32, weekday: Weekday) -> Result<NaiveDate>;

    /// Shift an instant by whole calendar months, preserving the local
    /// time of day. A day past the end of the target month clamps to that
    /// month's last day (Jan 31 + 1 month = Feb 28/29).
    fn shift_months(&self, t: AbsoluteTime, tz: Tz, months: i32) -> Result<AbsoluteTime>;

    /// Number of days in the given era-relative month.
    fn days_in_month(&self, era: u8, year: i32, month: u32) -> Result<u32>;

    /// Whether the given signed (astronomical) year is a leap year.
    fn is_leap_year(&self, year: i32) -> bool;
}

/// The proleptic Gregorian calendar, backed by chrono and chrono-tz.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianEngine;

impl CalendarEngine for GregorianEngine {
    fn project(&self, t: AbsoluteTime, tz: Tz) -> ComponentSet {
        let local = t.to_utc().with_timezone(&tz);
        let date = local.date_naive();
        let (ce, year) = date.year_ce();
        let iso = date.iso_week();
        ComponentSet {
            era: u8::from(ce),
            year: year as i32,
            month: date.month(),
            day: date.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            nanosecond: local.nanosecond(),
            weekday: date.weekday(),
            week_of_year: iso.week(),
            week_of_month: week_of_month(date),
            year_for_week_of_year: iso.year(),
            day_of_year: date.ordinal(),
            month_days: month_len(date),
            leap_year: date.leap_year(),
            leap_month: false,
        }
    }

    fn unproject(&self, local: NaiveDateTime, tz: Tz) -> Result<AbsoluteTime> {
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Ok(AbsoluteTime::from_utc(dt.with_timezone(&Utc))),
            LocalResult::Ambiguous(earlier, _) => {
                Ok(AbsoluteTime::from_utc(earlier.with_timezone(&Utc)))
            }
            LocalResult::None => Err(RegionError::InvalidDate(format!(
                "wall-clock time {local} does not exist in {tz} (skipped by a DST transition)"
            ))),
        }
    }

    fn resolve_wall(&self, local: NaiveDateTime, tz: Tz) -> Result<AbsoluteTime> {
        // DST gaps are at most a couple of hours; probe forward in 30-minute
        // steps until the wall clock maps again.
        let mut probe = local;
        for _ in 0..8 {
            match tz.from_local_datetime(&probe) {
                LocalResult::Single(dt) => {
                    return Ok(AbsoluteTime::from_utc(dt.with_timezone(&Utc)));
                }
                LocalResult::Ambiguous(earlier, _) => {
                    return Ok(AbsoluteTime::from_utc(earlier.with_timezone(&Utc)));
                }
                LocalResult::None => probe += Duration::minutes(30),
            }
        }
        Err(RegionError::InvalidDate(format!(
            "wall-clock time {local} cannot be resolved in {tz}"
        )))
    }

    fn resolve_ymd(&self, era: u8, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
        let y = signed_year(era, year)?;
        NaiveDate::from_ymd_opt(y, month, day).ok_or_else(|| {
            RegionError::InvalidDate(format!(
                "no such date: era {era}, year {year}, month {month}, day {day}"
            ))
        })
    }

    fn resolve_isoywd(&self, iso_year: i32, week: u32, weekday: Weekday) -> Result<NaiveDate> {
        NaiveDate::from_isoywd_opt(iso_year, week, weekday).ok_or_else(|| {
            RegionError::InvalidDate(format!(
                "no such ISO week date: week-year {iso_year}, week {week}, {weekday}"
            ))
        })
    }

    fn shift_months(&self, t: AbsoluteTime, tz: Tz, months: i32) -> Result<AbsoluteTime> {
        let local = t.to_utc().with_timezone(&tz);
        let date = local.date_naive();
        let shifted = if months >= 0 {
            date.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        }
        .ok_or_else(|| {
            RegionError::InvalidDate(format!("month arithmetic out of range: {date} {months:+}"))
        })?;
        self.resolve_wall(shifted.and_time(local.time()), tz)
    }

    fn days_in_month(&self, era: u8, year: i32, month: u32) -> Result<u32> {
        let first = self.resolve_ymd(era, year, month, 1)?;
        Ok(month_len(first))
    }

    fn is_leap_year(&self, year: i32) -> bool {
        NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
    }
}

/// Convert an era-relative year to chrono's signed (astronomical) year:
/// era 1 (CE) year N → N, era 0 (BCE) year N → 1 - N.
pub(crate) fn signed_year(era: u8, year: i32) -> Result<i32> {
    if year < 1 {
        return Err(RegionError::InvalidDate(format!(
            "era-relative year must be >= 1, got {year}"
        )));
    }
    match era {
        1 => Ok(year),
        0 => Ok(1 - year),
        other => Err(RegionError::InvalidDate(format!(
            "unknown era {other} (expected 0 or 1)"
        ))),
    }
}

/// Number of days in the month containing `date`: distance from the first
/// of this month to the first of the next.
fn month_len(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31, // only at the far edge of chrono's range
    }
}

/// Monday-based week of month (1-6): the week containing the first of the
/// month is week 1.
fn week_of_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    let offset = first.weekday().num_days_from_monday();
    (date.day0() + offset) / 7 + 1
}
