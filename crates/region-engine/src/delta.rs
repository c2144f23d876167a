//! Signed calendar-unit bundles: arithmetic application and greedy
//! component-wise differences.

use std::ops::Neg;

use chrono::Duration;
use serde::Serialize;

use crate::components::TimeUnit;
use crate::error::{RegionError, Result};
use crate::instant::AbsoluteTime;
use crate::region::Region;

/// A signed quantity of each calendar unit.
///
/// Applied in order year, month, week, day, hour, minute, second,
/// nanosecond, each cumulatively to the evolving instant. Year and month
/// go through the region's calendar; the rest are fixed durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComponentDelta {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl ComponentDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn years(mut self, n: i64) -> Self {
        self.years = n;
        self
    }

    pub fn months(mut self, n: i64) -> Self {
        self.months = n;
        self
    }

    pub fn weeks(mut self, n: i64) -> Self {
        self.weeks = n;
        self
    }

    pub fn days(mut self, n: i64) -> Self {
        self.days = n;
        self
    }

    pub fn hours(mut self, n: i64) -> Self {
        self.hours = n;
        self
    }

    pub fn minutes(mut self, n: i64) -> Self {
        self.minutes = n;
        self
    }

    pub fn seconds(mut self, n: i64) -> Self {
        self.seconds = n;
        self
    }

    pub fn nanoseconds(mut self, n: i64) -> Self {
        self.nanoseconds = n;
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, unit: TimeUnit) -> i64 {
        match unit {
            TimeUnit::Year => self.years,
            TimeUnit::Month => self.months,
            TimeUnit::Week => self.weeks,
            TimeUnit::Day => self.days,
            TimeUnit::Hour => self.hours,
            TimeUnit::Minute => self.minutes,
            TimeUnit::Second => self.seconds,
            TimeUnit::Nanosecond => self.nanoseconds,
        }
    }

    pub fn set(&mut self, unit: TimeUnit, n: i64) {
        match unit {
            TimeUnit::Year => self.years = n,
            TimeUnit::Month => self.months = n,
            TimeUnit::Week => self.weeks = n,
            TimeUnit::Day => self.days = n,
            TimeUnit::Hour => self.hours = n,
            TimeUnit::Minute => self.minutes = n,
            TimeUnit::Second => self.seconds = n,
            TimeUnit::Nanosecond => self.nanoseconds = n,
        }
    }

    /// Units carried by this delta, largest first.
    pub fn nonzero_units(&self) -> Vec<(TimeUnit, i64)> {
        TimeUnit::DESCENDING
            .into_iter()
            .filter_map(|u| {
                let n = self.get(u);
                (n != 0).then_some((u, n))
            })
            .collect()
    }
}

impl Neg for ComponentDelta {
    type Output = ComponentDelta;

    fn neg(self) -> ComponentDelta {
        ComponentDelta {
            years: -self.years,
            months: -self.months,
            weeks: -self.weeks,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            nanoseconds: -self.nanoseconds,
        }
    }
}

/// Apply a delta to an instant within a region. Year, then month, via the
/// calendar (end-of-month clamp); then the fixed-duration tail in one
/// checked sum.
pub(crate) fn apply(t: AbsoluteTime, d: &ComponentDelta, region: &Region) -> Result<AbsoluteTime> {
    let engine = region.engine();
    let mut cur = t;
    if d.years != 0 {
        cur = engine.shift_months(cur, region.tz, months_i32(d.years, 12)?)?;
    }
    if d.months != 0 {
        cur = engine.shift_months(cur, region.tz, months_i32(d.months, 1)?)?;
    }
    let tail = fixed_duration(d)?;
    cur.to_utc()
        .checked_add_signed(tail)
        .map(AbsoluteTime::from_utc)
        .ok_or_else(|| RegionError::InvalidDate("date arithmetic out of range".to_string()))
}

fn months_i32(n: i64, scale: i64) -> Result<i32> {
    n.checked_mul(scale)
        .and_then(|m| i32::try_from(m).ok())
        .ok_or_else(|| RegionError::InvalidDate(format!("month delta out of range: {n}")))
}

/// Sum the week-and-smaller fields into one `Duration`, without panicking
/// on overflow.
fn fixed_duration(d: &ComponentDelta) -> Result<Duration> {
    let parts = [
        Duration::try_weeks(d.weeks),
        Duration::try_days(d.days),
        Duration::try_hours(d.hours),
        Duration::try_minutes(d.minutes),
        Duration::try_seconds(d.seconds),
        Some(Duration::nanoseconds(d.nanoseconds)),
    ];
    let mut total = Duration::zero();
    for part in parts {
        total = part
            .and_then(|p| total.checked_add(&p))
            .ok_or_else(|| RegionError::InvalidDate("duration delta out of range".to_string()))?;
    }
    Ok(total)
}

/// Greedy component-wise difference from `from` to `to` over the requested
/// units, largest to smallest. Every counted unit moves the cursor, so the
/// remaining smaller units measure only the residue. All components share
/// the sign of the overall direction.
pub(crate) fn difference(
    from: AbsoluteTime,
    to: AbsoluteTime,
    units: &[TimeUnit],
    region: &Region,
) -> Result<ComponentDelta> {
    let mut delta = ComponentDelta::default();
    let mut cur = from;
    for unit in TimeUnit::DESCENDING {
        if !units.contains(&unit) {
            continue;
        }
        let n = match unit {
            TimeUnit::Year | TimeUnit::Month => count_calendar_units(cur, to, unit, region)?,
            _ => count_fixed_units(cur, to, unit),
        };
        if n != 0 {
            let mut step = ComponentDelta::default();
            step.set(unit, n);
            cur = apply(cur, &step, region)?;
        }
        delta.set(unit, n);
    }
    Ok(delta)
}

/// Whole calendar years or months from `cur` toward `to`: a field-based
/// estimate corrected so that stepping by `n` does not overshoot and
/// stepping by `n + sign` would.
fn count_calendar_units(
    cur: AbsoluteTime,
    to: AbsoluteTime,
    unit: TimeUnit,
    region: &Region,
) -> Result<i64> {
    let engine = region.engine();
    let a = engine.project(cur, region.tz);
    let b = engine.project(to, region.tz);
    let a_year = crate::engine::signed_year(a.era, a.year)?;
    let b_year = crate::engine::signed_year(b.era, b.year)?;
    let months = i64::from(b_year - a_year) * 12 + i64::from(b.month) - i64::from(a.month);
    let mut n = match unit {
        TimeUnit::Year => months / 12,
        _ => months,
    };
    let sign: i64 = if to >= cur { 1 } else { -1 };
    let overshoots = |stepped: AbsoluteTime| (sign > 0 && stepped > to) || (sign < 0 && stepped < to);

    while n != 0 && overshoots(step_by(cur, unit, n, region)?) {
        n -= sign;
    }
    while !overshoots(step_by(cur, unit, n + sign, region)?) {
        n += sign;
    }
    Ok(n)
}

fn step_by(cur: AbsoluteTime, unit: TimeUnit, n: i64, region: &Region) -> Result<AbsoluteTime> {
    let mut step = ComponentDelta::default();
    step.set(unit, n);
    apply(cur, &step, region)
}

/// Whole fixed-duration units from `cur` toward `to` (truncated toward
/// zero).
fn count_fixed_units(cur: AbsoluteTime, to: AbsoluteTime, unit: TimeUnit) -> i64 {
    let d = to.to_utc() - cur.to_utc();
    match unit {
        TimeUnit::Week => d.num_seconds() / 604_800,
        TimeUnit::Day => d.num_seconds() / 86_400,
        TimeUnit::Hour => d.num_seconds() / 3_600,
        TimeUnit::Minute => d.num_seconds() / 60,
        TimeUnit::Second => d.num_seconds(),
        TimeUnit::Nanosecond => d
            .num_seconds()
            .saturating_mul(1_000_000_000)
            .saturating_add(i64::from(d.subsec_nanos())),
        TimeUnit::Year | TimeUnit::Month => 0, // handled by the calendar path
    }
}
