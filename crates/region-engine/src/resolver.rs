//! The partial-override resolver: build an instant from a sparse
//! [`DateSpec`], an optional reference instant, and a region.
//!
//! For every field the resolved value is, in order of precedence: the
//! explicit override, the corresponding field of the reference projected
//! into the region, or the documented default (era 1, year 2001, month 1,
//! day 1, 00:00:00.0). A field absent from both override and reference
//! falls back to the default; it never errors. The resolved field set is
//! then handed to the region's calendar engine, which rejects invalid
//! combinations instead of clamping them.

use chrono::Weekday;
use chrono_tz::Tz;

use crate::components::{ComponentSet, DateSpec};
use crate::engine::CalendarEngine;
use crate::error::{RegionError, Result};
use crate::instant::AbsoluteTime;
use crate::region::Region;

const DEFAULT_ERA: u8 = 1;
const DEFAULT_YEAR: i32 = 2001;
const DEFAULT_MONTH: u32 = 1;
const DEFAULT_DAY: u32 = 1;

/// Resolve a spec against an optional reference in the given region.
///
/// # Errors
///
/// [`RegionError::InvalidComponentCombination`] when the spec mixes
/// absolute-calendar and ISO-week fields;
/// [`RegionError::InvalidDate`] when the resolved fields are not a valid
/// calendar date or name a wall-clock time skipped by a DST transition.
pub fn resolve_spec(
    reference: Option<AbsoluteTime>,
    spec: &DateSpec,
    region: &Region,
) -> Result<AbsoluteTime> {
    let engine = region.engine();
    let reference = reference.map(|t| engine.project(t, region.tz));
    resolve_with_engine(engine, reference, spec, region.tz)
}

/// Engine-parameterized body of [`resolve_spec`], so the precedence logic
/// can be exercised against a fake engine.
pub(crate) fn resolve_with_engine(
    engine: &dyn CalendarEngine,
    reference: Option<ComponentSet>,
    spec: &DateSpec,
    tz: Tz,
) -> Result<AbsoluteTime> {
    if spec.has_absolute_fields() && spec.has_week_fields() {
        return Err(RegionError::InvalidComponentCombination(
            "cannot mix year/month/day with week-of-year fields in one spec".to_string(),
        ));
    }

    let date = if spec.has_week_fields() {
        // The ISO week-year is already signed, so the era does not
        // participate in this family.
        let week_year = spec
            .year_for_week_of_year
            .or(reference.map(|r| r.year_for_week_of_year))
            .unwrap_or(DEFAULT_YEAR);
        let week = spec
            .week_of_year
            .or(reference.map(|r| r.week_of_year))
            .unwrap_or(1);
        let weekday = spec
            .weekday
            .or(reference.map(|r| r.weekday))
            .unwrap_or(Weekday::Mon);
        engine.resolve_isoywd(week_year, week, weekday)?
    } else {
        let era = spec
            .era
            .or(reference.map(|r| r.era))
            .unwrap_or(DEFAULT_ERA);
        let year = spec
            .year
            .or(reference.map(|r| r.year))
            .unwrap_or(DEFAULT_YEAR);
        let month = spec
            .month
            .or(reference.map(|r| r.month))
            .unwrap_or(DEFAULT_MONTH);
        let day = spec.day.or(reference.map(|r| r.day)).unwrap_or(DEFAULT_DAY);
        engine.resolve_ymd(era, year, month, day)?
    };

    let hour = spec.hour.or(reference.map(|r| r.hour)).unwrap_or(0);
    let minute = spec.minute.or(reference.map(|r| r.minute)).unwrap_or(0);
    let second = spec.second.or(reference.map(|r| r.second)).unwrap_or(0);
    let nanosecond = spec
        .nanosecond
        .or(reference.map(|r| r.nanosecond))
        .unwrap_or(0);

    let time = chrono::NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond)
        .ok_or_else(|| {
            RegionError::InvalidDate(format!(
                "no such time of day: {hour:02}:{minute:02}:{second:02}.{nanosecond:09}"
            ))
        })?;

    engine.unproject(date.and_time(time), tz)
}
