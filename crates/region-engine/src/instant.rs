//! The opaque absolute-time value and its region-aware operations.
//!
//! An [`AbsoluteTime`] is a region-independent instant: comparable by
//! total order, equal iff the underlying instants are equal. Every
//! human-meaningful view of it (calendar fields, boundaries, predicates,
//! text) requires a [`Region`].

use std::ops::{Add, Neg, Sub};

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Utc, Weekday};
use serde::Serialize;

use crate::components::{ComponentSet, DateSpec, TimeUnit};
use crate::delta::{self, ComponentDelta};
use crate::error::{RegionError, Result};
use crate::region::Region;
use crate::resolver;

/// An opaque, region-independent instant at nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AbsoluteTime(DateTime<Utc>);

impl AbsoluteTime {
    /// The current instant, from the host clock.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// From elapsed seconds (plus a sub-second nanosecond part) since the
    /// Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidDate`] when the value is outside the
    /// engine's representable range.
    pub fn from_timestamp(secs: i64, nanos: u32) -> Result<Self> {
        DateTime::from_timestamp(secs, nanos)
            .map(Self)
            .ok_or_else(|| {
                RegionError::InvalidDate(format!("timestamp out of range: {secs}s {nanos}ns"))
            })
    }

    /// Parse an RFC 3339 datetime string.
    pub fn from_rfc3339(s: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| RegionError::InvalidDate(format!("'{s}': {e}")))
    }

    /// Construct from a complete component set interpreted in a region.
    ///
    /// Only the authoritative fields (era, year, month, day, time of day)
    /// participate; derived fields are ignored.
    pub fn from_components(c: &ComponentSet, region: &Region) -> Result<Self> {
        let spec = DateSpec::new()
            .era(c.era)
            .year(c.year)
            .month(c.month)
            .day(c.day)
            .hour(c.hour)
            .minute(c.minute)
            .second(c.second)
            .nanosecond(c.nanosecond);
        resolver::resolve_spec(None, &spec, region)
    }

    /// Construct from a sparse spec with no reference date: unset fields
    /// take the documented defaults (2001-01-01 00:00:00.0, era 1).
    pub fn from_spec(spec: &DateSpec, region: &Region) -> Result<Self> {
        resolver::resolve_spec(None, spec, region)
    }

    /// Construct a new instant from this one with the given overrides;
    /// unset fields keep this instant's value projected into the region.
    pub fn with_components(&self, spec: &DateSpec, region: &Region) -> Result<Self> {
        resolver::resolve_spec(Some(*self), spec, region)
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Elapsed whole seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    // ── Projection and accessors ────────────────────────────────────────

    /// Decompose this instant into calendar components for a region,
    /// using the timezone offset in effect at this instant.
    pub fn components(&self, region: &Region) -> ComponentSet {
        region.engine().project(*self, region.tz)
    }

    pub fn era(&self, region: &Region) -> u8 {
        self.components(region).era
    }

    pub fn year(&self, region: &Region) -> i32 {
        self.components(region).year
    }

    pub fn month(&self, region: &Region) -> u32 {
        self.components(region).month
    }

    pub fn day(&self, region: &Region) -> u32 {
        self.components(region).day
    }

    pub fn hour(&self, region: &Region) -> u32 {
        self.components(region).hour
    }

    pub fn minute(&self, region: &Region) -> u32 {
        self.components(region).minute
    }

    pub fn second(&self, region: &Region) -> u32 {
        self.components(region).second
    }

    pub fn nanosecond(&self, region: &Region) -> u32 {
        self.components(region).nanosecond
    }

    pub fn weekday(&self, region: &Region) -> Weekday {
        self.components(region).weekday
    }

    pub fn week_of_year(&self, region: &Region) -> u32 {
        self.components(region).week_of_year
    }

    pub fn week_of_month(&self, region: &Region) -> u32 {
        self.components(region).week_of_month
    }

    pub fn year_for_week_of_year(&self, region: &Region) -> i32 {
        self.components(region).year_for_week_of_year
    }

    pub fn day_of_year(&self, region: &Region) -> u32 {
        self.components(region).day_of_year
    }

    pub fn month_days(&self, region: &Region) -> u32 {
        self.components(region).month_days
    }

    /// The hour this instant rounds to: the hour field of the instant
    /// thirty minutes later.
    pub fn nearest_hour(&self, region: &Region) -> u32 {
        Self(self.0 + Duration::minutes(30)).hour(region)
    }

    // ── Arithmetic ──────────────────────────────────────────────────────

    /// Add a signed component bundle within a region.
    ///
    /// Units apply in order year, month, week, day, hour, minute, second,
    /// nanosecond, each cumulatively to the evolving instant. Year and
    /// month go through the region's calendar (end-of-month days clamp);
    /// week and smaller are fixed-duration offsets on the instant.
    pub fn add(&self, delta: ComponentDelta, region: &Region) -> Result<Self> {
        delta::apply(*self, &delta, region)
    }

    /// Subtract a component bundle: equivalent to adding its field-wise
    /// negation.
    pub fn sub(&self, delta: ComponentDelta, region: &Region) -> Result<Self> {
        delta::apply(*self, &delta.neg(), region)
    }

    /// The component-wise delta from this instant to `to`, decomposed
    /// greedily over `units` from largest to smallest.
    pub fn difference(
        &self,
        to: AbsoluteTime,
        units: &[TimeUnit],
        region: &Region,
    ) -> Result<ComponentDelta> {
        delta::difference(*self, to, units, region)
    }

    // ── Boundaries ──────────────────────────────────────────────────────

    /// The first instant of the `unit` containing this instant: all
    /// component fields smaller than `unit` are zeroed and the wall clock
    /// re-derived. Weeks start Monday (ISO). Idempotent.
    pub fn start_of(&self, unit: TimeUnit, region: &Region) -> Result<Self> {
        let engine = region.engine();
        let c = self.components(region);
        let date = engine.resolve_ymd(c.era, c.year, c.month, c.day)?;
        let wall: NaiveDateTime = match unit {
            TimeUnit::Year => midnight(engine.resolve_ymd(c.era, c.year, 1, 1)?),
            TimeUnit::Month => midnight(engine.resolve_ymd(c.era, c.year, c.month, 1)?),
            TimeUnit::Week => {
                let back = i64::from(c.weekday.num_days_from_monday());
                midnight(date - Duration::days(back))
            }
            TimeUnit::Day => midnight(date),
            TimeUnit::Hour => date.and_time(time_of(c.hour, 0, 0, 0)?),
            TimeUnit::Minute => date.and_time(time_of(c.hour, c.minute, 0, 0)?),
            TimeUnit::Second => date.and_time(time_of(c.hour, c.minute, c.second, 0)?),
            TimeUnit::Nanosecond => return Ok(*self),
        };
        // The boundary wall clock is derived, so a DST-skipped midnight
        // (some zones spring forward at 00:00) rolls past the gap.
        engine.resolve_wall(wall, region.tz)
    }

    /// The last instant of the `unit` containing this instant: one
    /// nanosecond (the engine's minimum resolution) before the start of
    /// the next `unit`.
    pub fn end_of(&self, unit: TimeUnit, region: &Region) -> Result<Self> {
        let engine = region.engine();
        let start = self.start_of(unit, region)?;
        let next = match unit {
            TimeUnit::Year => engine.shift_months(start, region.tz, 12)?,
            TimeUnit::Month => engine.shift_months(start, region.tz, 1)?,
            TimeUnit::Week | TimeUnit::Day => {
                let days = if unit == TimeUnit::Week { 7 } else { 1 };
                let c = start.components(region);
                let date = engine.resolve_ymd(c.era, c.year, c.month, c.day)?;
                // The next midnight is derived, not caller-supplied, so a
                // DST-skipped midnight rolls forward past the gap.
                engine.resolve_wall(midnight(date + Duration::days(days)), region.tz)?
            }
            TimeUnit::Hour => Self(start.0 + Duration::hours(1)),
            TimeUnit::Minute => Self(start.0 + Duration::minutes(1)),
            TimeUnit::Second => Self(start.0 + Duration::seconds(1)),
            TimeUnit::Nanosecond => return Ok(*self),
        };
        Ok(Self(next.0 - Duration::nanoseconds(1)))
    }

    // ── Classification ──────────────────────────────────────────────────

    pub fn is_before(&self, other: AbsoluteTime) -> bool {
        *self < other
    }

    pub fn is_after(&self, other: AbsoluteTime) -> bool {
        *self > other
    }

    /// Whether this instant and `other` fall in the same `unit` of the
    /// region's calendar (same start-of-unit boundary).
    pub fn is_in(&self, unit: TimeUnit, other: AbsoluteTime, region: &Region) -> Result<bool> {
        Ok(self.start_of(unit, region)? == other.start_of(unit, region)?)
    }

    pub fn is_in_same_day(&self, other: AbsoluteTime, region: &Region) -> Result<bool> {
        self.is_in(TimeUnit::Day, other, region)
    }

    pub fn is_in_today(&self, region: &Region) -> Result<bool> {
        self.is_in_same_day(Self::now(), region)
    }

    pub fn is_in_yesterday(&self, region: &Region) -> Result<bool> {
        self.is_in_same_day(Self::yesterday(region)?, region)
    }

    pub fn is_in_tomorrow(&self, region: &Region) -> Result<bool> {
        self.is_in_same_day(Self::tomorrow(region)?, region)
    }

    pub fn is_in_weekend(&self, region: &Region) -> bool {
        matches!(self.weekday(region), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_leap_year(&self, region: &Region) -> bool {
        self.components(region).leap_year
    }

    pub fn is_leap_month(&self, region: &Region) -> bool {
        self.components(region).leap_month
    }

    // ── Day helpers ─────────────────────────────────────────────────────

    /// The start of the current day in the region.
    pub fn today(region: &Region) -> Result<Self> {
        Self::now().start_of(TimeUnit::Day, region)
    }

    /// The start of the previous calendar day in the region.
    pub fn yesterday(region: &Region) -> Result<Self> {
        Self::now().offset_days(-1, region)
    }

    /// The start of the next calendar day in the region.
    pub fn tomorrow(region: &Region) -> Result<Self> {
        Self::now().offset_days(1, region)
    }

    /// Start of the calendar day `days` away from this instant's day.
    /// Calendar days, not 24-hour blocks, so DST transition days count
    /// as one day. A day whose midnight is DST-skipped starts past the
    /// gap.
    pub(crate) fn offset_days(&self, days: i64, region: &Region) -> Result<Self> {
        let engine = region.engine();
        let c = self.components(region);
        let date = engine.resolve_ymd(c.era, c.year, c.month, c.day)?;
        engine.resolve_wall(midnight(date + Duration::days(days)), region.tz)
    }
}

fn midnight(date: chrono::NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn time_of(hour: u32, minute: u32, second: u32, nano: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_nano_opt(hour, minute, second, nano).ok_or_else(|| {
        RegionError::InvalidDate(format!(
            "no such time of day: {hour:02}:{minute:02}:{second:02}.{nano:09}"
        ))
    })
}

// Operator forms use the process-wide default region; the method forms
// take an explicit one.

impl Add<ComponentDelta> for AbsoluteTime {
    type Output = Result<AbsoluteTime>;

    fn add(self, rhs: ComponentDelta) -> Result<AbsoluteTime> {
        delta::apply(self, &rhs, &Region::default_region())
    }
}

impl Sub<ComponentDelta> for AbsoluteTime {
    type Output = Result<AbsoluteTime>;

    fn sub(self, rhs: ComponentDelta) -> Result<AbsoluteTime> {
        delta::apply(self, &rhs.neg(), &Region::default_region())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> Region {
        Region::utc()
    }

    fn at(s: &str) -> AbsoluteTime {
        AbsoluteTime::from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_total_order() {
        let a = at("2021-03-14T00:00:00Z");
        let b = at("2021-03-14T00:00:01Z");
        assert!(a < b);
        assert!(a <= b);
        assert!(!(b < a));
        assert!(a.is_before(b));
        assert!(b.is_after(a));
    }

    #[test]
    fn test_equality_is_region_independent() {
        // The same instant written with different offsets is equal.
        let a = at("2021-06-15T12:00:00Z");
        let b = at("2021-06-15T08:00:00-04:00");
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_timestamp() {
        let t = AbsoluteTime::from_timestamp(1_623_758_400, 0).unwrap();
        assert_eq!(t.to_rfc3339(), "2021-06-15T12:00:00+00:00");
        assert_eq!(t.timestamp(), 1_623_758_400);
    }

    #[test]
    fn test_from_components_roundtrip() {
        let region = utc();
        let t = at("2021-06-15T08:30:45.000000123Z");
        let c = t.components(&region);
        let back = AbsoluteTime::from_components(&c, &region).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_start_of_day_and_idempotence() {
        let region = utc();
        let t = at("2021-03-14T15:09:26Z");
        let start = t.start_of(TimeUnit::Day, &region).unwrap();
        assert_eq!(start.to_rfc3339(), "2021-03-14T00:00:00+00:00");
        assert_eq!(start.start_of(TimeUnit::Day, &region).unwrap(), start);
    }

    #[test]
    fn test_start_of_each_unit() {
        let region = utc();
        let t = at("2021-03-14T15:09:26.5Z");
        let cases = [
            (TimeUnit::Year, "2021-01-01T00:00:00+00:00"),
            (TimeUnit::Month, "2021-03-01T00:00:00+00:00"),
            // 2021-03-14 is a Sunday; the ISO week began Monday the 8th.
            (TimeUnit::Week, "2021-03-08T00:00:00+00:00"),
            (TimeUnit::Day, "2021-03-14T00:00:00+00:00"),
            (TimeUnit::Hour, "2021-03-14T15:00:00+00:00"),
            (TimeUnit::Minute, "2021-03-14T15:09:00+00:00"),
            (TimeUnit::Second, "2021-03-14T15:09:26+00:00"),
        ];
        for (unit, expected) in cases {
            assert_eq!(
                t.start_of(unit, &region).unwrap().to_rfc3339(),
                expected,
                "start of {unit:?}"
            );
        }
    }

    #[test]
    fn test_end_of_is_last_nanosecond() {
        let region = utc();
        let t = at("2021-02-10T10:30:00Z");
        let end = t.end_of(TimeUnit::Month, &region).unwrap();
        // One nanosecond before March 1.
        assert_eq!(end.to_rfc3339(), "2021-02-28T23:59:59.999999999+00:00");
        let next = AbsoluteTime::from_utc(end.to_utc() + Duration::nanoseconds(1));
        assert_eq!(next.to_rfc3339(), "2021-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_end_of_day_across_spring_forward() {
        // The 23-hour day still ends one nanosecond before the next
        // midnight wall clock.
        let region = Region::from_names("America/New_York", "en_US").unwrap();
        let t = at("2021-03-14T12:00:00-04:00");
        let end = t.end_of(TimeUnit::Day, &region).unwrap();
        let c = end.components(&region);
        assert_eq!((c.day, c.hour, c.minute, c.second), (14, 23, 59, 59));
        assert_eq!(c.nanosecond, 999_999_999);
    }

    #[test]
    fn test_day_boundaries_across_midnight_dst_gap() {
        // Sao Paulo sprang forward at midnight on 2017-10-15: the day
        // began at 01:00. Boundary queries on the surrounding days must
        // still succeed.
        let region = Region::from_names("America/Sao_Paulo", "pt_BR").unwrap();
        let t = at("2017-10-14T12:00:00-03:00");
        let end = t.end_of(TimeUnit::Day, &region).unwrap();
        let c = end.components(&region);
        assert_eq!((c.day, c.hour, c.minute, c.second), (14, 23, 59, 59));
        assert_eq!(c.nanosecond, 999_999_999);

        // The skipped day starts at 01:00, and start_of stays idempotent.
        let in_gap_day = at("2017-10-15T12:00:00-02:00");
        let start = in_gap_day.start_of(TimeUnit::Day, &region).unwrap();
        assert_eq!(start.hour(&region), 1);
        assert_eq!(start.day(&region), 15);
        assert_eq!(start.start_of(TimeUnit::Day, &region).unwrap(), start);
    }

    #[test]
    fn test_offset_days_across_midnight_dst_gap() {
        let region = Region::from_names("America/Sao_Paulo", "pt_BR").unwrap();
        let t = at("2017-10-14T12:00:00-03:00");
        let next = t.offset_days(1, &region).unwrap();
        assert_eq!(next.day(&region), 15);
        assert_eq!(next.hour(&region), 1);
        let back = next.offset_days(-1, &region).unwrap();
        assert_eq!((back.day(&region), back.hour(&region)), (14, 0));
    }

    #[test]
    fn test_start_of_week_is_monday() {
        let region = utc();
        let t = at("2021-03-14T12:00:00Z"); // Sunday
        let start = t.start_of(TimeUnit::Week, &region).unwrap();
        assert_eq!(start.weekday(&region), Weekday::Mon);
        assert_eq!(start.day(&region), 8);
    }

    #[test]
    fn test_is_in_same_month() {
        let region = utc();
        let a = at("2021-03-01T00:00:00Z");
        let b = at("2021-03-31T23:59:59Z");
        let c = at("2021-04-01T00:00:00Z");
        assert!(a.is_in(TimeUnit::Month, b, &region).unwrap());
        assert!(!a.is_in(TimeUnit::Month, c, &region).unwrap());
    }

    #[test]
    fn test_same_utc_day_differs_by_region() {
        // 2021-06-15 23:30 UTC is already June 16 in Tokyo.
        let utc_region = utc();
        let tokyo = Region::from_names("Asia/Tokyo", "ja_JP").unwrap();
        let a = at("2021-06-15T23:30:00Z");
        let b = at("2021-06-15T01:00:00Z");
        assert!(a.is_in_same_day(b, &utc_region).unwrap());
        assert!(!a.is_in_same_day(b, &tokyo).unwrap());
    }

    #[test]
    fn test_weekend_detection() {
        let region = utc();
        assert!(at("2021-01-30T12:00:00Z").is_in_weekend(&region)); // Saturday
        assert!(at("2021-01-31T12:00:00Z").is_in_weekend(&region)); // Sunday
        assert!(!at("2021-02-01T12:00:00Z").is_in_weekend(&region)); // Monday
    }

    #[test]
    fn test_leap_year_flag() {
        let region = utc();
        assert!(at("2020-06-01T00:00:00Z").is_leap_year(&region));
        assert!(!at("2021-06-01T00:00:00Z").is_leap_year(&region));
        assert!(!at("2021-06-01T00:00:00Z").is_leap_month(&region));
    }

    #[test]
    fn test_is_in_today_for_current_instant() {
        let region = utc();
        assert!(AbsoluteTime::now().is_in_today(&region).unwrap());
    }

    #[test]
    fn test_today_yesterday_tomorrow_are_consecutive_days() {
        let region = utc();
        let today = AbsoluteTime::today(&region).unwrap();
        let yesterday = AbsoluteTime::yesterday(&region).unwrap();
        let tomorrow = AbsoluteTime::tomorrow(&region).unwrap();
        assert!(yesterday < today && today < tomorrow);
        assert_eq!(yesterday.hour(&region), 0);
        assert!(yesterday.is_in_yesterday(&region).unwrap());
        assert!(tomorrow.is_in_tomorrow(&region).unwrap());
        assert!(!tomorrow.is_in_today(&region).unwrap());
    }

    #[test]
    fn test_nearest_hour() {
        let region = utc();
        assert_eq!(at("2021-06-15T10:20:00Z").nearest_hour(&region), 10);
        assert_eq!(at("2021-06-15T10:30:00Z").nearest_hour(&region), 11);
        assert_eq!(at("2021-06-15T23:45:00Z").nearest_hour(&region), 0);
    }

    #[test]
    fn test_accessors_match_components() {
        let region = utc();
        let t = at("2021-01-01T06:07:08.000000009Z");
        assert_eq!(t.era(&region), 1);
        assert_eq!(t.year(&region), 2021);
        assert_eq!(t.month(&region), 1);
        assert_eq!(t.day(&region), 1);
        assert_eq!(t.hour(&region), 6);
        assert_eq!(t.minute(&region), 7);
        assert_eq!(t.second(&region), 8);
        assert_eq!(t.nanosecond(&region), 9);
        assert_eq!(t.weekday(&region), Weekday::Fri);
        assert_eq!(t.week_of_year(&region), 53);
        assert_eq!(t.year_for_week_of_year(&region), 2020);
        assert_eq!(t.day_of_year(&region), 1);
        assert_eq!(t.month_days(&region), 31);
        assert_eq!(t.week_of_month(&region), 1);
    }

    #[test]
    fn test_method_form_compiles_with_operator_traits_in_scope() {
        // `use std::ops::{Add, Sub}` at the top of this module puts the
        // operator methods in scope; the explicit-region forms must stay
        // callable via qualified paths.
        let region = utc();
        let t = at("2021-06-15T10:00:00Z");
        let delta = ComponentDelta::new().hours(2);
        let via_method = AbsoluteTime::add(&t, delta, &region).unwrap();
        let via_operator = (t + delta).unwrap();
        assert_eq!(via_method, via_operator);
        assert_eq!(AbsoluteTime::sub(&via_method, delta, &region).unwrap(), t);
    }

    #[test]
    fn test_operator_add_sub_fixed_units() {
        // Fixed-duration units are timezone-independent, so the default
        // region (whatever it is) gives the same instant.
        let t = at("2021-06-15T10:00:00Z");
        let plus = (t + ComponentDelta::new().hours(2)).unwrap();
        assert_eq!(plus.to_rfc3339(), "2021-06-15T12:00:00+00:00");
        let minus = (t - ComponentDelta::new().minutes(30)).unwrap();
        assert_eq!(minus.to_rfc3339(), "2021-06-15T09:30:00+00:00");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // project/unproject round-trip in UTC (no offset ambiguity).
            #[test]
            fn roundtrip_components_utc(
                secs in -2_000_000_000i64..4_000_000_000i64,
                nanos in 0u32..1_000_000_000u32,
            ) {
                let region = Region::utc();
                let t = AbsoluteTime::from_timestamp(secs, nanos).unwrap();
                let c = t.components(&region);
                let back = AbsoluteTime::from_components(&c, &region).unwrap();
                prop_assert_eq!(back, t);
                // And the reprojection is identical (idempotent).
                prop_assert_eq!(back.components(&region), c);
            }

            #[test]
            fn start_of_day_idempotent(secs in -2_000_000_000i64..4_000_000_000i64) {
                let region = Region::utc();
                let t = AbsoluteTime::from_timestamp(secs, 0).unwrap();
                let once = t.start_of(TimeUnit::Day, &region).unwrap();
                let twice = once.start_of(TimeUnit::Day, &region).unwrap();
                prop_assert_eq!(once, twice);
                prop_assert!(once <= t);
            }

            #[test]
            fn ordering_consistent(a in -2_000_000_000i64..4_000_000_000i64,
                                   b in -2_000_000_000i64..4_000_000_000i64) {
                let ta = AbsoluteTime::from_timestamp(a, 0).unwrap();
                let tb = AbsoluteTime::from_timestamp(b, 0).unwrap();
                if ta < tb {
                    prop_assert!(ta <= tb);
                    prop_assert!(!(tb < ta));
                    prop_assert!(ta != tb);
                }
                prop_assert_eq!(ta < tb, a < b);
            }

            // Fixed-duration add/sub invert each other.
            #[test]
            fn add_sub_inverse(secs in -2_000_000_000i64..4_000_000_000i64,
                               hours in -10_000i64..10_000i64) {
                let region = Region::utc();
                let t = AbsoluteTime::from_timestamp(secs, 0).unwrap();
                // Qualified: with `Add`/`Sub` in scope, `t.add(..)` would
                // resolve to the one-argument operator method.
                let delta = ComponentDelta::new().hours(hours);
                let there = AbsoluteTime::add(&t, delta, &region).unwrap();
                let back = AbsoluteTime::sub(&there, delta, &region).unwrap();
                prop_assert_eq!(back, t);
            }
        }
    }
}
