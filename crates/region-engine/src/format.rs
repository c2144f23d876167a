//! Text rendering: strftime-pattern formatting, locale-driven styles, and
//! natural-language relative phrasing.
//!
//! Numeric-to-text conversion is delegated to chrono's locale data; this
//! module only assembles (value, pattern, locale) triples and selects the
//! units a relative phrase mentions.

use chrono::format::{Item, StrftimeItems};
use serde::Serialize;

use crate::components::TimeUnit;
use crate::error::{RegionError, Result};
use crate::instant::AbsoluteTime;
use crate::region::Region;

/// Locale-driven date rendering width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateStyle {
    Short,
    Medium,
    Long,
    Full,
}

/// Locale-driven time rendering width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeStyle {
    Short,
    Medium,
    Long,
    Full,
}

fn date_pattern(style: DateStyle) -> &'static str {
    match style {
        DateStyle::Short => "%x",
        DateStyle::Medium => "%e %b %Y",
        DateStyle::Long => "%e %B %Y",
        DateStyle::Full => "%A, %e %B %Y",
    }
}

fn time_pattern(style: TimeStyle) -> &'static str {
    match style {
        TimeStyle::Short => "%R",
        TimeStyle::Medium => "%T",
        TimeStyle::Long | TimeStyle::Full => "%T %Z",
    }
}

impl AbsoluteTime {
    /// Render with a strftime pattern, in the region's timezone and
    /// locale.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NoResult`] for an unrecognized pattern
    /// rather than panicking mid-render.
    pub fn format(&self, pattern: &str, region: &Region) -> Result<String> {
        let items = StrftimeItems::new_with_locale(pattern, region.locale);
        if items.clone().any(|item| matches!(item, Item::Error)) {
            return Err(RegionError::NoResult(format!(
                "unrecognized format pattern: '{pattern}'"
            )));
        }
        let local = self.to_utc().with_timezone(&region.tz);
        Ok(local.format_localized(pattern, region.locale).to_string())
    }

    /// Render with locale-driven date and/or time styles.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NoResult`] when both styles are absent.
    pub fn format_styled(
        &self,
        date_style: Option<DateStyle>,
        time_style: Option<TimeStyle>,
        region: &Region,
    ) -> Result<String> {
        let pattern = match (date_style, time_style) {
            (Some(d), Some(t)) => format!("{} {}", date_pattern(d), time_pattern(t)),
            (Some(d), None) => date_pattern(d).to_string(),
            (None, Some(t)) => time_pattern(t).to_string(),
            (None, None) => {
                return Err(RegionError::NoResult(
                    "no date or time style requested".to_string(),
                ));
            }
        };
        self.format(&pattern, region)
    }

    /// Like [`format_styled`](Self::format_styled), but when this instant
    /// falls on the current, previous, or next calendar day of the region,
    /// the date portion is replaced by a named day ("today", "yesterday",
    /// "tomorrow"). The named days are not localized; chrono's locale data
    /// carries no relative-day names. Any other day renders as
    /// `format_styled` would.
    pub fn format_styled_relative(
        &self,
        date_style: Option<DateStyle>,
        time_style: Option<TimeStyle>,
        region: &Region,
    ) -> Result<String> {
        self.styled_relative_to(date_style, time_style, Self::now(), region)
    }

    fn styled_relative_to(
        &self,
        date_style: Option<DateStyle>,
        time_style: Option<TimeStyle>,
        reference: AbsoluteTime,
        region: &Region,
    ) -> Result<String> {
        if date_style.is_none() {
            return self.format_styled(date_style, time_style, region);
        }
        match self.named_day(reference, region)? {
            Some(name) => match time_style {
                Some(t) => Ok(format!("{name} {}", self.format(time_pattern(t), region)?)),
                None => Ok(name.to_string()),
            },
            None => self.format_styled(date_style, time_style, region),
        }
    }

    /// The named day this instant falls on relative to `reference`, if it
    /// is within one calendar day of it.
    fn named_day(&self, reference: AbsoluteTime, region: &Region) -> Result<Option<&'static str>> {
        let day = self.start_of(TimeUnit::Day, region)?;
        if day == reference.start_of(TimeUnit::Day, region)? {
            return Ok(Some("today"));
        }
        if day == reference.offset_days(-1, region)? {
            return Ok(Some("yesterday"));
        }
        if day == reference.offset_days(1, region)? {
            return Ok(Some("tomorrow"));
        }
        Ok(None)
    }

    /// The localized month name ("June", "juin", ...).
    pub fn month_name(&self, region: &Region) -> String {
        self.to_utc()
            .with_timezone(&region.tz)
            .format_localized("%B", region.locale)
            .to_string()
    }

    /// The localized weekday name ("Tuesday", "mardi", ...).
    pub fn weekday_name(&self, region: &Region) -> String {
        self.to_utc()
            .with_timezone(&region.tz)
            .format_localized("%A", region.locale)
            .to_string()
    }

    /// A natural-language phrase for this instant measured against
    /// `reference`: "3 minutes ago", "in 2 hours", "1h 30m ago".
    ///
    /// The difference is decomposed largest-to-smallest over years down to
    /// seconds; the `max_units` largest non-zero units are mentioned.
    /// `abbreviated` selects compact unit symbols. An instant equal to the
    /// reference (at second granularity) renders as "now". Returns `None`
    /// when nothing can be rendered (`max_units` of zero, or the
    /// difference cannot be computed in this region).
    pub fn to_relative_string(
        &self,
        reference: AbsoluteTime,
        region: &Region,
        max_units: usize,
        abbreviated: bool,
    ) -> Option<String> {
        if max_units == 0 {
            return None;
        }
        const UNITS: [TimeUnit; 7] = [
            TimeUnit::Year,
            TimeUnit::Month,
            TimeUnit::Week,
            TimeUnit::Day,
            TimeUnit::Hour,
            TimeUnit::Minute,
            TimeUnit::Second,
        ];
        let delta = reference.difference(*self, &UNITS, region).ok()?;
        let parts: Vec<(TimeUnit, i64)> = delta
            .nonzero_units()
            .into_iter()
            .take(max_units)
            .collect();
        if parts.is_empty() {
            return Some("now".to_string());
        }
        let future = *self > reference;
        let body = parts
            .iter()
            .map(|&(unit, n)| phrase_unit(unit, n.unsigned_abs(), abbreviated))
            .collect::<Vec<_>>()
            .join(if abbreviated { " " } else { ", " });
        Some(if future {
            format!("in {body}")
        } else {
            format!("{body} ago")
        })
    }
}

fn phrase_unit(unit: TimeUnit, n: u64, abbreviated: bool) -> String {
    if abbreviated {
        let symbol = match unit {
            TimeUnit::Year => "y",
            TimeUnit::Month => "mo",
            TimeUnit::Week => "w",
            TimeUnit::Day => "d",
            TimeUnit::Hour => "h",
            TimeUnit::Minute => "m",
            TimeUnit::Second => "s",
            TimeUnit::Nanosecond => "ns",
        };
        return format!("{n}{symbol}");
    }
    let name = match unit {
        TimeUnit::Year => "year",
        TimeUnit::Month => "month",
        TimeUnit::Week => "week",
        TimeUnit::Day => "day",
        TimeUnit::Hour => "hour",
        TimeUnit::Minute => "minute",
        TimeUnit::Second => "second",
        TimeUnit::Nanosecond => "nanosecond",
    };
    format!("{n} {name}{}", if n == 1 { "" } else { "s" })
}
