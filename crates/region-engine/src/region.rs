//! Regions: the immutable calendar + timezone + locale triple used to
//! interpret an absolute instant, plus the process-wide default region.

use std::sync::{LazyLock, RwLock};

use chrono::Locale;
use chrono_tz::Tz;

use crate::engine::{CalendarEngine, GregorianEngine};
use crate::error::{RegionError, Result};

/// The calendar system of a region.
///
/// Only the proleptic Gregorian calendar ships today; the engine behind it
/// is a trait ([`CalendarEngine`]), so additional calendars are additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Calendar {
    #[default]
    Gregorian,
}

static GREGORIAN: GregorianEngine = GregorianEngine;

/// An immutable `{calendar, timezone, locale}` triple.
///
/// The calendar defines era/leap/week rules, the timezone defines the UTC
/// offset at each instant (DST-aware), and the locale affects symbolic
/// names and formatting only, never arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub calendar: Calendar,
    pub tz: Tz,
    pub locale: Locale,
}

/// Process-wide default region: `{Gregorian, UTC, host locale}` at startup.
/// Reads and writes swap the whole triple under the lock, so readers never
/// observe a partially-written region; last writer wins.
static DEFAULT_REGION: LazyLock<RwLock<Region>> = LazyLock::new(|| {
    RwLock::new(Region {
        calendar: Calendar::Gregorian,
        tz: Tz::UTC,
        locale: host_locale(),
    })
});

impl Region {
    pub fn new(calendar: Calendar, tz: Tz, locale: Locale) -> Self {
        Self { calendar, tz, locale }
    }

    /// Gregorian / UTC / POSIX locale.
    pub fn utc() -> Self {
        Self::new(Calendar::Gregorian, Tz::UTC, Locale::POSIX)
    }

    /// Build a Gregorian region from an IANA timezone name and a locale
    /// name (e.g. `"Europe/Paris"`, `"fr_FR"`).
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnresolvableRegion`] if either name is
    /// unknown.
    pub fn from_names(tz: &str, locale: &str) -> Result<Self> {
        Ok(Self::new(
            Calendar::Gregorian,
            parse_timezone(tz)?,
            parse_locale(locale)?,
        ))
    }

    pub fn with_tz(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The current process-wide default region.
    pub fn default_region() -> Region {
        match DEFAULT_REGION.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Replace the process-wide default region. The whole triple is swapped
    /// at once; concurrent readers see either the old or the new value.
    pub fn set_default_region(region: Region) {
        match DEFAULT_REGION.write() {
            Ok(mut guard) => *guard = region,
            Err(poisoned) => *poisoned.into_inner() = region,
        }
    }

    /// The calendar engine backing this region.
    pub fn engine(&self) -> &'static dyn CalendarEngine {
        match self.calendar {
            Calendar::Gregorian => &GREGORIAN,
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::default_region()
    }
}

/// Parse an IANA timezone name into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| RegionError::UnresolvableRegion(format!("unknown timezone '{s}'")))
}

/// Parse a locale name (e.g. "en_US", "nb_NO") into a `Locale`.
pub(crate) fn parse_locale(s: &str) -> Result<Locale> {
    let normalized = normalize_locale_name(s);
    Locale::try_from(normalized.as_str())
        .map_err(|_| RegionError::UnresolvableRegion(format!("unknown locale '{s}'")))
}

/// Strip encoding/modifier suffixes and normalize separators:
/// "en-US.UTF-8@latin" → "en_US".
fn normalize_locale_name(s: &str) -> String {
    let s = s.split('.').next().unwrap_or(s);
    let s = s.split('@').next().unwrap_or(s);
    s.replace('-', "_")
}

/// The host locale, read from `LC_ALL` / `LANG`, falling back to POSIX.
fn host_locale() -> Locale {
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if let Ok(locale) = parse_locale(&value) {
                return locale;
            }
        }
    }
    Locale::POSIX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_names() {
        let region = Region::from_names("Europe/Paris", "fr_FR").unwrap();
        assert_eq!(region.tz, Tz::Europe__Paris);
        assert_eq!(region.locale, Locale::fr_FR);
        assert_eq!(region.calendar, Calendar::Gregorian);
    }

    #[test]
    fn test_region_unknown_timezone() {
        let result = Region::from_names("Invalid/Zone", "en_US");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unresolvable region"), "got: {err}");
    }

    #[test]
    fn test_region_unknown_locale() {
        let result = Region::from_names("UTC", "xx_ZZ");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown locale"), "got: {err}");
    }

    #[test]
    fn test_locale_name_normalization() {
        assert_eq!(parse_locale("en_US.UTF-8").unwrap(), Locale::en_US);
        assert_eq!(parse_locale("en-US").unwrap(), Locale::en_US);
    }

    #[test]
    fn test_default_region_roundtrip() {
        let before = Region::default_region();
        let replacement = Region::utc().with_locale(Locale::de_DE);
        Region::set_default_region(replacement);
        assert_eq!(Region::default_region(), replacement);
        // Restore so other tests that read the default are unaffected.
        Region::set_default_region(before);
    }
}
