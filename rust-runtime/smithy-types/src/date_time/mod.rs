/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamp members of generated shapes.

use num_integer::Integer;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

mod format;

#[cfg(feature = "serde-deserialize")]
mod de;
#[cfg(feature = "serde-serialize")]
mod ser;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// An instant in time, relative to the Unix epoch.
///
/// Stored as whole seconds plus a subsecond nanosecond component that is always in
/// `0..1_000_000_000`, so instants before the epoch have negative `secs` and a positive
/// nanosecond offset (`-1.5s` is `secs = -2, subsec_nanos = 500_000_000`).
///
/// Equality, ordering and hashing compare both components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> Self {
        let (seconds, millis) = epoch_millis.div_mod_floor(&MILLIS_PER_SECOND);
        DateTime {
            seconds,
            subsecond_nanos: millis as u32 * NANOS_PER_MILLI,
        }
    }

    /// Creates a `DateTime` from seconds and a nanosecond offset.
    ///
    /// Nanoseconds beyond one second carry into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        let (carry, subsecond_nanos) = subsecond_nanos.div_mod_floor(&NANOS_PER_SECOND);
        DateTime {
            seconds: seconds.saturating_add(carry as i64),
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from whole seconds plus a fraction of a second in `0.0..1.0`.
    ///
    /// Fractions outside that range are clamped.
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        let nanos = (fraction * NANOS_PER_SECOND as f64) as u32;
        DateTime::from_secs_and_nanos(epoch_seconds, nanos)
    }

    /// Converts a [`SystemTime`], including ones before the Unix epoch.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => DateTime::from_secs_and_nanos(after.as_secs() as i64, after.subsec_nanos()),
            Err(err) => DateTime::before_epoch(err.duration()),
        }
    }

    fn before_epoch(duration: Duration) -> Self {
        let seconds = -(duration.as_secs() as i64);
        match duration.subsec_nanos() {
            0 => DateTime::from_secs(seconds),
            nanos => DateTime {
                seconds: seconds - 1,
                subsecond_nanos: NANOS_PER_SECOND - nanos,
            },
        }
    }

    /// Whole seconds since the Unix epoch (floored).
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past [`secs`](DateTime::secs).
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns true if this `DateTime` has a nonzero subsecond component.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Milliseconds since the Unix epoch, truncating sub-millisecond precision.
    pub fn to_millis(&self) -> Result<i64, ConversionError> {
        self.seconds
            .checked_mul(MILLIS_PER_SECOND)
            .and_then(|millis| millis.checked_add((self.subsecond_nanos / NANOS_PER_MILLI) as i64))
            .ok_or(ConversionError("DateTime is too large to express in epoch milliseconds"))
    }

    /// Milliseconds since the Unix epoch with two's complement wrapping on overflow.
    pub(crate) fn wrapping_millis(&self) -> i64 {
        self.seconds
            .wrapping_mul(MILLIS_PER_SECOND)
            .wrapping_add((self.subsecond_nanos / NANOS_PER_MILLI) as i64)
    }

    /// Formats this `DateTime` in the given `format`.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::HttpDate => format::http_date::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }

    /// Parses a `DateTime` from a string using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        DateTime::from_system_time(time)
    }
}

/// Renders RFC 3339, falling back to epoch seconds for instants outside the years 0001-9999.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format::rfc3339::format(self) {
            Ok(rfc3339) => f.write_str(&rfc3339),
            Err(_) => f.write_str(&format::epoch_seconds::format(self)),
        }
    }
}

/// Wire formats for timestamps.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Format {
    /// RFC 3339 / ISO 8601, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// IMF-fixdate, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Decimal seconds since the epoch, e.g. `1576540098.52`
    EpochSeconds,
}

/// Failure to convert a [`DateTime`] into another representation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ConversionError(&'static str);

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl StdError for ConversionError {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum DateTimeParseErrorKind {
    /// The input was not a valid timestamp for the requested format.
    Invalid(Cow<'static, str>),
    /// A numeric component of the timestamp could not be parsed.
    IntParseError,
}

/// Returned when a string cannot be parsed into a [`DateTime`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DateTimeParseError {
    kind: DateTimeParseErrorKind,
}

impl DateTimeParseError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        DateTimeParseError {
            kind: DateTimeParseErrorKind::Invalid(message.into()),
        }
    }

    pub(crate) fn int_parse() -> Self {
        DateTimeParseError {
            kind: DateTimeParseErrorKind::IntParseError,
        }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateTimeParseErrorKind::*;
        match &self.kind {
            Invalid(msg) => write!(f, "invalid date-time: {}", msg),
            IntParseError => write!(f, "failed to parse int"),
        }
    }
}

impl StdError for DateTimeParseError {}

/// Returned when a [`DateTime`] cannot be represented in the requested [`Format`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DateTimeFormatError {
    message: Cow<'static, str>,
}

impl DateTimeFormatError {
    pub(crate) fn out_of_range(message: impl Into<Cow<'static, str>>) -> Self {
        DateTimeFormatError {
            message: message.into(),
        }
    }
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to format date-time: {}", self.message)
    }
}

impl StdError for DateTimeFormatError {}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn date_time_fmt() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(date_time.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18Z");
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let date_time = DateTime::from_fractional_secs(1576540098, 0.52);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn trailing_second_zero_is_kept() {
        let date_time = DateTime::from_secs(1576540090);
        assert_eq!(date_time.to_string(), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn from_millis_floors_negative_values() {
        let date_time = DateTime::from_millis(-1500);
        assert_eq!(date_time.secs(), -2);
        assert_eq!(date_time.subsec_nanos(), 500_000_000);
        assert_eq!(date_time.to_millis(), Ok(-1500));
    }

    #[test]
    fn nanos_carry_into_seconds() {
        let date_time = DateTime::from_secs_and_nanos(10, 2_500_000_000);
        assert_eq!(date_time, DateTime::from_millis(12_500));
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(250);
        assert_eq!(DateTime::from(before), DateTime::from_millis(-250));
    }

    #[test]
    fn to_millis_overflow() {
        assert!(DateTime::from_secs(i64::MAX).to_millis().is_err());
    }

    #[test]
    fn display_falls_back_to_epoch_seconds() {
        let date_time = DateTime::from_secs(i64::MAX);
        assert!(date_time.fmt(Format::DateTime).is_err());
        assert_eq!(date_time.to_string(), i64::MAX.to_string());
    }

    proptest! {
        #[test]
        fn millis_round_trip(millis in -62_135_596_800_000i64..253_402_300_799_999i64) {
            prop_assert_eq!(DateTime::from_millis(millis).to_millis(), Ok(millis));
        }

        #[test]
        fn rfc3339_round_trip(secs in -62_135_596_800i64..253_402_300_799i64, nanos in 0u32..1_000_000_000) {
            let date_time = DateTime::from_secs_and_nanos(secs, nanos);
            let formatted = date_time.fmt(Format::DateTime).unwrap();
            prop_assert_eq!(DateTime::from_str(&formatted, Format::DateTime), Ok(date_time));
        }

        #[test]
        fn epoch_seconds_round_trip(secs in any::<i64>(), nanos in 0u32..1_000_000_000) {
            let date_time = DateTime::from_secs_and_nanos(secs, nanos);
            let formatted = date_time.fmt(Format::EpochSeconds).unwrap();
            prop_assert_eq!(DateTime::from_str(&formatted, Format::EpochSeconds), Ok(date_time));
        }
    }
}
