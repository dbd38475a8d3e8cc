/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{DateTime, DateTimeFormatError, DateTimeParseError, NANOS_PER_SECOND};
use chrono::{Datelike, Utc};

fn to_chrono(date_time: &DateTime) -> Result<chrono::DateTime<Utc>, DateTimeFormatError> {
    let converted = chrono::DateTime::<Utc>::from_timestamp(date_time.secs(), date_time.subsec_nanos())
        .ok_or_else(|| {
            DateTimeFormatError::out_of_range(format!(
                "{} seconds since the epoch is not a representable date",
                date_time.secs()
            ))
        })?;
    if !(1..=9999).contains(&converted.year()) {
        return Err(DateTimeFormatError::out_of_range(
            "years outside of 0001-9999 are not supported",
        ));
    }
    Ok(converted)
}

fn from_chrono(converted: chrono::DateTime<Utc>) -> DateTime {
    // Leap seconds surface as nanos >= 1s; let them carry.
    DateTime::from_secs_and_nanos(converted.timestamp(), converted.timestamp_subsec_nanos())
}

pub(super) mod rfc3339 {
    use super::{from_chrono, to_chrono};
    use crate::date_time::{DateTime, DateTimeFormatError, DateTimeParseError};
    use chrono::{SecondsFormat, Utc};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let formatted = to_chrono(date_time)?.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        if !date_time.has_subsec_nanos() {
            return Ok(formatted);
        }
        // AutoSi pads the fraction to 3, 6 or 9 digits
        let mut trimmed = formatted
            .trim_end_matches('Z')
            .trim_end_matches('0')
            .to_owned();
        trimmed.push('Z');
        Ok(trimmed)
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let parsed = chrono::DateTime::parse_from_rfc3339(s.trim())
            .map_err(|err| DateTimeParseError::invalid(err.to_string()))?;
        Ok(from_chrono(parsed.with_timezone(&Utc)))
    }
}

pub(super) mod http_date {
    use super::{from_chrono, to_chrono};
    use crate::date_time::{DateTime, DateTimeFormatError, DateTimeParseError};
    use chrono::NaiveDateTime;

    const FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
    const FORMAT_MILLIS: &str = "%a, %d %b %Y %H:%M:%S%.3f GMT";
    const PARSE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S%.f GMT";

    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    /// Ok: "Mon, 16 Dec 2019 23:48:18.520 GMT"
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let converted = to_chrono(date_time)?;
        let pattern = if date_time.has_subsec_nanos() {
            FORMAT_MILLIS
        } else {
            FORMAT
        };
        Ok(converted.format(pattern).to_string())
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let s = s.trim();
        if !s.is_ascii() {
            return Err(DateTimeParseError::invalid("not ascii"));
        }
        if let Some((_, fraction)) = s.split_once('.') {
            if fraction.trim_end_matches(" GMT").len() > 3 {
                return Err(DateTimeParseError::invalid("too much precision"));
            }
        }
        let parsed = NaiveDateTime::parse_from_str(s, PARSE_FORMAT)
            .map_err(|err| DateTimeParseError::invalid(err.to_string()))?;
        Ok(from_chrono(parsed.and_utc()))
    }
}

pub(super) mod epoch_seconds {
    use super::NANOS_PER_SECOND;
    use crate::date_time::{DateTime, DateTimeParseError};

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Ok: "-1.5"
    pub(crate) fn format(date_time: &DateTime) -> String {
        let (secs, nanos) = (date_time.secs(), date_time.subsec_nanos());
        if nanos == 0 {
            return secs.to_string();
        }
        let (sign, whole, nanos) = if secs < 0 {
            // -2s + 0.5s is written as -1.5
            ("-", -(secs + 1), NANOS_PER_SECOND - nanos)
        } else {
            ("", secs, nanos)
        };
        let fraction = format!("{:0>9}", nanos);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let s = s.trim();
        let negative = s.starts_with('-');
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };
        let whole: i64 = whole.parse().map_err(|_| DateTimeParseError::int_parse())?;
        let nanos = match fraction {
            None => 0,
            Some(fraction) => parse_fraction(fraction)?,
        };
        if negative && nanos != 0 {
            let secs = whole
                .checked_sub(1)
                .ok_or_else(|| DateTimeParseError::invalid("epoch seconds out of range"))?;
            Ok(DateTime::from_secs_and_nanos(secs, NANOS_PER_SECOND - nanos))
        } else {
            Ok(DateTime::from_secs_and_nanos(whole, nanos))
        }
    }

    fn parse_fraction(fraction: &str) -> Result<u32, DateTimeParseError> {
        if fraction.is_empty() || fraction.len() > 9 {
            return Err(DateTimeParseError::invalid(
                "fractional seconds must have between 1 and 9 digits",
            ));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateTimeParseError::int_parse());
        }
        let digits: u32 = fraction
            .parse()
            .map_err(|_| DateTimeParseError::int_parse())?;
        Ok(digits * 10u32.pow(9 - fraction.len() as u32))
    }
}

#[cfg(test)]
mod test {
    use crate::date_time::{DateTime, DateTimeParseError, Format};

    #[test]
    fn http_date_parse() {
        let basic = "Mon, 16 Dec 2019 23:48:18 GMT";
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(DateTime::from_str(basic, Format::HttpDate), Ok(date_time));
        assert_eq!(
            DateTime::from_str("Mon, 16 Dec 2019 23:48:18.000 GMT", Format::HttpDate),
            Ok(date_time)
        );
        assert_eq!(
            DateTime::from_str("Mon, 16 Dec 2019 23:48:18.12 GMT", Format::HttpDate),
            Ok(DateTime::from_millis(1576540098120))
        );
    }

    #[test]
    fn http_date_too_much_fraction() {
        assert_eq!(
            DateTime::from_str("Mon, 16 Dec 2019 23:48:18.1212 GMT", Format::HttpDate),
            Err(DateTimeParseError::invalid("too much precision"))
        );
    }

    #[test]
    fn rfc3339_with_offset() {
        assert_eq!(
            DateTime::from_str("2019-12-17T01:48:18+02:00", Format::DateTime),
            Ok(DateTime::from_secs(1576540098))
        );
    }

    #[test]
    fn rfc3339_rejects_garbage() {
        assert!(DateTime::from_str("yesterday", Format::DateTime).is_err());
    }

    #[test]
    fn negative_epoch_seconds() {
        let date_time = DateTime::from_millis(-1500);
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "-1.5");
        assert_eq!(DateTime::from_str("-1.5", Format::EpochSeconds), Ok(date_time));
        assert_eq!(
            DateTime::from_str("-0.25", Format::EpochSeconds),
            Ok(DateTime::from_millis(-250))
        );
    }

    #[test]
    fn epoch_seconds_rejects_bad_fraction() {
        assert_eq!(
            DateTime::from_str("12.", Format::EpochSeconds),
            Err(DateTimeParseError::invalid(
                "fractional seconds must have between 1 and 9 digits"
            ))
        );
        assert_eq!(
            DateTime::from_str("12.5x", Format::EpochSeconds),
            Err(DateTimeParseError::int_parse())
        );
    }
}
