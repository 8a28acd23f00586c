//! Request date handling for monthly products.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Day of month used to pin a request inside the monthly product's validity interval.
pub const MID_MONTH_DAY: u32 = 15;

/// A requested month, parsed from a `YYYY-MM-DD` string.
///
/// The day is checked for shape only and then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestDate {
    year: i32,
    month: u32,
}

impl RequestDate {
    /// Build a date from numeric parts.
    ///
    /// The year must fit the four-digit wire form. [`RequestDate::parse`]
    /// guarantees that already, so the range check only matters here.
    pub fn new(year: i32, month: u32) -> Result<Self, DateParseError> {
        if !(1..=12).contains(&month) {
            return Err(DateParseError::InvalidMonth(month));
        }
        if !(0..=9999).contains(&year) {
            return Err(DateParseError::InvalidFormat(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// Parse a `YYYY-MM-DD` date string.
    ///
    /// Exactly four digits, dash, two digits, dash, two digits; month 01-12.
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shape_ok {
            return Err(DateParseError::InvalidFormat(s.to_string()));
        }

        // All ASCII digits at this point, so the slices are valid and parse cannot fail.
        let year: i32 = s[0..4]
            .parse()
            .map_err(|_| DateParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = s[5..7]
            .parse()
            .map_err(|_| DateParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Midnight UTC on the 15th of this month.
    pub fn month_timestamp(&self) -> DateTime<Utc> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, MID_MONTH_DAY)
            .unwrap_or(NaiveDate::MIN);
        Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
    }

    /// The catalog `datetime` value, e.g. `2022-07-15T00:00:00Z`.
    pub fn stac_datetime(&self) -> String {
        self.month_timestamp()
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }
}

impl FromStr for RequestDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RequestDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateParseError {
    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidFormat(String),

    #[error("Invalid month: {0:02}. Expected 01-12")]
    InvalidMonth(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_ignores_day() {
        let a = RequestDate::parse("2022-07-01").unwrap();
        let b = RequestDate::parse("2022-07-31").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.year(), 2022);
        assert_eq!(a.month(), 7);
    }

    #[test]
    fn test_month_timestamp_is_mid_month_midnight() {
        let ts = RequestDate::parse("2022-07-04").unwrap().month_timestamp();
        assert_eq!(ts.year(), 2022);
        assert_eq!(ts.month(), 7);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.minute(), 0);
    }

    #[test]
    fn test_stac_datetime() {
        let d = RequestDate::parse("1999-12-31").unwrap();
        assert_eq!(d.stac_datetime(), "1999-12-15T00:00:00Z");
    }

    #[test]
    fn test_rejects_bad_shapes() {
        for s in ["abc", "2024-1-1", "2024/01/01", "2024-01-011", " 2024-01-01", "２０２４-01-01"] {
            assert!(
                matches!(RequestDate::parse(s), Err(DateParseError::InvalidFormat(_))),
                "{s} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_month_out_of_range() {
        assert_eq!(
            RequestDate::parse("2024-13-01"),
            Err(DateParseError::InvalidMonth(13))
        );
        assert_eq!(
            RequestDate::parse("2024-00-10"),
            Err(DateParseError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_new_rejects_years_outside_four_digits() {
        assert!(RequestDate::new(-1, 7).is_err());
        assert!(RequestDate::new(10_000, 7).is_err());
        assert!(RequestDate::new(2022, 7).is_ok());
    }
}
