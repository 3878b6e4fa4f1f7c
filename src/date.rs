//! Publication date normalization
//!
//! OCDM dates come in three granularities (`YYYY-MM-DD`, `YYYY-MM`,
//! `YYYY`). SKG-IF wants a full timestamp, so missing components default
//! to the first month/day and the result is stamped as UTC.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::error::ConvertError;

/// Which components were present in the source date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePrecision {
    Day,
    Month,
    Year,
}

/// A parsed publication date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationDate {
    pub date: NaiveDate,
    pub precision: DatePrecision,
}

impl PublicationDate {
    /// Parse a date in `YYYY-MM-DD`, `YYYY-MM` or `YYYY` form
    ///
    /// The year must be exactly four ASCII digits, month and day one or
    /// two. Signs, whitespace and extra components are rejected.
    pub fn parse(raw: &str) -> Result<Self, ConvertError> {
        let invalid = || ConvertError::InvalidDate(raw.to_string());

        let parts: Vec<&str> = raw.split('-').collect();
        let (year, month, day, precision) = match parts.as_slice() {
            [y, m, d] => (*y, *m, *d, DatePrecision::Day),
            [y, m] => (*y, *m, "1", DatePrecision::Month),
            [y] => (*y, "1", "1", DatePrecision::Year),
            _ => return Err(invalid()),
        };

        let year = parse_digits(year, 4..=4).ok_or_else(invalid)?;
        let month = parse_digits(month, 1..=2).ok_or_else(invalid)?;
        let day = parse_digits(day, 1..=2).ok_or_else(invalid)?;

        let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)?;
        Ok(Self { date, precision })
    }

    /// Render as an ISO-8601 UTC timestamp at midnight
    pub fn to_timestamp(&self) -> String {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::default()))
            .to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

/// Parse an unsigned run of ASCII digits whose length is within `width`
fn parse_digits(raw: &str, width: RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&raw.len()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Normalize a non-empty `pub_date` into an ISO-8601 UTC timestamp
///
/// "2020-05" -> "2020-05-01T00:00:00+00:00"
pub fn normalize(raw: &str) -> Result<String, ConvertError> {
    PublicationDate::parse(raw).map(|d| d.to_timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_date() {
        assert_eq!(normalize("2020-05-14").unwrap(), "2020-05-14T00:00:00+00:00");
    }

    #[test]
    fn test_normalize_year_month() {
        assert_eq!(normalize("2020-05").unwrap(), "2020-05-01T00:00:00+00:00");
    }

    #[test]
    fn test_normalize_year() {
        assert_eq!(normalize("2021").unwrap(), "2021-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_precision() {
        assert_eq!(
            PublicationDate::parse("2020-05-14").unwrap().precision,
            DatePrecision::Day
        );
        assert_eq!(
            PublicationDate::parse("2020-05").unwrap().precision,
            DatePrecision::Month
        );
        assert_eq!(
            PublicationDate::parse("2020").unwrap().precision,
            DatePrecision::Year
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(matches!(normalize("May 2020"), Err(ConvertError::InvalidDate(_))));
        assert!(normalize("2020-13").is_err());
        assert!(normalize("2020-02-30").is_err());
        assert!(normalize("").is_err());
    }

    #[test]
    fn test_normalize_accepts_single_digit_month_and_day() {
        assert_eq!(normalize("2020-5-4").unwrap(), "2020-05-04T00:00:00+00:00");
    }

    #[test]
    fn test_normalize_requires_four_digit_unsigned_year() {
        for raw in ["202", "20200", "+2020", "-2020", " 2020", "2020 "] {
            assert!(
                matches!(normalize(raw), Err(ConvertError::InvalidDate(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_normalize_rejects_padded_or_extra_components() {
        for raw in [
            "2020- 05",
            "2020-05- 1",
            "2020-005",
            "2020-05-014",
            "2020-05-14-01",
            "2020--05",
        ] {
            assert!(
                matches!(normalize(raw), Err(ConvertError::InvalidDate(_))),
                "accepted {:?}",
                raw
            );
        }
    }
}
