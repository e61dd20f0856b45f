//! Validated entry dates.
//!
//! An entry's identity is its 8-digit `YYYYMMDD` date, which doubles as the
//! file stem on disk. The date is derived solely from the file name, never
//! from file content.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").unwrap());

/// The input was not exactly eight digits, or not a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an 8-digit calendar date: {input:?}")]
pub struct InvalidDate {
    pub input: String,
}

/// The date of one entry, as carried in its file name.
///
/// Construction goes through [`EntryDate::parse`], so a value of this type is
/// always a real calendar date. Ordering is chronological, which for the
/// compact form is also lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    /// Parses an 8-digit `YYYYMMDD` string.
    pub fn parse(input: &str) -> Result<Self, InvalidDate> {
        let input = input.trim();
        if !DATE_RE.is_match(input) {
            return Err(InvalidDate {
                input: input.to_string(),
            });
        }
        NaiveDate::parse_from_str(input, "%Y%m%d")
            .map(Self)
            .map_err(|_| InvalidDate {
                input: input.to_string(),
            })
    }

    /// Today's date in local time.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// `20240115`
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// `2024-01-15`, the human-readable form used on rendered pages.
    pub fn hyphenated(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `2024年01月`, the sidebar grouping label.
    pub fn month_label(&self) -> String {
        self.0.format("%Y年%m月").to_string()
    }

    /// `20240115.txt`
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.compact())
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compact())
    }
}

impl FromStr for EntryDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_date() {
        let d = EntryDate::parse("20240115").unwrap();
        assert_eq!(d.compact(), "20240115");
        assert_eq!(d.hyphenated(), "2024-01-15");
        assert_eq!(d.file_name(), "20240115.txt");
    }

    #[test]
    fn month_label_is_zero_padded() {
        let d = EntryDate::parse("20240105").unwrap();
        assert_eq!(d.month_label(), "2024年01月");
    }

    #[test]
    fn rejects_wrong_length_and_non_digits() {
        assert!(EntryDate::parse("2024011").is_err());
        assert!(EntryDate::parse("202401155").is_err());
        assert!(EntryDate::parse("2024011a").is_err());
        assert!(EntryDate::parse("").is_err());
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(EntryDate::parse("20241301").is_err());
        assert!(EntryDate::parse("20240230").is_err());
        assert!(EntryDate::parse("20240100").is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let older = EntryDate::parse("20231220").unwrap();
        let newer = EntryDate::parse("20240110").unwrap();
        assert!(newer > older);
    }

    #[test]
    fn from_str_round_trips_display() {
        let d: EntryDate = "20240115".parse().unwrap();
        assert_eq!(d.to_string(), "20240115");
    }
}
