//! Month keys
//!
//! Budgets are set per calendar month and identified by a zero-padded
//! `YYYY-MM` key. Because the format is fixed-width, ordering the keys as
//! strings and ordering them chronologically agree.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, e.g. `2024-06`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(MonthParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the following month, `None` past 9999-12
    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year.checked_add(1)?, 1).ok()
        } else {
            Self::new(self.year, self.month + 1).ok()
        }
    }

    /// Get the preceding month, `None` before 0001-01
    pub fn prev(&self) -> Option<Self> {
        if self.month == 1 {
            Self::new(self.year.checked_sub(1)?, 12).ok()
        } else {
            Self::new(self.year, self.month - 1).ok()
        }
    }

    /// Human readable label, e.g. "June 2024"
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Every month from January of the previous year through December of
    /// the next year, oldest first
    ///
    /// This is the range offered when picking a month for a budget or report.
    ///
    /// Fails when any year of the range falls outside 1..=9999.
    pub fn selector_range(year: i32) -> Result<Vec<Self>, MonthParseError> {
        let first = year
            .checked_sub(1)
            .ok_or(MonthParseError::InvalidYear(year))?;
        let last = year
            .checked_add(1)
            .ok_or(MonthParseError::InvalidYear(year))?;
        Self::new(first, 1).map_err(|_| MonthParseError::InvalidYear(year))?;
        Self::new(last, 12).map_err(|_| MonthParseError::InvalidYear(year))?;

        (first..=last)
            .flat_map(|y| (1..=12).map(move |m| Self::new(y, m)))
            .collect()
    }

    /// Parse a strict `YYYY-MM` key
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = s[..4]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = s[5..]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month '{}': expected YYYY-MM", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month number: {}", m),
            MonthParseError::InvalidYear(y) => write!(f, "Invalid year: {}", y),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let june = key("2024-06");
        assert_eq!(june.year(), 2024);
        assert_eq!(june.month(), 6);
        assert_eq!(june.to_string(), "2024-06");
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for bad in ["2024-6", "24-06", "2024/06", "2024-06-01", "", "abcd-ef", " 2024-06"] {
            assert!(
                matches!(MonthKey::parse(bad), Err(MonthParseError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            MonthKey::parse("2024-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert_eq!(
            MonthKey::parse("2024-00"),
            Err(MonthParseError::InvalidMonth(0))
        );
        assert_eq!(MonthKey::parse("0000-01"), Err(MonthParseError::InvalidYear(0)));
    }

    #[test]
    fn test_ordering_matches_string_order() {
        let mut keys = vec![key("2024-10"), key("2023-12"), key("2024-02")];
        keys.sort();
        let as_strings: Vec<String> = keys.iter().map(ToString::to_string).collect();
        let mut sorted_strings = as_strings.clone();
        sorted_strings.sort();
        assert_eq!(as_strings, sorted_strings);
        assert_eq!(as_strings, vec!["2023-12", "2024-02", "2024-10"]);
    }

    #[test]
    fn test_contains() {
        let june = key("2024-06");
        assert!(june.contains(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
        assert!(!june.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
        assert!(!june.contains(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(key("2024-12").next(), Some(key("2025-01")));
        assert_eq!(key("2025-01").prev(), Some(key("2024-12")));
        assert_eq!(key("2024-06").next().and_then(|m| m.prev()), Some(key("2024-06")));
    }

    #[test]
    fn test_navigation_stops_at_year_bounds() {
        assert_eq!(key("9999-12").next(), None);
        assert_eq!(key("0001-01").prev(), None);
        assert_eq!(key("9999-11").next(), Some(key("9999-12")));
    }

    #[test]
    fn test_label() {
        assert_eq!(key("2024-06").label(), "June 2024");
        assert_eq!(key("2025-01").label(), "January 2025");
    }

    #[test]
    fn test_selector_range() {
        let months = MonthKey::selector_range(2025).unwrap();
        assert_eq!(months.len(), 36);
        assert_eq!(months[0], key("2024-01"));
        assert_eq!(months[35], key("2026-12"));
    }

    #[test]
    fn test_selector_range_rejects_years_at_the_edges() {
        for year in [i32::MIN, -5, 0, 1, 9999, 10_000, i32::MAX] {
            assert_eq!(
                MonthKey::selector_range(year),
                Err(MonthParseError::InvalidYear(year)),
                "year {year}"
            );
        }
        let months = MonthKey::selector_range(2).unwrap();
        assert_eq!(months[0].to_string(), "0001-01");
        assert!(months.iter().all(|m| MonthKey::parse(&m.to_string()) == Ok(*m)));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&key("2024-06")).unwrap();
        assert_eq!(json, "\"2024-06\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("2024-06"));
        assert!(serde_json::from_str::<MonthKey>("\"2024-6\"").is_err());
    }
}
