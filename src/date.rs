use crate::error::{Result, StintError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date as entered by the user and stored on disk.
///
/// Ordering is chronological: year, then month, then day. The only way to
/// obtain a `Date` outside this module is [`Date::parse`], so every value in
/// circulation is a real Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date {
    year: u32,
    month: u32,
    day: u32,
}

impl Date {
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Parses a `dd-MM-yyyy` string into a `Date`.
    ///
    /// The shape check (two digits, dash, two digits, dash, four digits) and
    /// the calendar check fail with different errors so callers can tell a
    /// malformed string from an impossible date like `31-02-2025`.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StintError::InvalidDateFormat);
        }

        if !matches_shape(trimmed) {
            return Err(StintError::InvalidDateFormat);
        }

        let mut parts = trimmed.split('-');
        // The shape check guarantees three all-digit segments.
        let day: u32 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or(StintError::InvalidDateFormat)?;
        let month: u32 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or(StintError::InvalidDateFormat)?;
        let year: u32 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or(StintError::InvalidDateFormat)?;

        if !is_valid_date(day, month, year) {
            return Err(StintError::InvalidDate(trimmed.to_string()));
        }

        Ok(Self { year, month, day })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

/// Strict `\d{2}-\d{2}-\d{4}` without pulling in a regex engine.
fn matches_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

fn is_valid_date(day: u32, month: u32, year: u32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    if day < 1 {
        return false;
    }
    let max_day = match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };
    day <= max_day
}

fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn parses_valid_date() {
        let d = date("09-10-2025");
        assert_eq!(d.day(), 9);
        assert_eq!(d.month(), 10);
        assert_eq!(d.year(), 2025);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(date("  09-10-2025 "), date("09-10-2025"));
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(
            Date::parse("   "),
            Err(StintError::InvalidDateFormat)
        ));
    }

    #[test]
    fn rejects_wrong_shape() {
        for bad in ["9-10-2025", "09/10/2025", "09-10-25", "2025-10-09", "abc"] {
            assert!(
                matches!(Date::parse(bad), Err(StintError::InvalidDateFormat)),
                "expected format error for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        for bad in ["32-01-2025", "00-01-2025", "15-13-2025", "31-04-2025"] {
            assert!(
                matches!(Date::parse(bad), Err(StintError::InvalidDate(_))),
                "expected calendar error for {bad:?}"
            );
        }
    }

    #[test]
    fn leap_year_boundary() {
        assert!(Date::parse("29-02-2024").is_ok());
        assert!(matches!(
            Date::parse("29-02-2023"),
            Err(StintError::InvalidDate(_))
        ));
        // Century rule: 1900 is not a leap year, 2000 is.
        assert!(Date::parse("29-02-1900").is_err());
        assert!(Date::parse("29-02-2000").is_ok());
    }

    #[test]
    fn orders_chronologically() {
        assert!(date("31-12-2024") < date("01-01-2025"));
        assert!(date("01-02-2025") < date("02-02-2025"));
        assert!(date("15-03-2025") < date("01-04-2025"));
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(date("03-04-2025").to_string(), "03-04-2025");
    }
}
