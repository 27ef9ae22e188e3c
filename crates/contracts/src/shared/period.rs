//! Calendar periods in the `YYYY-MM` form used by every time series endpoint.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("period '{0}' is not in YYYY-MM form")]
    Malformed(String),
    #[error("month {month} in period '{period}' is outside 01..12")]
    MonthOutOfRange { period: String, month: u32 },
    #[error("unknown month label '{0}'")]
    UnknownMonth(String),
}

fn calendar_month(month: u32) -> Option<Month> {
    u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok())
}

fn short_name(month: Month) -> &'static str {
    &month.name()[..3]
}

/// Returns the abbreviation for a 1-based month number.
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    calendar_month(month).map(short_name)
}

/// Returns the 1-based month number for a label such as `"Mar"` (any case).
pub fn month_number(label: &str) -> Option<u32> {
    label.parse::<Month>().ok().map(|m| m.number_from_month())
}

/// A validated `YYYY-MM` period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Parses `"2024-03"`. Exactly one hyphen, a four digit year and a two digit
    /// month in `01..12` are required.
    pub fn parse(raw: &str) -> Result<Self, PeriodError> {
        let malformed = || PeriodError::Malformed(raw.to_string());

        let (year_part, month_part) = raw.split_once('-').ok_or_else(malformed)?;
        if month_part.contains('-')
            || year_part.len() != 4
            || month_part.len() != 2
            || !year_part.chars().all(|c| c.is_ascii_digit())
            || !month_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }

        let year: i32 = year_part.parse().map_err(|_| malformed())?;
        let month: u32 = month_part.parse().map_err(|_| malformed())?;
        if calendar_month(month).is_none() {
            return Err(PeriodError::MonthOutOfRange {
                period: raw.to_string(),
                month,
            });
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(malformed)?;

        Ok(Self::from(first_day))
    }

    /// The first calendar day of the period.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn month_abbreviation(&self) -> &'static str {
        month_abbreviation(self.month).unwrap_or("")
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The year prefix of a period string (everything before the first hyphen).
///
/// Does not validate the rest of the string; use [`YearMonth::parse`] for that.
pub fn year_prefix(raw: &str) -> &str {
    raw.split_once('-').map(|(year, _)| year).unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_period() {
        let period = YearMonth::parse("2024-03").unwrap();
        assert_eq!(period, YearMonth { year: 2024, month: 3 });
        assert_eq!(period.month_abbreviation(), "Mar");
        assert_eq!(period.to_string(), "2024-03");
    }

    #[test]
    fn test_every_month_maps_to_its_abbreviation() {
        let expected = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        for (idx, label) in expected.iter().enumerate() {
            let raw = format!("2023-{:02}", idx + 1);
            assert_eq!(YearMonth::parse(&raw).unwrap().month_abbreviation(), *label);
        }
    }

    #[test]
    fn test_month_out_of_range_is_an_error() {
        assert_eq!(
            YearMonth::parse("2024-13"),
            Err(PeriodError::MonthOutOfRange {
                period: "2024-13".to_string(),
                month: 13
            })
        );
        assert!(matches!(
            YearMonth::parse("2024-00"),
            Err(PeriodError::MonthOutOfRange { month: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_periods() {
        for raw in ["2024", "2024-3", "2024-03-01", "24-03", "abcd-ef", ""] {
            assert!(
                matches!(YearMonth::parse(raw), Err(PeriodError::Malformed(_))),
                "{raw} should be malformed"
            );
        }
    }

    #[test]
    fn test_month_lookup_helpers() {
        assert_eq!(month_abbreviation(1), Some("Jan"));
        assert_eq!(month_abbreviation(12), Some("Dec"));
        assert_eq!(month_abbreviation(0), None);
        assert_eq!(month_abbreviation(13), None);
        assert_eq!(month_number("nov"), Some(11));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("Foo"), None);
    }

    #[test]
    fn test_period_matches_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 17).unwrap();
        let period = YearMonth::from(date);
        assert_eq!(period, YearMonth::parse("2023-11").unwrap());
        assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2023, 11, 1));
        assert_eq!(period.month_abbreviation(), "Nov");
    }

    #[test]
    fn test_year_prefix() {
        assert_eq!(year_prefix("2023-11"), "2023");
        assert_eq!(year_prefix("2023"), "2023");
    }
}
