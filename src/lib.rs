mod consts;
mod prelude;
mod range;
mod types;
mod weekday;

pub mod cli;
pub mod logging;

pub use consts::*;
pub use range::{DateRange, Days, RangeError, count_weekend_days};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use weekday::{Weekday, day_of_week};

use crate::prelude::*;
use std::str::FromStr;

/// A validated proleptic Gregorian calendar date.
///
/// Every value is a real date: the fields are private and every constructor
/// checks the month and the day against the month length. Ordering is
/// chronological, which for the canonical `YYYY-MM-DD` text is the same as
/// comparing the strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid {field} width in {input:?}: expected {expected} digits, found {found}")]
    InvalidWidth {
        input: String,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Returns `true` if `s` is a canonical `YYYY-MM-DD` string naming a real date.
///
/// The check is strict: exactly three `-`-separated fields of 4, 2 and 2
/// digits, a month in `1..=12` and a day that exists in that month. Never
/// panics.
pub fn is_valid_date(s: &str) -> bool {
    s.parse::<CalendarDate>().is_ok()
}

impl CalendarDate {
    /// Creates a date from numeric components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` if the
    /// components do not name a real date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month)?;
        Ok(Self {
            year: Year::new(year),
            month: month_typed,
            day: day_typed,
        })
    }

    /// Creates a date from typed components, checking the day against the month length.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        if day.get() > days_in_month(year.get(), month.get()) {
            return Err(ParseError::InvalidDay {
                year: year.get(),
                month: month.get(),
                day: day.get(),
            });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns (year, month, day)
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// The next calendar day, rolling over month and year ends.
    ///
    /// # Panics
    /// Panics on December 31 of year `i32::MAX`, which has no representable
    /// successor. Use [`CalendarDate::checked_succ`] to handle that case.
    #[must_use]
    pub const fn succ(self) -> Self {
        match self.checked_succ() {
            Some(next) => next,
            None => panic!("no calendar date after the last day of year i32::MAX"),
        }
    }

    /// The next calendar day, or `None` if the year would overflow.
    pub const fn checked_succ(self) -> Option<Self> {
        match next_day(self.year(), self.month(), self.day()) {
            Some((year, month, day)) => Some(Self {
                year: Year::new(year),
                month: Month::from_valid(month),
                day: Day::from_valid(day),
            }),
            None => None,
        }
    }

    pub const fn weekday(&self) -> Weekday {
        weekday::weekday(self.year(), self.month(), self.day())
    }

    #[inline]
    pub const fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }
}

// --- successor helpers ---
const fn next_month(year: i32, month: u8) -> Option<(i32, u8)> {
    if month == DECEMBER {
        match year.checked_add(1) {
            Some(next_year) => Some((next_year, JANUARY)),
            None => None,
        }
    } else {
        Some((year, month + 1))
    }
}

const fn next_day(year: i32, month: u8, day: u8) -> Option<(i32, u8, u8)> {
    if day < days_in_month(year, month) {
        Some((year, month, day + 1))
    } else {
        match next_month(year, month) {
            Some((next_year, next_month)) => Some((next_year, next_month, MIN_DAY)),
            None => None,
        }
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected 2 {DATE_SEPARATOR} separators, found {} in {s:?}",
                parts.len() - 1
            )));
        };

        // All widths are checked before any field is read as a number.
        Self::check_width(s, "year", year, YEAR_WIDTH)?;
        Self::check_width(s, "month", month, MONTH_WIDTH)?;
        Self::check_width(s, "day", day, DAY_WIDTH)?;

        let year = Self::parse_digits::<i32>(year)?;
        let month = Self::parse_digits::<u8>(month)?;
        let day = Self::parse_digits::<u8>(day)?;

        Self::new(year, month, day)
    }
}

impl CalendarDate {
    fn check_width(
        input: &str,
        field: &'static str,
        value: &str,
        expected: usize,
    ) -> Result<(), ParseError> {
        if value.len() == expected {
            Ok(())
        } else {
            Err(ParseError::InvalidWidth {
                input: input.to_owned(),
                field,
                expected,
                found: value.len(),
            })
        }
    }

    /// Parses a field made only of ASCII digits; signs and whitespace are rejected.
    fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
