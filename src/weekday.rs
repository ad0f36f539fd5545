use crate::consts::{DAYS_PER_WEEK, MARCH, WEEKDAY_MONTH_OFFSETS};
use crate::prelude::*;

/// Day of the week, numbered from Sunday = 0 to Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const WEEK: [Weekday; DAYS_PER_WEEK as usize] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Looks up a weekday by its Sunday-based index (0..=6).
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < DAYS_PER_WEEK {
            Some(WEEK[index as usize])
        } else {
            None
        }
    }

    /// Sunday-based index: Sunday = 0 … Saturday = 6.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// The weekday `days` days after this one.
    pub const fn add_days(self, days: u64) -> Self {
        let shift = (days % DAYS_PER_WEEK as u64) as u8;
        WEEK[((self.index() + shift) % DAYS_PER_WEEK) as usize]
    }
}

/// Day of the week for a valid proleptic Gregorian date, as a Sunday-based
/// index (0 = Sunday … 6 = Saturday).
///
/// January and February are counted as the last months of the previous year,
/// so the leap-day correction for a year only applies from March onwards.
/// Floor division keeps the result correct for years before 1 AD. The sum is
/// taken in `i64`, so every `i32` year is in range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    let year = year as i64;
    let y = if month < MARCH { year - 1 } else { year };
    let sum = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + WEEKDAY_MONTH_OFFSETS[(month - 1) as usize]
        + day as i64;
    sum.rem_euclid(DAYS_PER_WEEK as i64) as u8
}

/// [`day_of_week`] as a [`Weekday`].
pub const fn weekday(year: i32, month: u8, day: u8) -> Weekday {
    WEEK[day_of_week(year, month, day) as usize]
}
