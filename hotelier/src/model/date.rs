//! Calendar dates used for bookings and repairs.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use super::InvalidValueError;

/// Canonical storage format of a date.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years whose canonical text has exactly four digits.
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// A calendar date without time zone.
///
/// The canonical text form is ISO `YYYY-MM-DD`, which sorts the same way as
/// the dates themselves. Years are limited to 1..=9999 so that this holds.
///
/// # Examples
///
/// ```
/// use hotelier::BookingDate;
///
/// let date: BookingDate = "2024-06-01".parse().unwrap();
/// assert_eq!(date.to_string(), "2024-06-01");
/// assert!("06/01/2024".parse::<BookingDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns an error if the combination is not a real calendar date or the
    /// year is outside 1..=9999.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InvalidValueError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| {
                InvalidValueError::new("date", format!("{year:04}-{month:02}-{day:02} does not exist"))
            })
            .and_then(Self::try_from)
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for BookingDate {
    type Error = InvalidValueError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if YEARS.contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(InvalidValueError::new(
                "date",
                format!("year {} is outside 1..=9999", date.year()),
            ))
        }
    }
}

impl FromStr for BookingDate {
    type Err = InvalidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|e| InvalidValueError::new("date", format!("'{s}': {e}")))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// An inclusive range of dates.
///
/// # Examples
///
/// ```
/// use hotelier::{BookingDate, DateRange};
///
/// let start = BookingDate::from_ymd(2024, 6, 1).unwrap();
/// let end = BookingDate::from_ymd(2024, 6, 30).unwrap();
/// let range = DateRange::new(start, end).unwrap();
/// assert!(range.contains(end));
/// assert!(DateRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: BookingDate,
    end: BookingDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`.
    pub fn new(start: BookingDate, end: BookingDate) -> Result<Self, InvalidValueError> {
        if start > end {
            return Err(InvalidValueError::new(
                "date range",
                format!("start {start} is after end {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> BookingDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> BookingDate {
        self.end
    }

    /// Returns `true` if `date` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: BookingDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
