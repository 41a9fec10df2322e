//! A calendar month in a specific year, e.g. "2025-12".

use std::{fmt::Display, str::FromStr};

use time::{Date, Month, OffsetDateTime};

use crate::Error;

/// A calendar month in a specific year.
///
/// Expenses are matched against a month by comparing the year and month of their date,
/// never by comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Create a new year-month.
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month containing `now`.
    pub fn current(now: OffsetDateTime) -> Self {
        Self::from(now.date())
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Parse the year and month from the first two `-` separated parts of `s`.
    ///
    /// Anything after the month is ignored, so "2025-12-01" is December 2025. Use
    /// [str::parse] to only accept "YYYY-MM".
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if the first two parts are not a year and a month.
    pub fn from_leading_parts(s: &str) -> Result<Self, Error> {
        let mut parts = s.trim().splitn(3, '-');

        match (parts.next(), parts.next()) {
            (Some(year), Some(month)) => format!("{year}-{month}")
                .parse()
                .map_err(|_| Error::InvalidMonth(s.to_owned())),
            _ => Err(Error::InvalidMonth(s.to_owned())),
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl From<Date> for YearMonth {
    fn from(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// Parse a string in the format "YYYY-MM".
    ///
    /// The parts are parsed as integers, so "2025-1" is January 2025.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(s.to_owned());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Ok(Self::new(year, month))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}
