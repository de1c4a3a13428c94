use std::str::FromStr;

use crate::consts::{DASH_SEPARATOR, DATE_COMPONENTS, MAX_MONTH, SLASH_SEPARATOR};
use crate::prelude::*;
use crate::types::{Day, Month};

/// A calendar-valid (year, month, day) triple parsed from a loosely formatted string.
///
/// Ordering is chronological: year first, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct ParsedDate {
    year:  i32,
    month: Month,
    day:   Day,
}

/// Why a date string could not be turned into a [`ParsedDate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    /// No date string was supplied at all.
    #[error("Missing date")]
    Missing,

    /// The string did not split into year, month and day.
    #[error("Invalid date format: expected {expected} components, found {0}", expected = DATE_COMPONENTS)]
    ComponentCount(usize),

    /// A component is neither an integer nor, for the month, an English month name.
    #[error("Invalid date component: {0:?}")]
    NotNumeric(String),

    /// Negative years have no dash-separated text form.
    #[error("Invalid year: {0} (must not be negative)")]
    InvalidYear(i32),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u32),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u32 },
}

impl ParsedDate {
    /// Builds a date from numeric components, checking month and day against the calendar.
    ///
    /// # Errors
    /// Returns `DateParseError::InvalidYear`, `DateParseError::InvalidMonth` or
    /// `DateParseError::InvalidDay`.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateParseError> {
        if year < 0 {
            return Err(DateParseError::InvalidYear(year));
        }
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Parses an optional input, treating `None` as a missing date.
    ///
    /// # Errors
    /// Returns `DateParseError::Missing` for `None`, otherwise whatever [`FromStr`] reports.
    pub fn parse_input(input: Option<&str>) -> Result<Self, DateParseError> {
        input.ok_or(DateParseError::Missing)?.parse()
    }

    /// Parses an optional input, discarding the reason for failure.
    pub fn parse_opt(input: Option<&str>) -> Option<Self> {
        Self::parse_input(input)
            .inspect_err(|err| tracing::trace!(?input, %err, "date rejected"))
            .ok()
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to a plain (year, month, day) tuple
    pub const fn to_columns(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }

    fn parse_year(s: &str) -> Result<i32, DateParseError> {
        s.parse::<i32>()
            .map_err(|_| DateParseError::NotNumeric(s.to_owned()))
    }

    /// Month may be numeric or a full English month name.
    fn parse_month(s: &str) -> Result<u32, DateParseError> {
        match Month::from_name(s) {
            Some(month) => Ok(u32::from(month.get())),
            None => Self::parse_number(s),
        }
    }

    fn parse_number(s: &str) -> Result<u32, DateParseError> {
        s.parse::<u32>()
            .map_err(|_| DateParseError::NotNumeric(s.to_owned()))
    }
}

impl FromStr for ParsedDate {
    type Err = DateParseError;

    /// Accepts `Y-M-D` or `Y/M/D`. The dash wins whenever one is present, so
    /// mixed separators are split on the dash only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = if s.contains(DASH_SEPARATOR) {
            DASH_SEPARATOR
        } else {
            SLASH_SEPARATOR
        };

        let parts: Vec<&str> = s.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateParseError::ComponentCount(parts.len()));
        };

        // All components must be numeric before any calendar check runs
        let year = Self::parse_year(year)?;
        let month = Self::parse_month(month)?;
        let day = Self::parse_number(day)?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for ParsedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ParsedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
