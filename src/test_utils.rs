//! Shared constructors for unit tests.

use crate::types::Month;
use crate::{ParsedDate, Period};

pub fn month(value: u32) -> Month {
    Month::new(value).expect("test month out of range")
}

pub fn date(year: i32, month: u32, day: u32) -> ParsedDate {
    ParsedDate::new(year, month, day).expect("test date is not a calendar date")
}

/// Chronologically ordered period from (year, month, day) tuples
pub fn period(begin: (i32, u32, u32), end: (i32, u32, u32)) -> Period {
    Period::new(date(begin.0, begin.1, begin.2), date(end.0, end.1, end.2))
        .expect("test period is not ordered")
}
