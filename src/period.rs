use serde::{Deserialize, Serialize};

use crate::{DateParseError, ParsedDate, prelude::*};

/// Rule deciding whether a pair of boundaries forms a usable period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodOrdering {
    /// Beginning must strictly precede ending, comparing year, then month, then day.
    #[default]
    Chronological,
    /// Legacy rule: valid when any single field of the beginning is smaller than the
    /// same field of the ending. Accepts some inverted periods such as
    /// `1994-02-28 .. 1989-12-31`.
    FieldwiseAny,
}

impl PeriodOrdering {
    pub fn is_valid(self, begin: &ParsedDate, end: &ParsedDate) -> bool {
        match self {
            Self::Chronological => begin < end,
            Self::FieldwiseAny => {
                begin.year() < end.year() || begin.month() < end.month() || begin.day() < end.day()
            },
        }
    }
}

/// Half-open period `[begin, end)` between two parsed dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{begin}/{end}")]
pub struct Period {
    begin: ParsedDate,
    end:   ParsedDate,
}

/// Error type for period construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// The beginning boundary is not a calendar-valid date.
    #[error("Invalid period beginning: {0}")]
    Beginning(#[source] DateParseError),

    /// The ending boundary is not a calendar-valid date.
    #[error("Invalid period ending: {0}")]
    Ending(#[source] DateParseError),

    /// Both boundaries parse but fail the ordering rule.
    #[error("Invalid period: beginning ({begin}) does not precede ending ({end})")]
    NotOrdered { begin: ParsedDate, end: ParsedDate },
}

impl Period {
    /// Creates a period, requiring `begin < end` chronologically.
    ///
    /// # Errors
    /// Returns `PeriodError::NotOrdered` if begin does not strictly precede end.
    pub fn new(begin: ParsedDate, end: ParsedDate) -> Result<Self, PeriodError> {
        Self::with_ordering(begin, end, PeriodOrdering::Chronological)
    }

    /// Creates a period validated by the given ordering rule.
    ///
    /// # Errors
    /// Returns `PeriodError::NotOrdered` if the rule rejects the boundaries.
    pub fn with_ordering(
        begin: ParsedDate,
        end: ParsedDate,
        ordering: PeriodOrdering,
    ) -> Result<Self, PeriodError> {
        if !ordering.is_valid(&begin, &end) {
            return Err(PeriodError::NotOrdered { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Parses both boundaries and validates the resulting period.
    ///
    /// # Errors
    /// Returns `PeriodError::Beginning` / `PeriodError::Ending` when a boundary does not
    /// parse, or `PeriodError::NotOrdered` when the ordering rule rejects them.
    pub fn parse(begin: &str, end: &str, ordering: PeriodOrdering) -> Result<Self, PeriodError> {
        let begin = begin.parse::<ParsedDate>().map_err(PeriodError::Beginning)?;
        let end = end.parse::<ParsedDate>().map_err(PeriodError::Ending)?;
        Self::with_ordering(begin, end, ordering)
    }

    /// Returns the beginning (inclusive) of the period
    pub const fn begin(&self) -> ParsedDate {
        self.begin
    }

    /// Returns the ending (exclusive) of the period
    pub const fn end(&self) -> ParsedDate {
        self.end
    }

    /// Returns both boundaries as a tuple
    pub const fn dates(&self) -> (ParsedDate, ParsedDate) {
        (self.begin, self.end)
    }

    /// Checks whether `date` lies in the period.
    ///
    /// Dispatches on which boundary years the date shares. Years strictly between
    /// the boundaries are compared inclusively; month and day comparisons inside a
    /// boundary year keep the beginning inclusive and the ending exclusive.
    pub fn contains(&self, date: &ParsedDate) -> bool {
        let (year, month, day) = date.to_columns();
        let (begin_year, begin_month, begin_day) = self.begin.to_columns();
        let (end_year, end_month, end_day) = self.end.to_columns();

        if year == begin_year && year == end_year {
            within_single_year((month, day), (begin_month, begin_day), (end_month, end_day))
        } else if year == begin_year {
            month > begin_month || (month == begin_month && day >= begin_day)
        } else if year == end_year {
            month < end_month || (month == end_month && day < end_day)
        } else {
            (begin_year..=end_year).contains(&year)
        }
    }

    /// Parses `input` and checks it against the period. Missing or unparseable
    /// input is never in the period.
    pub fn contains_input(&self, input: Option<&str>) -> bool {
        let Some(date) = ParsedDate::parse_opt(input) else {
            return false;
        };

        let inside = self.contains(&date);
        tracing::trace!(%date, period = %self, inside, "membership checked");
        inside
    }
}

/// Month/day comparison for a period whose boundaries share the input's year.
fn within_single_year(
    (month, day): (u8, u8),
    (begin_month, begin_day): (u8, u8),
    (end_month, end_day): (u8, u8),
) -> bool {
    if month == begin_month && month == end_month {
        (begin_day..end_day).contains(&day)
    } else if month == begin_month {
        day >= begin_day
    } else if month == end_month {
        day < end_day
    } else {
        (begin_month..=end_month).contains(&month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, period};

    #[test]
    fn test_new_period_cases() {
        struct TestCase {
            begin:          (i32, u32, u32),
            end:            (i32, u32, u32),
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                begin:          (1990, 1, 1),
                end:            (2000, 1, 1),
                should_succeed: true,
                description:    "valid period (begin < end)",
            },
            TestCase {
                begin:          (2000, 1, 1),
                end:            (1990, 1, 1),
                should_succeed: false,
                description:    "inverted period (begin > end)",
            },
            TestCase {
                begin:          (1994, 8, 6),
                end:            (1994, 8, 6),
                should_succeed: false,
                description:    "single-day period (begin == end)",
            },
            TestCase {
                begin:          (1994, 2, 28),
                end:            (1989, 12, 31),
                should_succeed: false,
                description:    "inverted period with smaller month",
            },
            TestCase {
                begin:          (2019, 12, 31),
                end:            (2020, 1, 1),
                should_succeed: true,
                description:    "adjacent days across a year boundary",
            },
        ];

        for case in &cases {
            let begin = date(case.begin.0, case.begin.1, case.begin.2);
            let end = date(case.end.0, case.end.1, case.end.2);
            let result = Period::new(begin, end);

            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(result, Err(PeriodError::NotOrdered { .. })),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_fieldwise_any_accepts_partially_inverted_periods() {
        let ordering = PeriodOrdering::FieldwiseAny;

        // Month alone increases
        assert!(ordering.is_valid(&date(1994, 2, 28), &date(1989, 12, 31)));
        // Day alone increases
        assert!(ordering.is_valid(&date(2000, 5, 1), &date(1999, 5, 2)));
        // Nothing increases
        assert!(!ordering.is_valid(&date(1994, 8, 6), &date(1994, 8, 6)));
        assert!(!ordering.is_valid(&date(2001, 6, 20), &date(2000, 5, 10)));

        // Year alone increases
        assert!(ordering.is_valid(&date(1999, 12, 31), &date(2000, 1, 1)));
    }

    #[test]
    fn test_accessors() {
        let begin = date(2019, 5, 28);
        let end = date(2019, 6, 17);
        let range = Period::new(begin, end).expect("failed to construct period for accessor test");

        assert_eq!(range.begin(), begin);
        assert_eq!(range.end(), end);
        assert_eq!(range.dates(), (begin, end));
    }

    #[test]
    fn test_parse() {
        let parsed = Period::parse("1994/07/06", "1994-07-8", PeriodOrdering::Chronological)
            .expect("failed to parse period with mixed separators");
        assert_eq!(parsed.dates(), (date(1994, 7, 6), date(1994, 7, 8)));

        assert!(matches!(
            Period::parse("1994/13/06", "1994-07-8", PeriodOrdering::Chronological),
            Err(PeriodError::Beginning(DateParseError::InvalidMonth(13)))
        ));
        assert!(matches!(
            Period::parse("1994/07/06", "1994-02-30", PeriodOrdering::Chronological),
            Err(PeriodError::Ending(DateParseError::InvalidDay { .. }))
        ));
        assert!(matches!(
            Period::parse("1994-february-28", "1989-12-31", PeriodOrdering::Chronological),
            Err(PeriodError::NotOrdered { .. })
        ));
        assert!(Period::parse("1994-february-28", "1989-12-31", PeriodOrdering::FieldwiseAny).is_ok());
    }

    #[test]
    fn test_contains_same_year_same_month() {
        let range = period((1994, 8, 6), (1994, 8, 8));

        assert!(!range.contains(&date(1994, 8, 5)));
        assert!(range.contains(&date(1994, 8, 6)));
        assert!(range.contains(&date(1994, 8, 7)));
        assert!(!range.contains(&date(1994, 8, 8)));
    }

    #[test]
    fn test_contains_same_year_different_months() {
        let range = period((2019, 5, 28), (2019, 6, 17));

        assert!(!range.contains(&date(2019, 5, 21)));
        assert!(range.contains(&date(2019, 5, 28)));
        assert!(range.contains(&date(2019, 5, 30)));
        assert!(range.contains(&date(2019, 6, 1)));
        assert!(range.contains(&date(2019, 6, 16)));
        assert!(!range.contains(&date(2019, 6, 17)));
        assert!(!range.contains(&date(2019, 6, 30)));
        assert!(!range.contains(&date(2019, 4, 30)));
        assert!(!range.contains(&date(2019, 7, 1)));
    }

    #[test]
    fn test_contains_month_strictly_inside_same_year() {
        let range = period((1994, 2, 28), (1994, 12, 31));

        assert!(range.contains(&date(1994, 10, 27)));
        assert!(range.contains(&date(1994, 3, 1)));
        assert!(!range.contains(&date(1994, 1, 31)));
    }

    #[test]
    fn test_contains_beginning_year_only() {
        let range = period((2018, 11, 30), (2019, 2, 14));

        assert!(!range.contains(&date(2018, 11, 29)));
        assert!(range.contains(&date(2018, 11, 30)));
        assert!(range.contains(&date(2018, 12, 1)));
        assert!(!range.contains(&date(2018, 10, 31)));
    }

    #[test]
    fn test_contains_ending_year_only() {
        let range = period((2018, 11, 30), (2019, 2, 14));

        assert!(range.contains(&date(2019, 1, 1)));
        assert!(range.contains(&date(2019, 2, 12)));
        assert!(range.contains(&date(2019, 2, 13)));
        assert!(!range.contains(&date(2019, 2, 14)));
        assert!(!range.contains(&date(2019, 3, 1)));
    }

    #[test]
    fn test_contains_years_between() {
        let range = period((2017, 11, 30), (2019, 2, 14));

        assert!(range.contains(&date(2018, 1, 1)));
        assert!(range.contains(&date(2018, 12, 29)));
        assert!(!range.contains(&date(2016, 12, 31)));
        assert!(!range.contains(&date(2020, 1, 1)));
    }

    #[test]
    fn test_contains_input() {
        let range = period((2019, 5, 28), (2019, 6, 17));

        assert!(range.contains_input(Some("2019/5/30")));
        assert!(range.contains_input(Some("2019-june-1")));
        assert!(!range.contains_input(Some("2019/6/30")));
        assert!(!range.contains_input(Some("2019/6/31")));
        assert!(!range.contains_input(Some("not a date")));
        assert!(!range.contains_input(None));
    }

    #[test]
    fn test_display() {
        let range = period((1990, 1, 5), (2000, 12, 31));
        assert_eq!(range.to_string(), "1990-01-05/2000-12-31");
    }

    #[test]
    fn test_ordering_serde() {
        let json = serde_json::to_string(&PeriodOrdering::FieldwiseAny).unwrap();
        assert_eq!(json, r#""fieldwise_any""#);

        let ordering: PeriodOrdering = serde_json::from_str(r#""chronological""#).unwrap();
        assert_eq!(ordering, PeriodOrdering::Chronological);
        assert_eq!(PeriodOrdering::default(), PeriodOrdering::Chronological);
    }
}
