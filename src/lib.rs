//! Form-validation rule checking that a date falls inside a half-open period.
//!
//! Dates are loosely formatted `Y-M-D` or `Y/M/D` strings. The month may be numeric
//! or a full English month name in any case. Both boundaries are parsed and the
//! period is checked before the input date is tested against `[beginning, ending)`.
//!
//! ```
//! use date_in_period::validate_date_in_period;
//!
//! let outcome = validate_date_in_period(Some("2019/5/30"), "2019-5-28", "2019-june-17");
//! assert!(outcome.succeeded());
//!
//! let outcome = validate_date_in_period(Some("2019/6/30"), "2019-5-28", "2019-june-17");
//! assert_eq!(outcome.error_message(), "Invalid date between two dates");
//! ```

mod consts;
mod date;
mod outcome;
mod period;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use date::{DateParseError, ParsedDate};
pub use outcome::{ValidationFailure, ValidationOutcome, ValidationType};
pub use period::{Period, PeriodError, PeriodOrdering};
pub use types::{Day, Month, days_in_month, is_leap_year};

use serde::{Deserialize, Serialize};

/// Configured date-in-period validator.
///
/// The default uses [`PeriodOrdering::Chronological`]. Hosts relying on the legacy
/// field-wise period check can opt into [`PeriodOrdering::FieldwiseAny`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateInPeriod {
    pub ordering: PeriodOrdering,
}

impl DateInPeriod {
    pub const fn new(ordering: PeriodOrdering) -> Self {
        Self { ordering }
    }

    /// Runs the validation and reports the first failure.
    ///
    /// # Errors
    /// `ValidationFailure::InvalidPeriod` when either boundary does not parse or the
    /// period is not ordered; `ValidationFailure::OutOfPeriod` when the input is
    /// missing, unparseable or outside the period.
    pub fn check(
        &self,
        input: Option<&str>,
        beginning: &str,
        ending: &str,
    ) -> Result<(), ValidationFailure> {
        let period = Period::parse(beginning, ending, self.ordering).map_err(|err| {
            tracing::debug!(beginning, ending, ordering = ?self.ordering, %err, "period rejected");
            ValidationFailure::InvalidPeriod
        })?;

        if !period.contains_input(input) {
            tracing::debug!(?input, %period, "date outside period");
            return Err(ValidationFailure::OutOfPeriod);
        }

        Ok(())
    }

    /// Runs the validation and wraps the result for the host framework.
    pub fn validate(&self, input: Option<&str>, beginning: &str, ending: &str) -> ValidationOutcome {
        self.check(input, beginning, ending).into()
    }
}

/// Validates that `input` lies in `[beginning, ending)` using the default configuration.
///
/// Never fails: every combination of inputs yields a populated outcome.
pub fn validate_date_in_period(
    input: Option<&str>,
    beginning: &str,
    ending: &str,
) -> ValidationOutcome {
    DateInPeriod::default().validate(input, beginning, ending)
}
