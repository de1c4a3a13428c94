use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{INVALID_PERIOD_MESSAGE, OUT_OF_PERIOD_MESSAGE, VALIDATION_TYPE};

/// Tag the host form-validation engine dispatches on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationType {
    #[default]
    #[serde(rename = "DATE_IN_PERIOD")]
    DateInPeriod,
}

impl ValidationType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateInPeriod => VALIDATION_TYPE,
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a validation did not succeed. The `Display` text is the host-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationFailure {
    /// A boundary failed to parse, or the boundaries are not ordered.
    #[error("{}", INVALID_PERIOD_MESSAGE)]
    InvalidPeriod,

    /// The input date is missing, unparseable, or outside the period.
    #[error("{}", OUT_OF_PERIOD_MESSAGE)]
    OutOfPeriod,
}

impl ValidationFailure {
    /// Maps a host-facing message back to its failure kind.
    pub fn from_message(message: &str) -> Option<Self> {
        match message {
            INVALID_PERIOD_MESSAGE => Some(Self::InvalidPeriod),
            OUT_OF_PERIOD_MESSAGE => Some(Self::OutOfPeriod),
            _ => None,
        }
    }
}

/// Result object consumed by the host framework.
///
/// Serializes as `{"type": "DATE_IN_PERIOD", "succeeded": bool, "errorMessage": string}`.
/// `errorMessage` is empty exactly when `succeeded` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OutcomeWire")]
pub struct ValidationOutcome {
    #[serde(rename = "type")]
    validation_type: ValidationType,
    succeeded:       bool,
    error_message:   String,
    #[serde(skip)]
    failure:         Option<ValidationFailure>,
}

/// Wire shape read back from the host; the failure kind is recovered from the message.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeWire {
    #[serde(rename = "type")]
    validation_type: ValidationType,
    succeeded:       bool,
    error_message:   String,
}

impl From<OutcomeWire> for ValidationOutcome {
    fn from(wire: OutcomeWire) -> Self {
        let failure = if wire.succeeded {
            None
        } else {
            ValidationFailure::from_message(&wire.error_message)
        };
        Self {
            validation_type: wire.validation_type,
            succeeded: wire.succeeded,
            error_message: wire.error_message,
            failure,
        }
    }
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self {
            validation_type: ValidationType::DateInPeriod,
            succeeded:       true,
            error_message:   String::new(),
            failure:         None,
        }
    }

    pub fn failed(failure: ValidationFailure) -> Self {
        Self {
            validation_type: ValidationType::DateInPeriod,
            succeeded:       false,
            error_message:   failure.to_string(),
            failure:         Some(failure),
        }
    }

    pub const fn validation_type(&self) -> ValidationType {
        self.validation_type
    }

    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Failure kind, if this outcome is a failure produced by this validator.
    pub const fn failure(&self) -> Option<ValidationFailure> {
        self.failure
    }
}

impl From<Result<(), ValidationFailure>> for ValidationOutcome {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(failure) => Self::failed(failure),
        }
    }
}
