//! Delimiter balance checking.

use crate::segment::DELIMITER;

/// Custom validity message for an odd number of `$`.
pub const UNCLOSED_MESSAGE: &str = "Unclosed $";

/// Validation state of a field, as seen by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The custom validity message; empty when valid.
    pub fn message(&self) -> &str {
        match self {
            Validity::Valid => "",
            Validity::Invalid(message) => message,
        }
    }
}

/// Whether `input` contains an even number of `$`.
///
/// Necessary for every math span to be closed, not sufficient for the spans
/// to be valid math.
pub fn even_dollars(input: &str) -> bool {
    input.matches(DELIMITER).count() % 2 == 0
}

pub fn check_balance(input: &str) -> Validity {
    if even_dollars(input) {
        Validity::Valid
    } else {
        Validity::Invalid(UNCLOSED_MESSAGE.to_owned())
    }
}
