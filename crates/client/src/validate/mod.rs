//! Field and form validation.
//!
//! Two layers, kept pure so they are testable without a UI:
//!
//! - [`fields`] - per-keystroke validators mapping raw input to a
//!   [`FieldResult`]; the UI applies the result to its own state.
//! - [`forms`] - pre-submit gates that evaluate a whole form in its
//!   declared field order and report which field should receive focus.

pub mod fields;
pub mod forms;

pub use fields::*;

/// Result of validating one field.
///
/// The uniform policy: empty input clears both the value and the error
/// (`Empty`); invalid non-empty input yields a field-specific message and
/// the rejected input is never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResult<T> {
    /// Input accepted; holds the cleaned value.
    Valid(T),
    /// Input was empty; value and error both reset.
    Empty,
    /// Input rejected with a field-specific message.
    Invalid(&'static str),
}

impl<T> FieldResult<T> {
    /// Whether the input was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The accepted value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Empty | Self::Invalid(_) => None,
        }
    }

    /// The error message to display, empty string when there is none.
    #[must_use]
    pub const fn error(&self) -> &'static str {
        match self {
            Self::Invalid(message) => message,
            Self::Valid(_) | Self::Empty => "",
        }
    }

    /// Consume the result, returning the accepted value.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Empty | Self::Invalid(_) => None,
        }
    }
}
