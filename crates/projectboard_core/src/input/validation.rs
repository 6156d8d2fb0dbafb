//! Field-level validation rules.
//!
//! # Invariants
//! - String lengths are measured in characters on the trimmed value.
//! - Length rules apply to text values only; range rules to numbers only.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form field a rule set is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
    People,
}

impl InputField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Why one field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    Required,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    NotANumber(String),
    BelowMinimum { min: i64, actual: i64 },
    AboveMaximum { max: i64, actual: i64 },
}

/// Rejected form input. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: InputField,
    pub failure: ValidationFailure,
}

impl ValidationError {
    pub fn new(field: InputField, failure: ValidationFailure) -> Self {
        Self { field, failure }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field = self.field.as_str();
        match &self.failure {
            ValidationFailure::Required => write!(f, "invalid input: {field} is required"),
            ValidationFailure::TooShort { min, actual } => write!(
                f,
                "invalid input: {field} must be at least {min} characters (got {actual})"
            ),
            ValidationFailure::TooLong { max, actual } => write!(
                f,
                "invalid input: {field} must be at most {max} characters (got {actual})"
            ),
            ValidationFailure::NotANumber(raw) => {
                write!(f, "invalid input: {field} must be a whole number, got `{raw}`")
            }
            ValidationFailure::BelowMinimum { min, actual } => {
                write!(f, "invalid input: {field} must be at least {min} (got {actual})")
            }
            ValidationFailure::AboveMaximum { max, actual } => {
                write!(f, "invalid input: {field} must be at most {max} (got {actual})")
            }
        }
    }
}

impl Error for ValidationError {}

/// Value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// Rule set for one field value. Unset rules are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validatable<'a> {
    pub field: InputField,
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    pub fn text(field: InputField, value: &'a str) -> Self {
        Self::with_value(field, FieldValue::Text(value))
    }

    pub fn number(field: InputField, value: i64) -> Self {
        Self::with_value(field, FieldValue::Number(value))
    }

    fn with_value(field: InputField, value: FieldValue<'a>) -> Self {
        Self {
            field,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: Option<usize>) -> Self {
        self.max_length = max;
        self
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Checks every configured rule and reports the first failure.
pub fn validate(input: &Validatable<'_>) -> Result<(), ValidationError> {
    let fail = |failure| Err(ValidationError::new(input.field, failure));

    match input.value {
        FieldValue::Text(value) => {
            let length = value.trim().chars().count();
            if input.required && length == 0 {
                return fail(ValidationFailure::Required);
            }
            if let Some(min) = input.min_length {
                if length < min {
                    return fail(ValidationFailure::TooShort { min, actual: length });
                }
            }
            if let Some(max) = input.max_length {
                if length > max {
                    return fail(ValidationFailure::TooLong { max, actual: length });
                }
            }
        }
        FieldValue::Number(value) => {
            // A number always has a non-empty textual form, so `required`
            // holds trivially here.
            if let Some(min) = input.min {
                if value < min {
                    return fail(ValidationFailure::BelowMinimum { min, actual: value });
                }
            }
            if let Some(max) = input.max {
                if value > max {
                    return fail(ValidationFailure::AboveMaximum { max, actual: value });
                }
            }
        }
    }
    Ok(())
}
