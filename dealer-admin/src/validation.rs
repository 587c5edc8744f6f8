//! Required-field validation
//!
//! Form fields are checked before any request leaves the client, the way a
//! browser rejects a `required` input on submit. The backend stays the owner of
//! every other rule; only presence and basic number parsing live here.
//!
//! # Example
//!
//! ```rust,ignore
//! use dealer_admin::validation::{validators, ValidationErrors};
//!
//! let mut errors = ValidationErrors::new();
//! if let Err(e) = validators::validate_required("nombre", &fields.name) {
//!     errors.add(e);
//! }
//! errors.result()?;
//! ```

use serde::Serialize;
use std::fmt;

/// Message shown next to an empty required input.
pub const REQUIRED_MESSAGE: &str = "Este campo es obligatorio";

/// Message shown next to a number input that does not parse.
pub const NUMBER_MESSAGE: &str = "Debe ser un número válido";

/// Validation error with field name and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Wire name of the field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the error of a check, if it failed
    pub fn check(&mut self, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.add(error);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Message for a single field, if that field failed
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Convert to Result
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl ValidationErrors {
    /// One-line rendering shown next to the form: `field: message, ...`
    #[must_use]
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Helper validators for form inputs
pub mod validators {
    use super::{NUMBER_MESSAGE, REQUIRED_MESSAGE, ValidationError};
    use std::str::FromStr;

    /// Validate value is not empty
    ///
    /// # Errors
    ///
    /// Fails when the value is empty or whitespace only.
    pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field, REQUIRED_MESSAGE));
        }
        Ok(())
    }

    /// Validate a select input has a chosen option
    ///
    /// # Errors
    ///
    /// Fails when nothing is selected.
    pub fn require_selection(field: &str, value: Option<i64>) -> Result<i64, ValidationError> {
        value.ok_or_else(|| ValidationError::new(field, REQUIRED_MESSAGE))
    }

    /// Parse a required number input
    ///
    /// # Errors
    ///
    /// Fails when the input is empty or not a number of type `T`.
    pub fn parse_number<T: FromStr>(field: &str, value: &str) -> Result<T, ValidationError> {
        validate_required(field, value)?;
        value
            .trim()
            .parse()
            .map_err(|_| ValidationError::new(field, NUMBER_MESSAGE))
    }

    /// Parse a required decimal amount
    ///
    /// # Errors
    ///
    /// Fails when the input is empty, not a number, or not finite.
    pub fn parse_amount(field: &str, value: &str) -> Result<f64, ValidationError> {
        let amount: f64 = parse_number(field, value)?;
        if amount.is_finite() {
            Ok(amount)
        } else {
            Err(ValidationError::new(field, NUMBER_MESSAGE))
        }
    }

    /// Parse the string value of a select option into an id
    ///
    /// An empty value is the placeholder option and clears the selection.
    #[must_use]
    pub fn parse_option_value(value: &str) -> Option<i64> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        value.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let err = ValidationError::new("nombre", REQUIRED_MESSAGE);
        assert_eq!(err.field, "nombre");
        assert_eq!(err.message, "Este campo es obligatorio");
        assert_eq!(err.to_string(), "nombre: Este campo es obligatorio");
    }

    #[test]
    fn test_validation_errors_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.check(Ok(()));
        assert!(errors.is_empty());

        errors.check(Err(ValidationError::new("nombre", "error1")));
        errors.add(ValidationError::new("marca_id", "error2"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("marca_id"), Some("error2"));
        assert_eq!(errors.for_field("anio"), None);

        assert!(errors.result().is_err());
    }

    #[test]
    fn test_validate_required() {
        use validators::validate_required;

        assert!(validate_required("nombre", "").is_err());
        assert!(validate_required("nombre", "   ").is_err());
        assert!(validate_required("nombre", "Toyota").is_ok());
    }

    #[test]
    fn test_require_selection() {
        use validators::require_selection;

        assert!(require_selection("marca_id", None).is_err());
        assert_eq!(require_selection("marca_id", Some(3)).unwrap(), 3);
    }

    #[test]
    fn test_parse_number() {
        use validators::parse_number;

        assert_eq!(parse_number::<i32>("anio", " 2020 ").unwrap(), 2020);
        assert_eq!(
            parse_number::<i32>("anio", "").unwrap_err().message,
            REQUIRED_MESSAGE
        );
        assert_eq!(
            parse_number::<f64>("precio", "barato").unwrap_err().message,
            NUMBER_MESSAGE
        );
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        use validators::parse_amount;

        assert!((parse_amount("precio", "18500.5").unwrap() - 18500.5).abs() < f64::EPSILON);
        for raw in ["NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(
                parse_amount("precio", raw).unwrap_err().message,
                NUMBER_MESSAGE,
                "{raw} should be rejected"
            );
        }
        assert_eq!(parse_amount("precio", " ").unwrap_err().message, REQUIRED_MESSAGE);
    }

    #[test]
    fn test_parse_option_value() {
        use validators::parse_option_value;

        assert_eq!(parse_option_value("1"), Some(1));
        assert_eq!(parse_option_value(""), None);
        assert_eq!(parse_option_value("abc"), None);
    }
}
