use crate::navigation::Route;
use crate::validation::ValidationErrors;

/// Lifecycle of a form page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    /// Reference data or the record being edited is loading
    Loading,
    Submitting,
    /// Saved; the navigator was sent to this route
    Success(Route),
    /// Required fields missing; nothing was sent
    Invalid(ValidationErrors),
    /// Message rendered inline next to the form
    Error(String),
}

impl FormState {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Submitting)
    }

    /// Whether the submit control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !matches!(self, Self::Success(_))
    }

    /// Inline error text, for both rejected and invalid submissions
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Error(message) => Some(message.clone()),
            Self::Invalid(errors) => Some(errors.summary()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_submit_enabled_states() {
        assert!(FormState::Idle.can_submit());
        assert!(FormState::Error("x".into()).can_submit());
        assert!(FormState::Invalid(ValidationErrors::new()).can_submit());
        assert!(!FormState::Loading.can_submit());
        assert!(!FormState::Submitting.can_submit());
        assert!(!FormState::Success(Route::Brands).can_submit());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(FormState::Idle.error_message(), None);
        assert_eq!(
            FormState::Error("Ya existe".into()).error_message().as_deref(),
            Some("Ya existe")
        );
        let invalid =
            FormState::Invalid(ValidationError::new("nombre", "Este campo es obligatorio").into());
        assert_eq!(
            invalid.error_message().as_deref(),
            Some("nombre: Este campo es obligatorio")
        );
    }

    #[test]
    fn test_invalid_renders_like_the_validation_error() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("nombre", "Este campo es obligatorio"));
        errors.add(ValidationError::new("precio", "Debe ser un número válido"));

        let shown = FormState::Invalid(errors.clone()).error_message();
        let err: crate::errors::AdminError = errors.into();
        assert_eq!(shown, Some(err.user_message()));
    }
}
