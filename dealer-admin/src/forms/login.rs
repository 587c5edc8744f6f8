use super::state::FormState;
use crate::client::ApiClient;
use crate::errors::AdminError;
use crate::navigation::{Navigator, Route};
use crate::validation::{ValidationErrors, validators};
use std::fmt;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::validate_required("username", &self.username));
        errors.check(validators::validate_required("password", &self.password));
        errors.result()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Login page: exchanges credentials for a token and opens the dashboard
#[derive(Debug, Default)]
pub struct LoginController {
    fields: LoginForm,
    state: FormState,
}

impl LoginController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.error_message()
    }

    #[must_use]
    pub fn fields(&self) -> &LoginForm {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut LoginForm {
        if matches!(self.state, FormState::Error(_) | FormState::Invalid(_)) {
            self.state = FormState::Idle;
        }
        &mut self.fields
    }

    /// Post the credentials; on success the token is stored before navigating
    pub async fn submit(&mut self, client: &ApiClient, navigator: &dyn Navigator) -> &FormState {
        if !self.state.can_submit() {
            return &self.state;
        }
        if let Err(errors) = self.fields.validate() {
            AdminError::from(errors.clone()).log_internal();
            self.state = FormState::Invalid(errors);
            return &self.state;
        }

        self.state = FormState::Submitting;
        let outcome = match client.login(&self.fields.username, &self.fields.password).await {
            Ok(token) => client.session().establish(&token),
            Err(err) => Err(err),
        };

        self.state = match outcome {
            Ok(()) => {
                tracing::info!(username = %self.fields.username, "Logged in");
                navigator.navigate(Route::Dashboard);
                FormState::Success(Route::Dashboard)
            }
            Err(err) => {
                err.log_internal();
                FormState::Error(err.user_message())
            }
        };
        &self.state
    }
}
