use super::fields::{FormFields, ModelForm, VehicleForm};
use super::state::FormState;
use super::submit::{ResourceSubmission, submit_resource};
use crate::client::ApiClient;
use crate::errors::AdminError;
use crate::navigation::{Navigator, require_session};
use crate::resources::{ReferenceData, ReferenceKind, Resource};
use crate::validation::validators;

/// Create/edit page for one resource type
#[derive(Debug)]
pub struct FormController<F: FormFields> {
    fields: F,
    state: FormState,
    references: ReferenceData,
    editing: Option<i64>,
}

impl<F: FormFields> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormFields> FormController<F> {
    /// Empty create form
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: F::default(),
            state: FormState::Idle,
            references: ReferenceData::default(),
            editing: None,
        }
    }

    /// Edit form for an existing record, prefilled on mount
    #[must_use]
    pub fn for_existing(id: i64) -> Self {
        Self {
            editing: Some(id),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Inline error text currently shown, if any
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.error_message()
    }

    #[must_use]
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Edit the inputs; a shown error is dismissed
    pub fn fields_mut(&mut self) -> &mut F {
        self.dismiss_error();
        &mut self.fields
    }

    #[must_use]
    pub fn references(&self) -> &ReferenceData {
        &self.references
    }

    #[must_use]
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    fn dismiss_error(&mut self) {
        if matches!(self.state, FormState::Error(_) | FormState::Invalid(_)) {
            self.state = FormState::Idle;
        }
    }

    /// Run the page mount sequence
    ///
    /// Returns `false` when there is no session; the navigator has then been
    /// sent to the login route and no request was issued. A failed reference
    /// load leaves an inline error but the form stays submittable.
    pub async fn mount(&mut self, client: &ApiClient, navigator: &dyn Navigator) -> bool {
        if require_session(client.session(), navigator).is_none() {
            return false;
        }

        if F::REFERENCES.is_empty() && self.editing.is_none() {
            return true;
        }
        self.state = FormState::Loading;

        let mut failure: Option<String> = None;
        for &kind in F::REFERENCES {
            if let Err(err) = self.load_reference(client, kind).await {
                err.log_internal();
                tracing::warn!(reference = kind.endpoint(), "Reference list unavailable");
                failure.get_or_insert_with(|| kind.failure_message().to_string());
            }
        }

        if let Some(id) = self.editing {
            match client.get::<F::Resource>(id).await {
                Ok(existing) => self.fields = F::from_resource(&existing),
                Err(err) => {
                    err.log_internal();
                    failure.get_or_insert_with(|| err.user_message());
                }
            }
        }

        self.state = failure.map_or(FormState::Idle, FormState::Error);
        true
    }

    async fn load_reference(
        &mut self,
        client: &ApiClient,
        kind: ReferenceKind,
    ) -> Result<(), AdminError> {
        match kind {
            ReferenceKind::Brands => self.references.brands = client.list().await?,
            ReferenceKind::Models => self.references.models = client.list().await?,
            ReferenceKind::States => self.references.states = client.list().await?,
        }
        Ok(())
    }

    /// Validate and send the form
    ///
    /// Ignored while a request is in flight or after a successful save.
    pub async fn submit(&mut self, client: &ApiClient, navigator: &dyn Navigator) -> &FormState {
        if !self.state.can_submit() {
            tracing::debug!(state = ?self.state, "Submit ignored");
            return &self.state;
        }

        let payload = match self.fields.payload() {
            Ok(payload) => payload,
            Err(errors) => {
                AdminError::from(errors.clone()).log_internal();
                self.state = FormState::Invalid(errors);
                return &self.state;
            }
        };

        self.state = FormState::Submitting;
        let route = F::Resource::LISTING_ROUTE;
        let submission = match self.editing {
            None => ResourceSubmission::create(F::Resource::ENDPOINT, payload, route),
            Some(id) => ResourceSubmission::update(F::Resource::item_path(id), payload, route),
        };

        self.state = match submit_resource(client, navigator, submission).await {
            Ok(_) => {
                tracing::info!(
                    resource = F::Resource::RESOURCE_NAME_SINGULAR,
                    id = ?self.editing,
                    "Saved"
                );
                FormState::Success(route)
            }
            Err(err) => {
                err.log_internal();
                FormState::Error(err.user_message())
            }
        };
        &self.state
    }
}

impl FormController<ModelForm> {
    /// Apply the string value of the brand select
    pub fn select_brand(&mut self, value: &str) {
        self.fields_mut().select_brand(value);
    }
}

impl FormController<VehicleForm> {
    /// Apply the brand select; a chosen model of another brand is cleared
    pub fn select_brand(&mut self, value: &str) {
        let brand_id = validators::parse_option_value(value);
        let stale_model = self.fields.model_id.is_some_and(|model_id| {
            brand_id.is_some() && self.references.brand_of_model(model_id) != brand_id
        });
        let fields = self.fields_mut();
        fields.brand_id = brand_id;
        if stale_model {
            fields.model_id = None;
        }
    }

    pub fn select_model(&mut self, value: &str) {
        self.fields_mut().model_id = validators::parse_option_value(value);
    }

    pub fn select_state(&mut self, value: &str) {
        self.fields_mut().state_id = validators::parse_option_value(value);
    }
}
