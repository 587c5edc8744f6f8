use super::{Brand, Model, Resource, State};

/// A reference list a form loads before it is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Brands,
    Models,
    States,
}

impl ReferenceKind {
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Brands => Brand::ENDPOINT,
            Self::Models => Model::ENDPOINT,
            Self::States => State::ENDPOINT,
        }
    }

    /// Shown when the list cannot be loaded
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Brands => "No se pudieron cargar las marcas",
            Self::Models => "No se pudieron cargar los modelos",
            Self::States => "No se pudieron cargar los estados",
        }
    }
}

/// One `<option>` of a select input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

impl SelectOption {
    fn from_resource<R: Resource>(resource: &R) -> Self {
        Self {
            value: resource.id(),
            label: resource.label(),
        }
    }
}

/// Reference lists held in memory by a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub brands: Vec<Brand>,
    pub models: Vec<Model>,
    pub states: Vec<State>,
}

impl ReferenceData {
    #[must_use]
    pub fn brand_options(&self) -> Vec<SelectOption> {
        self.brands.iter().map(SelectOption::from_resource).collect()
    }

    /// Model options, narrowed to one brand when a brand is selected
    #[must_use]
    pub fn model_options(&self, brand_id: Option<i64>) -> Vec<SelectOption> {
        self.models
            .iter()
            .filter(|model| brand_id.is_none_or(|brand| model.brand_id == brand))
            .map(SelectOption::from_resource)
            .collect()
    }

    #[must_use]
    pub fn state_options(&self) -> Vec<SelectOption> {
        self.states.iter().map(SelectOption::from_resource).collect()
    }

    /// Brand owning a model, if the model is in the loaded list
    #[must_use]
    pub fn brand_of_model(&self, model_id: i64) -> Option<i64> {
        self.models
            .iter()
            .find(|model| model.id == model_id)
            .map(|model| model.brand_id)
    }
}
