//! Editable field state for each catalog form

use crate::resources::{
    Brand, BrandCreate, Model, ModelCreate, ReferenceKind, Resource, State, StateCreate, Vehicle,
    VehicleCreate,
};
use crate::validation::{ValidationErrors, validators};

/// Field state of one resource form
pub trait FormFields: Default + Send + Sync {
    type Resource: Resource;

    /// Reference lists loaded on mount
    const REFERENCES: &'static [ReferenceKind] = &[];

    /// Build the request body from the current inputs
    ///
    /// # Errors
    ///
    /// Returns every required field that is empty or unparsable.
    fn payload(&self) -> Result<<Self::Resource as Resource>::Create, ValidationErrors>;

    /// Prefill the inputs from an existing record
    fn from_resource(resource: &Self::Resource) -> Self;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandForm {
    pub name: String,
}

impl FormFields for BrandForm {
    type Resource = Brand;

    fn payload(&self) -> Result<BrandCreate, ValidationErrors> {
        validators::validate_required("nombre", &self.name)?;
        Ok(BrandCreate {
            name: self.name.trim().to_string(),
        })
    }

    fn from_resource(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelForm {
    pub name: String,
    pub brand_id: Option<i64>,
}

impl ModelForm {
    /// Apply the string value of the brand select
    pub fn select_brand(&mut self, value: &str) {
        self.brand_id = validators::parse_option_value(value);
    }
}

impl FormFields for ModelForm {
    type Resource = Model;

    const REFERENCES: &'static [ReferenceKind] = &[ReferenceKind::Brands];

    fn payload(&self) -> Result<ModelCreate, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::validate_required("nombre", &self.name));
        let brand_id = validators::require_selection("marca_id", self.brand_id);
        match brand_id {
            Ok(brand_id) => {
                errors.result()?;
                Ok(ModelCreate {
                    name: self.name.trim().to_string(),
                    brand_id,
                })
            }
            Err(error) => {
                errors.add(error);
                Err(errors)
            }
        }
    }

    fn from_resource(model: &Model) -> Self {
        Self {
            name: model.name.clone(),
            brand_id: Some(model.brand_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateForm {
    pub name: String,
}

impl FormFields for StateForm {
    type Resource = State;

    fn payload(&self) -> Result<StateCreate, ValidationErrors> {
        validators::validate_required("nombre", &self.name)?;
        Ok(StateCreate {
            name: self.name.trim().to_string(),
        })
    }

    fn from_resource(state: &State) -> Self {
        Self {
            name: state.name.clone(),
        }
    }
}

/// Vehicle inputs; number inputs hold their raw text until submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub brand_id: Option<i64>,
    pub model_id: Option<i64>,
    pub state_id: Option<i64>,
    pub year: String,
    pub price: String,
    pub description: String,
}

impl FormFields for VehicleForm {
    type Resource = Vehicle;

    const REFERENCES: &'static [ReferenceKind] = &[
        ReferenceKind::Brands,
        ReferenceKind::Models,
        ReferenceKind::States,
    ];

    fn payload(&self) -> Result<VehicleCreate, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let brand_id = validators::require_selection("marca_id", self.brand_id);
        let model_id = validators::require_selection("modelo_id", self.model_id);
        let state_id = validators::require_selection("estado_id", self.state_id);
        let year = validators::parse_number::<i32>("anio", &self.year);
        let price = validators::parse_amount("precio", &self.price);

        match (brand_id, model_id, state_id, year, price) {
            (Ok(brand_id), Ok(model_id), Ok(state_id), Ok(year), Ok(price)) => {
                let description = self.description.trim();
                Ok(VehicleCreate {
                    brand_id,
                    model_id,
                    state_id,
                    year,
                    price,
                    description: (!description.is_empty()).then(|| description.to_string()),
                })
            }
            (brand_id, model_id, state_id, year, price) => {
                errors.check(brand_id.map(drop));
                errors.check(model_id.map(drop));
                errors.check(state_id.map(drop));
                errors.check(year.map(drop));
                errors.check(price.map(drop));
                Err(errors)
            }
        }
    }

    fn from_resource(vehicle: &Vehicle) -> Self {
        Self {
            brand_id: Some(vehicle.brand_id),
            model_id: Some(vehicle.model_id),
            state_id: Some(vehicle.state_id),
            year: vehicle.year.to_string(),
            price: vehicle.price.to_string(),
            description: vehicle.description.clone().unwrap_or_default(),
        }
    }
}
