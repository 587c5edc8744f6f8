use super::traits::Resource;
use crate::navigation::Route;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    #[serde(rename = "marca_id")]
    pub brand_id: i64,
    #[serde(rename = "modelo_id")]
    pub model_id: i64,
    #[serde(rename = "estado_id")]
    pub state_id: i64,
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleCreate {
    #[serde(rename = "marca_id")]
    pub brand_id: i64,
    #[serde(rename = "modelo_id")]
    pub model_id: i64,
    #[serde(rename = "estado_id")]
    pub state_id: i64,
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Vehicle {
    type Create = VehicleCreate;

    const RESOURCE_NAME_SINGULAR: &'static str = "vehículo";
    const RESOURCE_NAME_PLURAL: &'static str = "vehículos";
    const ENDPOINT: &'static str = "/vehiculos/";
    const LISTING_ROUTE: Route = Route::Vehicles;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!(
            "marca {} modelo {} estado {} ({}) ${:.2}",
            self.brand_id, self.model_id, self.state_id, self.year, self.price
        )
    }
}
