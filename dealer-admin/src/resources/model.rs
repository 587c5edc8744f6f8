use super::traits::Resource;
use crate::navigation::Route;
use serde::{Deserialize, Serialize};

/// A vehicle model, owned by exactly one brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "marca_id")]
    pub brand_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "marca_id")]
    pub brand_id: i64,
}

impl Resource for Model {
    type Create = ModelCreate;

    const RESOURCE_NAME_SINGULAR: &'static str = "modelo";
    const RESOURCE_NAME_PLURAL: &'static str = "modelos";
    const ENDPOINT: &'static str = "/modelos/";
    const LISTING_ROUTE: Route = Route::Models;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
