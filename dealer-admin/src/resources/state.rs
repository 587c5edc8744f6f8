use super::traits::Resource;
use crate::navigation::Route;
use serde::{Deserialize, Serialize};

/// Condition label for a vehicle, e.g. "Nuevo" or "Usado"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCreate {
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Resource for State {
    type Create = StateCreate;

    const RESOURCE_NAME_SINGULAR: &'static str = "estado";
    const RESOURCE_NAME_PLURAL: &'static str = "estados";
    const ENDPOINT: &'static str = "/estados/";
    const LISTING_ROUTE: Route = Route::States;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
