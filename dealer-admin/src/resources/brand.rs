use super::traits::Resource;
use crate::navigation::Route;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCreate {
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Resource for Brand {
    type Create = BrandCreate;

    const RESOURCE_NAME_SINGULAR: &'static str = "marca";
    const RESOURCE_NAME_PLURAL: &'static str = "marcas";
    const ENDPOINT: &'static str = "/marcas/";
    const LISTING_ROUTE: Route = Route::Brands;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
