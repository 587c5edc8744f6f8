use crate::navigation::Route;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A catalog entity exposed by the backend as a REST collection
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Body sent on create and update
    type Create: Serialize + Send + Sync;

    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;
    /// Collection endpoint, with trailing slash
    const ENDPOINT: &'static str;
    /// Where the form navigates after a successful save
    const LISTING_ROUTE: Route;

    fn id(&self) -> i64;

    /// Short text for listings and select options
    fn label(&self) -> String;

    #[must_use]
    fn item_path(id: i64) -> String {
        format!("{}{id}", Self::ENDPOINT)
    }
}
