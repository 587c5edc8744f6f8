//! Admin client for a vehicle dealership catalog
//!
//! The backend owns every business rule; this crate holds the session token,
//! the form state of each catalog page and the calls that submit it.
//!
//! ```rust,ignore
//! use dealer_admin::{AdminConfig, ApiClient, FormController, BrandForm, RecordingNavigator};
//! use dealer_admin::session::{FileTokenStore, SessionContext};
//!
//! let config = AdminConfig::from_env()?;
//! let session = SessionContext::new(FileTokenStore::new(config.session_file()));
//! let client = ApiClient::from_config(&config, session);
//! let navigator = RecordingNavigator::new();
//!
//! let mut form = FormController::<BrandForm>::new();
//! if form.mount(&client, &navigator).await {
//!     form.fields_mut().name = "Toyota".into();
//!     form.submit(&client, &navigator).await;
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod navigation;
pub mod resources;
pub mod session;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ApiClient;
pub use config::AdminConfig;
pub use errors::AdminError;
pub use forms::{
    BrandForm, FormController, FormFields, FormState, LoginController, ModelForm, StateForm,
    VehicleForm,
};
pub use navigation::{Navigator, RecordingNavigator, Route, require_session};
pub use resources::Resource;
