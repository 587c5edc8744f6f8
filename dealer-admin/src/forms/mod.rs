//! Form controllers
//!
//! Every catalog page follows the same protocol: guard the session, load any
//! reference lists, let the user edit, then send exactly one request and
//! either navigate to the listing or show an inline error. The protocol lives
//! once in [`FormController`]; each entity only supplies its [`FormFields`].

mod controller;
mod fields;
mod login;
mod state;
mod submit;

pub use controller::FormController;
pub use fields::{BrandForm, FormFields, ModelForm, StateForm, VehicleForm};
pub use login::{LoginController, LoginForm};
pub use state::FormState;
pub use submit::{ResourceSubmission, SubmitMethod, submit_resource};
