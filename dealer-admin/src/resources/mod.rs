//! Catalog entities and their REST mapping
//!
//! Field names are English in Rust and Spanish on the wire, matching the
//! backend's JSON.

mod brand;
mod model;
mod reference;
mod state;
mod traits;
mod vehicle;

pub use brand::{Brand, BrandCreate};
pub use model::{Model, ModelCreate};
pub use reference::{ReferenceData, ReferenceKind, SelectOption};
pub use state::{State, StateCreate};
pub use traits::Resource;
pub use vehicle::{Vehicle, VehicleCreate};
