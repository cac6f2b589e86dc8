//! APIs and models related to integration settings.

mod api;
mod model;

pub use api::IntegrationApi;
pub use model::*;
