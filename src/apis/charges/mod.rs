//! APIs and models related to direct charges.

mod api;
mod model;

pub use api::ChargesApi;
pub use model::*;
