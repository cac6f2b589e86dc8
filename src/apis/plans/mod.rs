//! APIs and models related to subscription plans.

mod api;
mod model;

pub use api::PlansApi;
pub use model::*;
