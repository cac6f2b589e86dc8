//! APIs and models related to disputes.

mod api;
mod model;

pub use api::DisputesApi;
pub use model::*;
