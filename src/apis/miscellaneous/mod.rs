//! APIs and models related to supporting data such as banks and countries.

mod api;
mod model;

pub use api::MiscellaneousApi;
pub use model::*;
