//! APIs and models related to refunds.

mod api;
mod model;

pub use api::RefundsApi;
pub use model::*;
