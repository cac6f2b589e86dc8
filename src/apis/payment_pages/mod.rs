//! APIs and models related to payment pages.

mod api;
mod model;

pub use api::PaymentPagesApi;
pub use model::*;
