//! APIs and models related to payment requests.

mod api;
mod model;

pub use api::PaymentRequestsApi;
pub use model::*;
