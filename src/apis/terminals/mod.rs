//! APIs and models related to Paystack Terminal devices.

mod api;
mod model;

pub use api::TerminalsApi;
pub use model::*;
