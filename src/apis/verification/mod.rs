//! APIs and models related to bank account and card verification.

mod api;
mod model;

pub use api::VerificationApi;
pub use model::*;
