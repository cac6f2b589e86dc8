//! APIs and models related to Apple Pay domains.

mod api;
mod model;

pub use api::ApplePayApi;
pub use model::*;
