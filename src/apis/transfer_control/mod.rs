//! APIs and models related to balances and transfer OTP settings.

mod api;
mod model;

pub use api::TransferControlApi;
pub use model::*;
