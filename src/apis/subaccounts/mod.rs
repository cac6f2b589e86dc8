//! APIs and models related to subaccounts.

mod api;
mod model;

pub use api::SubaccountsApi;
pub use model::*;
