//! APIs and models related to dedicated virtual accounts.

mod api;
mod model;

pub use api::DedicatedVirtualAccountsApi;
pub use model::*;
