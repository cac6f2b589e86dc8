//! APIs and models related to transaction splits.

mod api;
mod model;

pub use api::TransactionSplitsApi;
pub use model::*;
