//! APIs and models related to settlements.

mod api;
mod model;

pub use api::SettlementsApi;
pub use model::*;
