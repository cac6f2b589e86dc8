//! APIs and models related to products.

mod api;
mod model;

pub use api::ProductsApi;
pub use model::*;
