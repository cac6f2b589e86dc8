//! APIs and models related to virtual terminals.

mod api;
mod model;

pub use api::VirtualTerminalsApi;
pub use model::*;
