//! APIs and models related to transfer recipients.

mod api;
mod model;

pub use api::TransferRecipientsApi;
pub use model::*;
