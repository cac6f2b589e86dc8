use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentSessionTimeout {
    /// Seconds before a checkout session expires. `0` means sessions never time out.
    pub payment_session_timeout: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct UpdateTimeoutRequest {
    pub timeout: u32,
}
