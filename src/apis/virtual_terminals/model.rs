use crate::apis::common::Currency;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A WhatsApp number that receives payment notifications for a virtual terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Destination {
    /// Phone number in international format, e.g. `+2348012345678`.
    pub target: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomField {
    pub display_name: String,
    pub variable_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct CreateVirtualTerminalRequest {
    #[builder(setter(into))]
    pub name: String,
    pub destinations: Vec<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub custom_fields: Option<Vec<CustomField>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListVirtualTerminalsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub status: Option<String>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub previous: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UpdateVirtualTerminalRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AssignDestinationRequest {
    pub destinations: Vec<Destination>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UnassignDestinationRequest {
    /// Phone numbers to remove.
    pub targets: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VirtualTerminalSplitCodeRequest {
    pub split_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VirtualTerminal {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub integration: Option<u64>,
    pub domain: Option<String>,
    #[serde(rename = "paymentMethods", default)]
    pub payment_methods: Vec<serde_json::Value>,
    pub active: bool,
    pub metadata: Option<serde_json::Value>,
    pub currency: Option<Currency>,
    #[serde(default)]
    pub destinations: Vec<AssignedDestination>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AssignedDestination {
    pub target: String,
    #[serde(rename = "type")]
    pub destination_type: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub integration: Option<u64>,
    pub id: Option<u64>,
}
