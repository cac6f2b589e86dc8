use crate::{
    apis::common::{Currency, CustomerSummary},
    common::serialize_optional_timestamp,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DisputeStatus {
    AwaitingMerchantFeedback,
    AwaitingBankFeedback,
    Pending,
    Resolved,
    Archived,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DisputeResolution {
    MerchantAccepted,
    Declined,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListDisputesRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub page: Option<u32>,
    /// Transaction ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub transaction: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub status: Option<DisputeStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_timestamp"
    )]
    #[builder(setter(strip_option))]
    pub from: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_timestamp"
    )]
    #[builder(setter(strip_option))]
    pub to: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct UpdateDisputeRequest {
    pub refund_amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub uploaded_filename: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct AddEvidenceRequest {
    #[builder(setter(into))]
    pub customer_email: String,
    #[builder(setter(into))]
    pub customer_name: String,
    #[builder(setter(into))]
    pub customer_phone: String,
    #[builder(setter(into))]
    pub service_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub delivery_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UploadUrlRequest {
    pub upload_filename: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct ResolveDisputeRequest {
    pub resolution: DisputeResolution,
    #[builder(setter(into))]
    pub message: String,
    pub refund_amount: u64,
    /// Name of the file returned by [`upload_url`](crate::apis::disputes::DisputesApi::upload_url).
    #[builder(setter(into))]
    pub uploaded_filename: String,
    /// Evidence ID, for fraud claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub evidence: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ExportDisputesRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub transaction: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub status: Option<DisputeStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_timestamp"
    )]
    #[builder(setter(strip_option))]
    pub from: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_timestamp"
    )]
    #[builder(setter(strip_option))]
    pub to: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Evidence {
    pub id: u64,
    pub customer_email: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_details: String,
    pub delivery_address: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub dispute: Option<u64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UploadUrl {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Dispute {
    pub id: u64,
    pub refund_amount: Option<u64>,
    pub currency: Option<Currency>,
    pub status: DisputeStatus,
    pub resolution: Option<DisputeResolution>,
    pub domain: Option<String>,
    pub transaction: Option<serde_json::Value>,
    pub transaction_reference: Option<String>,
    pub category: Option<String>,
    pub customer: Option<CustomerSummary>,
    pub bin: Option<String>,
    pub last4: Option<String>,
    pub evidence: Option<serde_json::Value>,
    pub attachments: Option<serde_json::Value>,
    pub note: Option<String>,
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,
    #[serde(rename = "dueAt")]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(rename = "resolvedAt")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
