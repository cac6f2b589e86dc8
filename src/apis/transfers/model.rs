use crate::{apis::common::Currency, common::serialize_optional_timestamp};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransferSource {
    Balance,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    Success,
    Failed,
    Reversed,
    /// Waiting for the OTP to be submitted with `finalize`.
    Otp,
    Abandoned,
    Blocked,
    Rejected,
    Received,
    Processing,
    Queued,
    /// Any status Paystack introduces after this crate was released.
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct InitiateTransferRequest {
    pub source: TransferSource,
    pub amount: u64,
    /// Recipient code.
    #[builder(setter(into))]
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub currency: Option<Currency>,
    /// Unique identifier of the transfer. Lowercase letters, digits, `-` and `_` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub account_reference: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct FinalizeTransferRequest {
    pub transfer_code: String,
    pub otp: String,
}

/// One transfer of a bulk request.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct BulkTransferItem {
    pub amount: u64,
    #[builder(setter(into))]
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct BulkTransferRequest {
    pub source: TransferSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub currency: Option<Currency>,
    pub transfers: Vec<BulkTransferItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BulkTransferResult {
    pub reference: Option<String>,
    pub recipient: String,
    pub amount: u64,
    pub transfer_code: String,
    pub currency: Currency,
    pub status: TransferStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListTransfersRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub page: Option<u32>,
    /// Recipient ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub recipient: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub status: Option<TransferStatus>,
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
pub struct Transfer {
    pub id: u64,
    pub integration: Option<u64>,
    pub domain: Option<String>,
    pub amount: u64,
    pub currency: Currency,
    pub source: Option<TransferSource>,
    pub reason: Option<String>,
    /// Recipient object, or only its ID right after initiating.
    pub recipient: Option<serde_json::Value>,
    pub status: TransferStatus,
    pub transfer_code: String,
    pub reference: Option<String>,
    pub failures: Option<serde_json::Value>,
    pub titan_code: Option<String>,
    pub transferred_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
