use crate::{apis::common::Currency, common::serialize_optional_timestamp};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct CreateRefundRequest {
    /// Transaction reference or ID.
    #[builder(setter(into))]
    pub transaction: String,
    /// Defaults to the full transaction amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub customer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub merchant_note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListRefundsRequest {
    /// Only refunds of the transaction with this reference.
    #[serde(rename = "reference", skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub transaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub currency: Option<Currency>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub page: Option<u32>,
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

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Pending,
    Processing,
    Processed,
    Failed,
    NeedsAttention,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Refund {
    pub id: u64,
    pub integration: Option<u64>,
    pub domain: Option<String>,
    /// Transaction object, or only its ID in lists.
    pub transaction: Option<serde_json::Value>,
    pub dispute: Option<serde_json::Value>,
    pub amount: u64,
    pub deducted_amount: Option<u64>,
    pub currency: Currency,
    pub channel: Option<String>,
    pub fully_deducted: Option<bool>,
    pub refunded_by: Option<String>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub expected_at: Option<DateTime<Utc>>,
    pub settlement: Option<serde_json::Value>,
    pub customer_note: Option<String>,
    pub merchant_note: Option<String>,
    pub status: RefundStatus,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
