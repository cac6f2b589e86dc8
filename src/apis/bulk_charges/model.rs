use crate::{
    apis::common::{Authorization, Currency, CustomerSummary},
    common::serialize_optional_timestamp,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// One authorization to charge within a batch.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BulkChargeItem {
    pub authorization: String,
    pub amount: u64,
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Active,
    Paused,
    Complete,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BulkChargeBatch {
    pub id: u64,
    pub batch_code: String,
    pub reference: Option<String>,
    pub integration: Option<u64>,
    pub domain: Option<String>,
    pub status: BatchStatus,
    pub total_charges: Option<u32>,
    pub pending_charges: Option<u32>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListBatchesRequest {
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
pub enum ChargeStatus {
    Pending,
    Success,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListBatchChargesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub status: Option<ChargeStatus>,
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

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BulkCharge {
    pub id: u64,
    pub integration: Option<u64>,
    /// ID of the batch the charge belongs to.
    pub bulkcharge: Option<u64>,
    pub customer: Option<CustomerSummary>,
    pub authorization: Option<Authorization>,
    pub transaction: Option<serde_json::Value>,
    pub domain: Option<String>,
    pub amount: u64,
    pub currency: Option<Currency>,
    pub status: ChargeStatus,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
