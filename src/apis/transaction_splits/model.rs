use crate::{
    apis::common::{Bearer, Currency},
    common::serialize_optional_timestamp,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    Percentage,
    Flat,
    #[serde(other)]
    Unknown,
}

/// A subaccount and the share of each payment it receives.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SplitShare {
    /// Subaccount code, e.g. `ACCT_6uujpqtzmnufzkw`.
    pub subaccount: String,
    pub share: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct CreateSplitRequest {
    #[builder(setter(into))]
    pub name: String,
    #[serde(rename = "type")]
    pub split_type: SplitType,
    pub currency: Currency,
    pub subaccounts: Vec<SplitShare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub bearer_type: Option<Bearer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub bearer_subaccount: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct UpdateSplitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub bearer_type: Option<Bearer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub bearer_subaccount: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListSplitsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub sort_by: Option<String>,
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
pub struct RemoveSplitSubaccountRequest {
    pub subaccount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Split {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub split_type: SplitType,
    pub currency: Currency,
    pub integration: Option<u64>,
    pub domain: Option<String>,
    pub split_code: String,
    pub active: bool,
    pub bearer_type: Option<Bearer>,
    pub bearer_subaccount: Option<u64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    pub is_dynamic: Option<bool>,
    #[serde(default)]
    pub subaccounts: Vec<SplitSubaccount>,
    pub total_subaccounts: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SplitSubaccount {
    pub subaccount: SplitSubaccountDetails,
    pub share: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SplitSubaccountDetails {
    pub id: u64,
    pub subaccount_code: String,
    pub business_name: String,
    pub description: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub settlement_bank: Option<String>,
    pub currency: Option<Currency>,
    pub account_number: Option<String>,
}
