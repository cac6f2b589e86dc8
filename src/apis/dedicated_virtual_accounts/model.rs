use crate::apis::common::{BankSummary, Currency, CustomerSummary};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct CreateDedicatedAccountRequest {
    /// Customer ID or code.
    #[builder(setter(into))]
    pub customer: String,
    /// Provider slug, e.g. `wema-bank`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub preferred_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub phone: Option<String>,
}

/// Creates a customer, validates them and assigns a dedicated account in one go.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct AssignDedicatedAccountRequest {
    #[builder(setter(into))]
    pub email: String,
    #[builder(setter(into))]
    pub first_name: String,
    #[builder(setter(into))]
    pub last_name: String,
    #[builder(setter(into))]
    pub phone: String,
    #[builder(setter(into))]
    pub preferred_bank: String,
    #[builder(setter(into))]
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub bvn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub split_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListDedicatedAccountsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub provider_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub customer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct RequeryDedicatedAccountRequest {
    #[builder(setter(into))]
    pub account_number: String,
    #[builder(setter(into))]
    pub provider_slug: String,
    /// Day to check, formatted `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct SplitDedicatedAccountRequest {
    #[builder(setter(into))]
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub preferred_bank: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RemoveDedicatedAccountSplitRequest {
    pub account_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DedicatedAccountAssignment {
    pub integration: Option<u64>,
    pub assignee_id: Option<u64>,
    pub assignee_type: Option<String>,
    pub expired: Option<bool>,
    pub account_type: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DedicatedAccount {
    pub id: u64,
    pub account_name: Option<String>,
    pub account_number: String,
    pub assigned: Option<bool>,
    pub currency: Option<Currency>,
    pub metadata: Option<serde_json::Value>,
    pub active: bool,
    pub split_config: Option<serde_json::Value>,
    pub bank: Option<BankSummary>,
    pub customer: Option<CustomerSummary>,
    pub assignment: Option<DedicatedAccountAssignment>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BankProvider {
    pub id: u64,
    pub provider_slug: String,
    pub bank_id: u64,
    pub bank_name: String,
}
