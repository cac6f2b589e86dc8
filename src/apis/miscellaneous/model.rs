use crate::apis::common::Currency;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListBanksRequest {
    /// Lowercase country name, e.g. `nigeria`, `ghana`, `south africa`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub use_cursor: Option<bool>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub pay_with_bank_transfer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub pay_with_bank: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub enabled_for_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub gateway: Option<String>,
    /// Transfer recipient type the bank supports, e.g. `nuban` or `mobile_money`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub bank_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub currency: Option<Currency>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Bank {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub code: String,
    pub longcode: Option<String>,
    pub gateway: Option<String>,
    pub pay_with_bank: Option<bool>,
    pub supports_transfer: Option<bool>,
    pub active: bool,
    pub is_deleted: Option<bool>,
    pub country: Option<String>,
    pub currency: Option<Currency>,
    #[serde(rename = "type")]
    pub bank_type: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Country {
    pub id: u64,
    pub name: String,
    pub iso_code: String,
    pub default_currency_code: Option<String>,
    pub integration_defaults: Option<serde_json::Value>,
    pub relationships: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ListStatesRequest {
    /// Two-letter country code, e.g. `CA`.
    pub country: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct State {
    pub name: String,
    pub slug: String,
    pub abbreviation: String,
}
