use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct CreateSubscriptionRequest {
    /// Customer email or code.
    #[builder(setter(into))]
    pub customer: String,
    /// Plan code.
    #[builder(setter(into))]
    pub plan: String,
    /// Authorization to charge. The customer's most recent one is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub start_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct ListSubscriptionsRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub page: Option<u32>,
    /// Customer ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub customer: Option<u64>,
    /// Plan ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option))]
    pub plan: Option<u64>,
}

/// Subscription code plus the email token sent to the customer.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SubscriptionToggleRequest {
    pub code: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    NonRenewing,
    Attention,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Subscription {
    pub id: u64,
    pub domain: Option<String>,
    pub status: SubscriptionStatus,
    pub subscription_code: String,
    pub email_token: Option<String>,
    pub amount: u64,
    pub quantity: Option<u32>,
    pub cron_expression: Option<String>,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub open_invoice: Option<String>,
    pub integration: Option<u64>,
    /// Plan object, or only its ID on creation.
    pub plan: Option<serde_json::Value>,
    /// Customer object, or only its ID on creation.
    pub customer: Option<serde_json::Value>,
    pub authorization: Option<serde_json::Value>,
    #[serde(default)]
    pub invoices: Vec<serde_json::Value>,
    pub start: Option<u64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SubscriptionUpdateLink {
    pub link: String,
}
