use crate::apis::common::{Authorization, Currency, CustomerSummary};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BankDetails {
    pub code: String,
    pub account_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UssdDetails {
    /// USSD code of the bank, e.g. `737`.
    #[serde(rename = "type")]
    pub ussd_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MobileMoneyDetails {
    pub phone: String,
    /// Provider code, e.g. `mtn`.
    pub provider: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BankTransferDetails {
    pub account_expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct CreateChargeRequest {
    #[builder(setter(into))]
    pub email: String,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub bank: Option<BankDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub bank_transfer: Option<BankTransferDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub authorization_code: Option<String>,
    /// Card PIN, only together with `authorization_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub ussd: Option<UssdDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub mobile_money: Option<MobileMoneyDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub device_id: Option<String>,
    /// Formatted `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub birthday: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SubmitPinRequest {
    pub pin: String,
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SubmitOtpRequest {
    pub otp: String,
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SubmitPhoneRequest {
    pub phone: String,
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SubmitBirthdayRequest {
    /// Formatted `YYYY-MM-DD`.
    pub birthday: String,
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct SubmitAddressRequest {
    #[builder(setter(into))]
    pub address: String,
    #[builder(setter(into))]
    pub reference: String,
    #[builder(setter(into))]
    pub city: String,
    #[builder(setter(into))]
    pub state: String,
    #[builder(setter(into))]
    pub zip_code: String,
}

/// What the charge needs next, or how it ended.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    Failed,
    Pending,
    Timeout,
    SendPin,
    SendOtp,
    SendPhone,
    SendBirthday,
    SendAddress,
    OpenUrl,
    PayOffline,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Charge {
    pub reference: String,
    pub status: ChargeStatus,
    pub id: Option<u64>,
    pub amount: Option<u64>,
    pub currency: Option<Currency>,
    pub domain: Option<String>,
    pub channel: Option<String>,
    pub gateway_response: Option<String>,
    /// Text to show the customer alongside the next step.
    pub display_text: Option<String>,
    pub message: Option<String>,
    /// Where to send the customer when the status is `open_url`.
    pub url: Option<String>,
    pub ussd_code: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub metadata: Option<serde_json::Value>,
    pub customer: Option<CustomerSummary>,
    pub authorization: Option<Authorization>,
}
