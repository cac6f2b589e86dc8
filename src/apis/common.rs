//! Types shared by several Paystack APIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ngn,
    Ghs,
    Zar,
    Usd,
    Kes,
    Xof,
    Egp,
    /// Any currency this crate does not model yet.
    #[serde(other)]
    Unknown,
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Currency::Ngn => "NGN",
            Currency::Ghs => "GHS",
            Currency::Zar => "ZAR",
            Currency::Usd => "USD",
            Currency::Kes => "KES",
            Currency::Xof => "XOF",
            Currency::Egp => "EGP",
            Currency::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Payment channels that can be offered to a customer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Card,
    Bank,
    Ussd,
    Qr,
    MobileMoney,
    BankTransfer,
    Eft,
    ApplePay,
}

/// Who bears Paystack's fees on a split payment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Bearer {
    Account,
    Subaccount,
    AllProportional,
    All,
    #[serde(other)]
    Unknown,
}

/// Whether a customer is allowed or denied to transact.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Default,
    Allow,
    Deny,
    #[serde(other)]
    Unknown,
}

/// A reusable card or bank authorization.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Authorization {
    pub authorization_code: Option<String>,
    pub bin: Option<String>,
    pub last4: Option<String>,
    pub exp_month: Option<String>,
    pub exp_year: Option<String>,
    pub channel: Option<String>,
    pub card_type: Option<String>,
    pub bank: Option<String>,
    pub country_code: Option<String>,
    pub brand: Option<String>,
    pub reusable: Option<bool>,
    pub signature: Option<String>,
    pub account_name: Option<String>,
}

/// The customer object embedded in transactions, subscriptions and other resources.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerSummary {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub customer_code: String,
    pub phone: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub risk_action: Option<RiskAction>,
}

/// A bank as returned inside account-related resources.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BankSummary {
    pub id: Option<u64>,
    pub name: String,
    pub slug: Option<String>,
}

/// Amount totals grouped by currency.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub amount: i64,
}

/// Link to a generated export file.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ExportFile {
    pub path: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
}
