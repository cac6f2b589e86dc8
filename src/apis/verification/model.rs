use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ResolveAccountRequest {
    pub account_number: String,
    pub bank_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ResolvedAccount {
    pub account_number: String,
    pub account_name: String,
    pub bank_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Personal,
    Business,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    IdentityNumber,
    PassportNumber,
    BusinessRegistrationNumber,
}

/// Confirms ownership of an account, currently for South African accounts.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct ValidateAccountRequest {
    #[builder(setter(into))]
    pub account_name: String,
    #[builder(setter(into))]
    pub account_number: String,
    pub account_type: AccountType,
    #[builder(setter(into))]
    pub bank_code: String,
    /// Two-letter country code, e.g. `ZA`.
    #[builder(setter(into))]
    pub country_code: String,
    pub document_type: DocumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub document_number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountValidation {
    pub verified: bool,
    #[serde(rename = "verificationMessage")]
    pub verification_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CardBin {
    pub bin: String,
    pub brand: Option<String>,
    pub sub_brand: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub card_type: Option<String>,
    pub bank: Option<String>,
    pub linked_bank_id: Option<u64>,
}
