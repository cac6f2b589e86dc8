use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ApplePayDomainRequest {
    #[serde(rename = "domainName")]
    pub domain_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ApplePayDomains {
    #[serde(rename = "domainNames", default)]
    pub domain_names: Vec<String>,
}
