use crate::{
    apis::{
        apple_pay::{ApplePayDomainRequest, ApplePayDomains},
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;

/// Paystack Apple Pay APIs client.
#[derive(Clone, Debug)]
pub struct ApplePayApi {
    inner: Arc<PaystackClientInner>,
}

impl ApplePayApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Registers a top-level domain or subdomain for Apple Pay.
    #[tracing::instrument(name = "Register Apple Pay Domain", skip(self))]
    pub async fn register_domain(
        &self,
        domain_name: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("domain_name", domain_name)?;

        self.inner
            .post(
                "/apple-pay/domain",
                &ApplePayDomainRequest {
                    domain_name: domain_name.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(name = "List Apple Pay Domains", skip(self))]
    pub async fn list_domains(&self) -> Result<Response<ApplePayDomains>, Error> {
        self.inner.get("/apple-pay/domain").await
    }

    #[tracing::instrument(name = "Unregister Apple Pay Domain", skip(self))]
    pub async fn unregister_domain(
        &self,
        domain_name: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("domain_name", domain_name)?;

        self.inner
            .delete_with_body(
                "/apple-pay/domain",
                &ApplePayDomainRequest {
                    domain_name: domain_name.to_string(),
                },
            )
            .await
    }
}
