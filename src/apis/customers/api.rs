use crate::{
    apis::{
        customers::{
            CreateCustomerRequest, Customer, DeactivateAuthorizationRequest,
            ListCustomersRequest, SetRiskActionRequest, UpdateCustomerRequest,
            ValidateCustomerRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<PaystackClientInner>,
}

impl CustomersApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a customer on your integration.
    #[tracing::instrument(name = "Create Customer", skip(self, request))]
    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<Response<Customer>, Error> {
        ensure_not_empty("email", &request.email)?;

        self.inner.post("/customer", request).await
    }

    #[tracing::instrument(name = "List Customers", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListCustomersRequest,
    ) -> Result<Response<Vec<Customer>>, Error> {
        self.inner.get_with_query("/customer", request).await
    }

    /// Gets a customer by email address or customer code.
    #[tracing::instrument(name = "Fetch Customer", skip(self))]
    pub async fn fetch(&self, email_or_code: &str) -> Result<Response<Customer>, Error> {
        ensure_not_empty("email_or_code", email_or_code)?;

        self.inner
            .get(&format!("/customer/{}", encode(email_or_code)))
            .await
    }

    #[tracing::instrument(name = "Update Customer", skip(self, request))]
    pub async fn update(
        &self,
        code: &str,
        request: &UpdateCustomerRequest,
    ) -> Result<Response<Customer>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .put(&format!("/customer/{}", encode(code)), request)
            .await
    }

    /// Submits identity details for a customer.
    ///
    /// Validation completes asynchronously; the outcome is delivered by webhook.
    #[tracing::instrument(name = "Validate Customer", skip(self, request))]
    pub async fn validate(
        &self,
        code: &str,
        request: &ValidateCustomerRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;
        ensure_not_empty("account_number", &request.account_number)?;
        ensure_not_empty("bvn", &request.bvn)?;
        ensure_not_empty("bank_code", &request.bank_code)?;

        self.inner
            .post(&format!("/customer/{}/identification", encode(code)), request)
            .await
    }

    /// Whitelists or blacklists a customer.
    #[tracing::instrument(
        name = "Set Customer Risk Action",
        skip(self, request),
        fields(risk_action = ?request.risk_action)
    )]
    pub async fn set_risk_action(
        &self,
        request: &SetRiskActionRequest,
    ) -> Result<Response<Customer>, Error> {
        ensure_not_empty("customer", &request.customer)?;

        self.inner.post("/customer/set_risk_action", request).await
    }

    /// Deactivates an authorization so it can no longer be charged.
    #[tracing::instrument(name = "Deactivate Authorization", skip(self, authorization_code))]
    pub async fn deactivate_authorization(
        &self,
        authorization_code: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("authorization_code", authorization_code)?;

        self.inner
            .post(
                "/customer/deactivate_authorization",
                &DeactivateAuthorizationRequest {
                    authorization_code: authorization_code.to_string(),
                },
            )
            .await
    }
}
