//! Module containing the main Paystack API client.

use crate::{
    apis::{
        apple_pay::ApplePayApi, bulk_charges::BulkChargesApi, charges::ChargesApi,
        customers::CustomersApi, dedicated_virtual_accounts::DedicatedVirtualAccountsApi,
        disputes::DisputesApi, integration::IntegrationApi, miscellaneous::MiscellaneousApi,
        payment_pages::PaymentPagesApi, payment_requests::PaymentRequestsApi, plans::PlansApi,
        products::ProductsApi, refunds::RefundsApi, settlements::SettlementsApi,
        subaccounts::SubaccountsApi, subscriptions::SubscriptionsApi, terminals::TerminalsApi,
        transaction_splits::TransactionSplitsApi, transactions::TransactionsApi,
        transfer_control::TransferControlApi, transfer_recipients::TransferRecipientsApi,
        transfers::TransfersApi, verification::VerificationApi,
        virtual_terminals::VirtualTerminalsApi, PaystackClientInner,
    },
    common::DEFAULT_BASE_URL,
    middlewares::{
        authentication::AuthenticationMiddleware,
        error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
    },
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use secrecy::SecretString;
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

/// Client for Paystack public APIs.
///
/// Every resource client shares the same underlying HTTP client, so cloning
/// a [`PaystackClient`] is cheap.
///
/// Each call is exactly one HTTP round trip. Failed calls are never retried.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    pub apple_pay: ApplePayApi,
    pub bulk_charges: BulkChargesApi,
    pub charges: ChargesApi,
    pub customers: CustomersApi,
    pub dedicated_virtual_accounts: DedicatedVirtualAccountsApi,
    pub disputes: DisputesApi,
    pub integration: IntegrationApi,
    pub miscellaneous: MiscellaneousApi,
    pub payment_pages: PaymentPagesApi,
    pub payment_requests: PaymentRequestsApi,
    pub plans: PlansApi,
    pub products: ProductsApi,
    pub refunds: RefundsApi,
    pub settlements: SettlementsApi,
    pub subaccounts: SubaccountsApi,
    pub subscriptions: SubscriptionsApi,
    pub terminals: TerminalsApi,
    pub transaction_splits: TransactionSplitsApi,
    pub transactions: TransactionsApi,
    pub transfer_control: TransferControlApi,
    pub transfer_recipients: TransferRecipientsApi,
    pub transfers: TransfersApi,
    pub verification: VerificationApi,
    pub virtual_terminals: VirtualTerminalsApi,
}

impl PaystackClient {
    /// Builds a new [`PaystackClient`] with the default configuration.
    pub fn new(secret_key: impl Into<String>) -> Result<PaystackClient, Error> {
        PaystackClientBuilder::new(secret_key)?.build()
    }

    /// Returns a new builder to configure a new [`PaystackClient`].
    pub fn builder(secret_key: impl Into<String>) -> Result<PaystackClientBuilder, Error> {
        PaystackClientBuilder::new(secret_key)
    }

    fn from_inner(inner: Arc<PaystackClientInner>) -> Self {
        Self {
            apple_pay: ApplePayApi::new(inner.clone()),
            bulk_charges: BulkChargesApi::new(inner.clone()),
            charges: ChargesApi::new(inner.clone()),
            customers: CustomersApi::new(inner.clone()),
            dedicated_virtual_accounts: DedicatedVirtualAccountsApi::new(inner.clone()),
            disputes: DisputesApi::new(inner.clone()),
            integration: IntegrationApi::new(inner.clone()),
            miscellaneous: MiscellaneousApi::new(inner.clone()),
            payment_pages: PaymentPagesApi::new(inner.clone()),
            payment_requests: PaymentRequestsApi::new(inner.clone()),
            plans: PlansApi::new(inner.clone()),
            products: ProductsApi::new(inner.clone()),
            refunds: RefundsApi::new(inner.clone()),
            settlements: SettlementsApi::new(inner.clone()),
            subaccounts: SubaccountsApi::new(inner.clone()),
            subscriptions: SubscriptionsApi::new(inner.clone()),
            terminals: TerminalsApi::new(inner.clone()),
            transaction_splits: TransactionSplitsApi::new(inner.clone()),
            transactions: TransactionsApi::new(inner.clone()),
            transfer_control: TransferControlApi::new(inner.clone()),
            transfer_recipients: TransferRecipientsApi::new(inner.clone()),
            transfers: TransfersApi::new(inner.clone()),
            verification: VerificationApi::new(inner.clone()),
            virtual_terminals: VirtualTerminalsApi::new(inner),
        }
    }
}

/// Builder for a [`PaystackClient`].
pub struct PaystackClientBuilder {
    client: reqwest::Client,
    base_url: Url,
    secret_key: SecretString,
}

impl PaystackClientBuilder {
    /// Creates a new builder to configure a [`PaystackClient`].
    ///
    /// Fails if the secret key is empty.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, Error> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(Error::ValidationError {
                field: "secret_key",
                message: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: default_base_url()?,
            secret_key: SecretString::new(secret_key),
        })
    }

    /// Consumes the builder and builds a new [`PaystackClient`].
    pub fn build(self) -> Result<PaystackClient, Error> {
        let inner = Arc::new(PaystackClientInner {
            client: build_client_with_middleware(self.client, &self.secret_key)?,
            base_url: self.base_url,
        });

        Ok(PaystackClient::from_inner(inner))
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Timeouts, proxies and TLS settings are taken from this client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the base URL all request paths are resolved against.
    ///
    /// Defaults to: `https://api.paystack.co`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }
}

impl Debug for PaystackClientBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaystackClientBuilder")
            .field("base_url", &self.base_url.as_str())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

fn default_base_url() -> Result<Url, Error> {
    Url::parse(DEFAULT_BASE_URL).map_err(|e| Error::Other(e.into()))
}

pub(crate) fn build_client_with_middleware(
    client: reqwest::Client,
    secret_key: &SecretString,
) -> Result<ClientWithMiddleware, Error> {
    let builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::new())
        .with(InjectUserAgentMiddleware::new())
        .with(ErrorHandlingMiddleware)
        .with(AuthenticationMiddleware::new(secret_key)?);

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn empty_secret_key_is_rejected() {
        let err = PaystackClient::new("  ").unwrap_err();

        assert!(matches!(err, Error::ValidationError { field: "secret_key", .. }));
    }

    #[test]
    fn debug_output_hides_secret_key() {
        let builder = PaystackClient::builder("sk_test_very-secret").unwrap();
        let client = PaystackClient::builder("sk_test_very-secret")
            .unwrap()
            .build()
            .unwrap();

        assert!(!format!("{:?}", builder).contains("very-secret"));
        assert!(!format!("{:?}", client).contains("very-secret"));
    }

    #[tokio::test]
    async fn resource_clients_share_configuration() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/balance"))
            .and(header("Authorization", "Bearer sk_test_shared"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Balances retrieved",
                "data": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/country"))
            .and(header("Authorization", "Bearer sk_test_shared"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Countries retrieved",
                "data": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = PaystackClient::builder("sk_test_shared")
            .unwrap()
            .with_base_url(Url::parse(&mock_server.uri()).unwrap())
            .build()
            .unwrap();
        let cloned = client.clone();

        client.transfer_control.check_balance().await.unwrap();
        cloned.miscellaneous.list_countries().await.unwrap();
    }

    #[tokio::test]
    async fn failed_calls_are_not_retried() {
        let mock_server = MockServer::start().await;

        for (http_method, request_path) in
            [("GET", "/transfer/verify/ref_1"), ("POST", "/transfer")]
        {
            Mock::given(method(http_method))
                .and(path(request_path))
                .respond_with(ResponseTemplate::new(503))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = PaystackClient::builder("sk_test_no-retry")
            .unwrap()
            .with_base_url(Url::parse(&mock_server.uri()).unwrap())
            .build()
            .unwrap();

        let err = client.transfers.verify("ref_1").await.unwrap_err();
        assert!(err.is_server_error());

        let request = crate::apis::transfers::InitiateTransferRequestBuilder::default()
            .source(crate::apis::transfers::TransferSource::Balance)
            .amount(100)
            .recipient("RCP_t0ya41mp35flk40")
            .build()
            .unwrap();
        let err = client.transfers.initiate(&request).await.unwrap_err();
        assert!(err.is_server_error());
    }
}
