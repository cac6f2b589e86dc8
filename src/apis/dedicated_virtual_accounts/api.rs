use crate::{
    apis::{
        dedicated_virtual_accounts::{
            AssignDedicatedAccountRequest, BankProvider, CreateDedicatedAccountRequest,
            DedicatedAccount, ListDedicatedAccountsRequest, RemoveDedicatedAccountSplitRequest,
            RequeryDedicatedAccountRequest, SplitDedicatedAccountRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;

/// Paystack Dedicated Virtual Accounts APIs client.
#[derive(Clone, Debug)]
pub struct DedicatedVirtualAccountsApi {
    inner: Arc<PaystackClientInner>,
}

impl DedicatedVirtualAccountsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a dedicated virtual account for an existing customer.
    #[tracing::instrument(
        name = "Create Dedicated Account",
        skip(self, request),
        fields(customer = %request.customer, preferred_bank = ?request.preferred_bank)
    )]
    pub async fn create(
        &self,
        request: &CreateDedicatedAccountRequest,
    ) -> Result<Response<DedicatedAccount>, Error> {
        ensure_not_empty("customer", &request.customer)?;

        self.inner.post("/dedicated_account", request).await
    }

    /// Creates a customer, validates them and assigns a dedicated account.
    ///
    /// The account is delivered asynchronously through webhooks.
    #[tracing::instrument(
        name = "Assign Dedicated Account",
        skip(self, request),
        fields(preferred_bank = %request.preferred_bank)
    )]
    pub async fn assign(
        &self,
        request: &AssignDedicatedAccountRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("email", &request.email)?;
        ensure_not_empty("preferred_bank", &request.preferred_bank)?;
        ensure_not_empty("country", &request.country)?;

        self.inner.post("/dedicated_account/assign", request).await
    }

    #[tracing::instrument(name = "List Dedicated Accounts", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListDedicatedAccountsRequest,
    ) -> Result<Response<Vec<DedicatedAccount>>, Error> {
        self.inner
            .get_with_query("/dedicated_account", request)
            .await
    }

    #[tracing::instrument(name = "Fetch Dedicated Account", skip(self))]
    pub async fn fetch(&self, id: u64) -> Result<Response<DedicatedAccount>, Error> {
        self.inner.get(&format!("/dedicated_account/{}", id)).await
    }

    /// Asks Paystack to check for transfers into an account that have not been notified yet.
    #[tracing::instrument(
        name = "Requery Dedicated Account",
        skip(self, request),
        fields(provider_slug = %request.provider_slug)
    )]
    pub async fn requery(
        &self,
        request: &RequeryDedicatedAccountRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("account_number", &request.account_number)?;
        ensure_not_empty("provider_slug", &request.provider_slug)?;

        self.inner
            .get_with_query("/dedicated_account/requery", request)
            .await
    }

    #[tracing::instrument(name = "Deactivate Dedicated Account", skip(self))]
    pub async fn deactivate(&self, id: u64) -> Result<Response<DedicatedAccount>, Error> {
        self.inner
            .delete(&format!("/dedicated_account/{}", id))
            .await
    }

    /// Splits payments received on a dedicated account with a subaccount or split.
    #[tracing::instrument(name = "Split Dedicated Account", skip(self, request))]
    pub async fn split(
        &self,
        request: &SplitDedicatedAccountRequest,
    ) -> Result<Response<DedicatedAccount>, Error> {
        ensure_not_empty("customer", &request.customer)?;

        self.inner.post("/dedicated_account/split", request).await
    }

    #[tracing::instrument(name = "Remove Dedicated Account Split", skip(self))]
    pub async fn remove_split(
        &self,
        account_number: &str,
    ) -> Result<Response<DedicatedAccount>, Error> {
        ensure_not_empty("account_number", account_number)?;

        self.inner
            .delete_with_body(
                "/dedicated_account/split",
                &RemoveDedicatedAccountSplitRequest {
                    account_number: account_number.to_string(),
                },
            )
            .await
    }

    /// Lists the banks a dedicated account can be created with.
    #[tracing::instrument(name = "Fetch Bank Providers", skip(self))]
    pub async fn fetch_bank_providers(&self) -> Result<Response<Vec<BankProvider>>, Error> {
        self.inner
            .get("/dedicated_account/available_providers")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::{
        dedicated_virtual_accounts::{
            CreateDedicatedAccountRequestBuilder, ListDedicatedAccountsRequestBuilder,
        },
        test_support::mock_inner_and_server,
    };
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_api_and_server() -> (DedicatedVirtualAccountsApi, MockServer) {
        let (inner, mock_server) = mock_inner_and_server().await;
        (DedicatedVirtualAccountsApi::new(inner), mock_server)
    }

    fn account_json() -> serde_json::Value {
        json!({
            "id": 59,
            "account_name": "KAROKART/A YINKA",
            "account_number": "9930020212",
            "assigned": true,
            "currency": "NGN",
            "metadata": null,
            "active": true,
            "split_config": null,
            "bank": { "name": "Test Bank", "id": 1, "slug": "test-bank" },
            "customer": {
                "id": 1530104,
                "first_name": "yinka",
                "last_name": "Ojo",
                "email": "hello@company.com",
                "customer_code": "CUS_dy1r7ts03zstbq5",
                "phone": "",
                "metadata": null,
                "risk_action": "default"
            },
            "assignment": {
                "integration": 100043,
                "assignee_id": 1530104,
                "assignee_type": "Customer",
                "expired": false,
                "account_type": "PAY-WITH-TRANSFER-RECURRING",
                "assigned_at": "2020-03-03T11:17:04.296Z"
            },
            "created_at": "2019-12-12T12:39:04.000Z",
            "updated_at": "2020-01-06T15:51:24.000Z"
        })
    }

    #[tokio::test]
    async fn create() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("POST"))
            .and(path("/dedicated_account"))
            .and(body_json(json!({
                "customer": "CUS_dy1r7ts03zstbq5",
                "preferred_bank": "wema-bank"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "NUBAN successfully created",
                "data": account_json()
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = CreateDedicatedAccountRequestBuilder::default()
            .customer("CUS_dy1r7ts03zstbq5")
            .preferred_bank("wema-bank")
            .build()
            .unwrap();
        let account = api.create(&request).await.unwrap().into_data().unwrap();

        assert_eq!(account.account_number, "9930020212");
        assert_eq!(account.bank.map(|b| b.name).as_deref(), Some("Test Bank"));
    }

    #[tokio::test]
    async fn list_filters_by_active() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("GET"))
            .and(path("/dedicated_account"))
            .and(query_param("active", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Managed accounts successfully retrieved",
                "data": [account_json()],
                "meta": { "total": 1, "skipped": 0, "perPage": 50, "page": 1, "pageCount": 1 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = ListDedicatedAccountsRequestBuilder::default()
            .active(true)
            .build()
            .unwrap();
        let accounts = api.list(&request).await.unwrap().into_data().unwrap();

        assert_eq!(accounts.len(), 1);
    }

    #[tokio::test]
    async fn deactivate() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("DELETE"))
            .and(path("/dedicated_account/59"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Managed Account Successfully Unassigned",
                "data": account_json()
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        api.deactivate(59).await.unwrap();
    }

    #[tokio::test]
    async fn remove_split() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("DELETE"))
            .and(path("/dedicated_account/split"))
            .and(body_json(json!({ "account_number": "9930020212" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Subaccount unassigned",
                "data": account_json()
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        api.remove_split("9930020212").await.unwrap();
    }

    #[tokio::test]
    async fn fetch_bank_providers() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("GET"))
            .and(path("/dedicated_account/available_providers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Dedicated account providers retrieved",
                "data": [
                    { "provider_slug": "access-bank", "bank_id": 1, "bank_name": "Access Bank", "id": 6 },
                    { "provider_slug": "wema-bank", "bank_id": 20, "bank_name": "Wema Bank", "id": 5 }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let providers = api.fetch_bank_providers().await.unwrap().into_data().unwrap();

        assert_eq!(providers[1].provider_slug, "wema-bank");
    }
}
