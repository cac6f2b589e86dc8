use crate::{
    apis::{
        settlements::{ListSettlementTransactionsRequest, ListSettlementsRequest, Settlement},
        transactions::Transaction,
        PaystackClientInner,
    },
    Error, Response,
};
use std::sync::Arc;

/// Paystack Settlements APIs client.
#[derive(Clone, Debug)]
pub struct SettlementsApi {
    inner: Arc<PaystackClientInner>,
}

impl SettlementsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Lists payouts made to your bank account and those of your subaccounts.
    #[tracing::instrument(name = "List Settlements", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListSettlementsRequest,
    ) -> Result<Response<Vec<Settlement>>, Error> {
        self.inner.get_with_query("/settlement", request).await
    }

    /// Lists the transactions that make up a settlement.
    #[tracing::instrument(name = "List Settlement Transactions", skip(self, request))]
    pub async fn list_transactions(
        &self,
        id: u64,
        request: &ListSettlementTransactionsRequest,
    ) -> Result<Response<Vec<Transaction>>, Error> {
        self.inner
            .get_with_query(&format!("/settlement/{}/transactions", id), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::{
        settlements::{ListSettlementsRequestBuilder, SettlementStatus},
        test_support::mock_inner_and_server,
    };
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_api_and_server() -> (SettlementsApi, MockServer) {
        let (inner, mock_server) = mock_inner_and_server().await;
        (SettlementsApi::new(inner), mock_server)
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("GET"))
            .and(path("/settlement"))
            .and(query_param("status", "success"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Settlements retrieved",
                "data": [{
                    "id": 3090024,
                    "domain": "test",
                    "status": "success",
                    "currency": "NGN",
                    "integration": 463433,
                    "total_amount": 30000,
                    "effective_amount": 30000,
                    "total_fees": 10000,
                    "total_processed": 20000,
                    "deductions": null,
                    "settlement_date": "2022-11-14T00:00:00.000Z",
                    "settled_by": null,
                    "createdAt": "2022-11-14T10:01:15.000Z",
                    "updatedAt": "2022-11-14T10:01:15.000Z"
                }],
                "meta": { "total": 1, "skipped": 0, "perPage": 50, "page": 1, "pageCount": 1 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = ListSettlementsRequestBuilder::default()
            .status(SettlementStatus::Success)
            .build()
            .unwrap();
        let settlements = api.list(&request).await.unwrap().into_data().unwrap();

        assert_eq!(settlements[0].total_amount, 30000);
        assert_eq!(settlements[0].deductions, None);
    }

    #[tokio::test]
    async fn list_transactions_of_empty_settlement() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("GET"))
            .and(path("/settlement/3090024/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Settlement transactions retrieved",
                "data": [],
                "meta": { "total": 0, "perPage": 50, "page": 1 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .list_transactions(3090024, &Default::default())
            .await
            .unwrap();

        assert_eq!(res.meta.as_ref().and_then(|m| m.total), Some(0));
        assert!(res.into_data().unwrap().is_empty());
    }
}
