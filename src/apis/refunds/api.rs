use crate::{
    apis::{
        refunds::{CreateRefundRequest, ListRefundsRequest, Refund},
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;

/// Paystack Refunds APIs client.
#[derive(Clone, Debug)]
pub struct RefundsApi {
    inner: Arc<PaystackClientInner>,
}

impl RefundsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Refunds a transaction, fully or in part.
    #[tracing::instrument(
        name = "Create Refund",
        skip(self, request),
        fields(transaction = %request.transaction, amount = ?request.amount)
    )]
    pub async fn create(&self, request: &CreateRefundRequest) -> Result<Response<Refund>, Error> {
        ensure_not_empty("transaction", &request.transaction)?;

        self.inner.post("/refund", request).await
    }

    #[tracing::instrument(name = "List Refunds", skip(self, request))]
    pub async fn list(&self, request: &ListRefundsRequest) -> Result<Response<Vec<Refund>>, Error> {
        self.inner.get_with_query("/refund", request).await
    }

    #[tracing::instrument(name = "Fetch Refund", skip(self))]
    pub async fn fetch(&self, id: u64) -> Result<Response<Refund>, Error> {
        self.inner.get(&format!("/refund/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::{
        common::Currency,
        refunds::{CreateRefundRequestBuilder, ListRefundsRequestBuilder, RefundStatus},
        test_support::mock_inner_and_server,
    };
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_api_and_server() -> (RefundsApi, MockServer) {
        let (inner, mock_server) = mock_inner_and_server().await;
        (RefundsApi::new(inner), mock_server)
    }

    fn refund_json() -> serde_json::Value {
        json!({
            "id": 1,
            "integration": 100982,
            "domain": "live",
            "transaction": 1641,
            "dispute": null,
            "amount": 500000,
            "deducted_amount": 0,
            "currency": "NGN",
            "channel": null,
            "fully_deducted": false,
            "refunded_by": "customer@gmail.com",
            "refunded_at": null,
            "expected_at": "2017-10-01T21:10:59.000Z",
            "settlement": null,
            "customer_note": "Refund for transaction T685312322670591",
            "merchant_note": "Refund for transaction T685312322670591 by customer@gmail.com",
            "status": "pending",
            "createdAt": "2017-09-24T21:10:59.000Z",
            "updatedAt": "2017-09-24T21:10:59.000Z"
        })
    }

    #[tokio::test]
    async fn create_partial_refund() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("POST"))
            .and(path("/refund"))
            .and(body_json(json!({ "transaction": "T685312322670591", "amount": 500000 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Refund has been queued for processing",
                "data": refund_json()
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = CreateRefundRequestBuilder::default()
            .transaction("T685312322670591")
            .amount(500000)
            .build()
            .unwrap();
        let refund = api.create(&request).await.unwrap().into_data().unwrap();

        assert_eq!(refund.status, RefundStatus::Pending);
        assert_eq!(refund.currency, Currency::Ngn);
    }

    #[tokio::test]
    async fn list_by_transaction_reference() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("GET"))
            .and(path("/refund"))
            .and(query_param("reference", "T685312322670591"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Refunds retrieved",
                "data": [refund_json()]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = ListRefundsRequestBuilder::default()
            .transaction("T685312322670591")
            .build()
            .unwrap();
        let refunds = api.list(&request).await.unwrap().into_data().unwrap();

        assert_eq!(refunds.len(), 1);
    }
}
