use crate::{
    apis::{
        payment_requests::{
            CreatePaymentRequestRequest, FinalizePaymentRequestRequest,
            ListPaymentRequestsRequest, PaymentRequest, PaymentRequestTotals,
            UpdatePaymentRequestRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use serde_json::json;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Payment Requests APIs client.
///
/// A payment request is an invoice sent to a customer, optionally with line items and taxes.
#[derive(Clone, Debug)]
pub struct PaymentRequestsApi {
    inner: Arc<PaystackClientInner>,
}

impl PaymentRequestsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(
        name = "Create Payment Request",
        skip(self, request),
        fields(customer = %request.customer, amount = ?request.amount)
    )]
    pub async fn create(
        &self,
        request: &CreatePaymentRequestRequest,
    ) -> Result<Response<PaymentRequest>, Error> {
        ensure_not_empty("customer", &request.customer)?;

        self.inner.post("/paymentrequest", request).await
    }

    #[tracing::instrument(name = "List Payment Requests", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListPaymentRequestsRequest,
    ) -> Result<Response<Vec<PaymentRequest>>, Error> {
        self.inner.get_with_query("/paymentrequest", request).await
    }

    #[tracing::instrument(name = "Fetch Payment Request", skip(self))]
    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<PaymentRequest>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get(&format!("/paymentrequest/{}", encode(id_or_code)))
            .await
    }

    #[tracing::instrument(name = "Verify Payment Request", skip(self))]
    pub async fn verify(&self, code: &str) -> Result<Response<PaymentRequest>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .get(&format!("/paymentrequest/verify/{}", encode(code)))
            .await
    }

    /// Sends the customer a reminder email for the payment request.
    #[tracing::instrument(name = "Send Payment Request Notification", skip(self))]
    pub async fn send_notification(
        &self,
        code: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .post(
                &format!("/paymentrequest/notify/{}", encode(code)),
                &json!({}),
            )
            .await
    }

    #[tracing::instrument(name = "Payment Request Totals", skip(self))]
    pub async fn totals(&self) -> Result<Response<PaymentRequestTotals>, Error> {
        self.inner.get("/paymentrequest/totals").await
    }

    /// Finalizes a draft payment request.
    #[tracing::instrument(name = "Finalize Payment Request", skip(self))]
    pub async fn finalize(
        &self,
        code: &str,
        send_notification: Option<bool>,
    ) -> Result<Response<PaymentRequest>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .post(
                &format!("/paymentrequest/finalize/{}", encode(code)),
                &FinalizePaymentRequestRequest { send_notification },
            )
            .await
    }

    #[tracing::instrument(name = "Update Payment Request", skip(self, request))]
    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdatePaymentRequestRequest,
    ) -> Result<Response<PaymentRequest>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .put(&format!("/paymentrequest/{}", encode(id_or_code)), request)
            .await
    }

    /// Archives a payment request so it no longer shows in lists.
    #[tracing::instrument(name = "Archive Payment Request", skip(self))]
    pub async fn archive(&self, code: &str) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .post(
                &format!("/paymentrequest/archive/{}", encode(code)),
                &json!({}),
            )
            .await
    }
}
