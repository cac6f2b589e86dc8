use crate::{
    apis::{
        integration::{PaymentSessionTimeout, UpdateTimeoutRequest},
        PaystackClientInner,
    },
    Error, Response,
};
use std::sync::Arc;

/// Paystack Integration APIs client.
#[derive(Clone, Debug)]
pub struct IntegrationApi {
    inner: Arc<PaystackClientInner>,
}

impl IntegrationApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Fetch Payment Session Timeout", skip(self))]
    pub async fn fetch_timeout(&self) -> Result<Response<PaymentSessionTimeout>, Error> {
        self.inner.get("/integration/payment_session_timeout").await
    }

    #[tracing::instrument(
        name = "Update Payment Session Timeout",
        skip(self, request),
        fields(timeout = request.timeout)
    )]
    pub async fn update_timeout(
        &self,
        request: &UpdateTimeoutRequest,
    ) -> Result<Response<PaymentSessionTimeout>, Error> {
        self.inner
            .put("/integration/payment_session_timeout", request)
            .await
    }
}
