use crate::{
    apis::{
        plans::{CreatePlanRequest, ListPlansRequest, Plan, UpdatePlanRequest},
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Plans APIs client.
#[derive(Clone, Debug)]
pub struct PlansApi {
    inner: Arc<PaystackClientInner>,
}

impl PlansApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a plan customers can subscribe to.
    #[tracing::instrument(
        name = "Create Plan",
        skip(self, request),
        fields(name = %request.name, amount = request.amount, interval = ?request.interval)
    )]
    pub async fn create(&self, request: &CreatePlanRequest) -> Result<Response<Plan>, Error> {
        ensure_not_empty("name", &request.name)?;

        self.inner.post("/plan", request).await
    }

    #[tracing::instrument(name = "List Plans", skip(self, request))]
    pub async fn list(&self, request: &ListPlansRequest) -> Result<Response<Vec<Plan>>, Error> {
        self.inner.get_with_query("/plan", request).await
    }

    #[tracing::instrument(name = "Fetch Plan", skip(self))]
    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Plan>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get(&format!("/plan/{}", encode(id_or_code)))
            .await
    }

    #[tracing::instrument(name = "Update Plan", skip(self, request))]
    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdatePlanRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .put(&format!("/plan/{}", encode(id_or_code)), request)
            .await
    }
}
