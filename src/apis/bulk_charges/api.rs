use crate::{
    apis::{
        bulk_charges::{
            BulkCharge, BulkChargeBatch, BulkChargeItem, ListBatchChargesRequest,
            ListBatchesRequest,
        },
        PaystackClientInner,
    },
    common::{ensure_not_empty, ensure_not_empty_list},
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Bulk Charges APIs client.
#[derive(Clone, Debug)]
pub struct BulkChargesApi {
    inner: Arc<PaystackClientInner>,
}

impl BulkChargesApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Queues a batch of authorization charges.
    ///
    /// The body is the bare array of charges. Their outcomes are reported per
    /// charge through [`fetch_charges`](Self::fetch_charges).
    #[tracing::instrument(
        name = "Initiate Bulk Charge",
        skip(self, charges),
        fields(size = charges.len())
    )]
    pub async fn initiate(
        &self,
        charges: &[BulkChargeItem],
    ) -> Result<Response<BulkChargeBatch>, Error> {
        ensure_not_empty_list("charges", charges)?;

        self.inner.post("/bulkcharge", charges).await
    }

    #[tracing::instrument(name = "List Bulk Charge Batches", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListBatchesRequest,
    ) -> Result<Response<Vec<BulkChargeBatch>>, Error> {
        self.inner.get_with_query("/bulkcharge", request).await
    }

    #[tracing::instrument(name = "Fetch Bulk Charge Batch", skip(self))]
    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<BulkChargeBatch>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get(&format!("/bulkcharge/{}", encode(id_or_code)))
            .await
    }

    #[tracing::instrument(name = "Fetch Charges In A Batch", skip(self, request))]
    pub async fn fetch_charges(
        &self,
        id_or_code: &str,
        request: &ListBatchChargesRequest,
    ) -> Result<Response<Vec<BulkCharge>>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get_with_query(
                &format!("/bulkcharge/{}/charges", encode(id_or_code)),
                request,
            )
            .await
    }

    #[tracing::instrument(name = "Pause Bulk Charge Batch", skip(self))]
    pub async fn pause(&self, batch_code: &str) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("batch_code", batch_code)?;

        self.inner
            .get(&format!("/bulkcharge/pause/{}", encode(batch_code)))
            .await
    }

    #[tracing::instrument(name = "Resume Bulk Charge Batch", skip(self))]
    pub async fn resume(&self, batch_code: &str) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("batch_code", batch_code)?;

        self.inner
            .get(&format!("/bulkcharge/resume/{}", encode(batch_code)))
            .await
    }
}
