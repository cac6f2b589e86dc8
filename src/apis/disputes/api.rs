use crate::{
    apis::{
        common::ExportFile,
        disputes::{
            AddEvidenceRequest, Dispute, Evidence, ExportDisputesRequest, ListDisputesRequest,
            ResolveDisputeRequest, UpdateDisputeRequest, UploadUrl, UploadUrlRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;

/// Paystack Disputes APIs client.
#[derive(Clone, Debug)]
pub struct DisputesApi {
    inner: Arc<PaystackClientInner>,
}

impl DisputesApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "List Disputes", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListDisputesRequest,
    ) -> Result<Response<Vec<Dispute>>, Error> {
        self.inner.get_with_query("/dispute", request).await
    }

    #[tracing::instrument(name = "Fetch Dispute", skip(self))]
    pub async fn fetch(&self, id: u64) -> Result<Response<Dispute>, Error> {
        self.inner.get(&format!("/dispute/{}", id)).await
    }

    /// Gets the dispute opened on a transaction.
    #[tracing::instrument(name = "List Transaction Disputes", skip(self))]
    pub async fn list_transaction_disputes(
        &self,
        transaction_id: u64,
    ) -> Result<Response<Dispute>, Error> {
        self.inner
            .get(&format!("/dispute/transaction/{}", transaction_id))
            .await
    }

    #[tracing::instrument(
        name = "Update Dispute",
        skip(self, request),
        fields(refund_amount = request.refund_amount)
    )]
    pub async fn update(
        &self,
        id: u64,
        request: &UpdateDisputeRequest,
    ) -> Result<Response<Dispute>, Error> {
        self.inner.put(&format!("/dispute/{}", id), request).await
    }

    #[tracing::instrument(name = "Add Dispute Evidence", skip(self, request))]
    pub async fn add_evidence(
        &self,
        id: u64,
        request: &AddEvidenceRequest,
    ) -> Result<Response<Evidence>, Error> {
        ensure_not_empty("customer_email", &request.customer_email)?;
        ensure_not_empty("customer_name", &request.customer_name)?;
        ensure_not_empty("customer_phone", &request.customer_phone)?;
        ensure_not_empty("service_details", &request.service_details)?;

        self.inner
            .post(&format!("/dispute/{}/evidence", id), request)
            .await
    }

    /// Gets a signed URL to upload a dispute evidence file to.
    #[tracing::instrument(name = "Get Dispute Upload URL", skip(self))]
    pub async fn upload_url(
        &self,
        id: u64,
        upload_filename: &str,
    ) -> Result<Response<UploadUrl>, Error> {
        ensure_not_empty("upload_filename", upload_filename)?;

        self.inner
            .get_with_query(
                &format!("/dispute/{}/upload_url", id),
                &UploadUrlRequest {
                    upload_filename: upload_filename.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(
        name = "Resolve Dispute",
        skip(self, request),
        fields(resolution = ?request.resolution, refund_amount = request.refund_amount)
    )]
    pub async fn resolve(
        &self,
        id: u64,
        request: &ResolveDisputeRequest,
    ) -> Result<Response<Dispute>, Error> {
        ensure_not_empty("message", &request.message)?;
        ensure_not_empty("uploaded_filename", &request.uploaded_filename)?;

        self.inner
            .put(&format!("/dispute/{}/resolve", id), request)
            .await
    }

    #[tracing::instrument(name = "Export Disputes", skip(self, request))]
    pub async fn export(
        &self,
        request: &ExportDisputesRequest,
    ) -> Result<Response<ExportFile>, Error> {
        self.inner.get_with_query("/dispute/export", request).await
    }
}
