use crate::{
    apis::{
        transfer_recipients::{
            BulkCreateRecipientsRequest, BulkCreateRecipientsResponse, CreateRecipientRequest,
            ListRecipientsRequest, Recipient, UpdateRecipientRequest,
        },
        PaystackClientInner,
    },
    common::{ensure_not_empty, ensure_not_empty_list},
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Transfer Recipients APIs client.
#[derive(Clone, Debug)]
pub struct TransferRecipientsApi {
    inner: Arc<PaystackClientInner>,
}

impl TransferRecipientsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a beneficiary that transfers can be sent to.
    #[tracing::instrument(
        name = "Create Transfer Recipient",
        skip(self, request),
        fields(recipient_type = ?request.recipient_type)
    )]
    pub async fn create(
        &self,
        request: &CreateRecipientRequest,
    ) -> Result<Response<Recipient>, Error> {
        ensure_not_empty("name", &request.name)?;

        self.inner.post("/transferrecipient", request).await
    }

    /// Creates several recipients in one call.
    ///
    /// Entries Paystack rejects are listed in the `errors` of the returned data.
    #[tracing::instrument(
        name = "Bulk Create Transfer Recipients",
        skip(self, batch),
        fields(size = batch.len())
    )]
    pub async fn bulk_create(
        &self,
        batch: Vec<CreateRecipientRequest>,
    ) -> Result<Response<BulkCreateRecipientsResponse>, Error> {
        ensure_not_empty_list("batch", &batch)?;

        self.inner
            .post(
                "/transferrecipient/bulk",
                &BulkCreateRecipientsRequest { batch },
            )
            .await
    }

    #[tracing::instrument(name = "List Transfer Recipients", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListRecipientsRequest,
    ) -> Result<Response<Vec<Recipient>>, Error> {
        self.inner
            .get_with_query("/transferrecipient", request)
            .await
    }

    #[tracing::instrument(name = "Fetch Transfer Recipient", skip(self))]
    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Recipient>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get(&format!("/transferrecipient/{}", encode(id_or_code)))
            .await
    }

    #[tracing::instrument(name = "Update Transfer Recipient", skip(self, request))]
    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdateRecipientRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;
        ensure_not_empty("name", &request.name)?;

        self.inner
            .put(&format!("/transferrecipient/{}", encode(id_or_code)), request)
            .await
    }

    /// Marks a recipient as inactive. It can no longer receive transfers.
    #[tracing::instrument(name = "Delete Transfer Recipient", skip(self))]
    pub async fn delete(&self, id_or_code: &str) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .delete(&format!("/transferrecipient/{}", encode(id_or_code)))
            .await
    }
}
