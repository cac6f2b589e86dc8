use crate::{
    apis::{
        transfers::{
            BulkTransferRequest, BulkTransferResult, FinalizeTransferRequest,
            InitiateTransferRequest, ListTransfersRequest, Transfer,
        },
        PaystackClientInner,
    },
    common::{ensure_not_empty, ensure_not_empty_list},
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Transfers APIs client.
#[derive(Clone, Debug)]
pub struct TransfersApi {
    inner: Arc<PaystackClientInner>,
}

impl TransfersApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Sends money to a recipient.
    ///
    /// When OTP is enabled on the integration the transfer comes back with status
    /// `otp` and has to be completed with [`finalize`](Self::finalize).
    #[tracing::instrument(
        name = "Initiate Transfer",
        skip(self, request),
        fields(amount = request.amount, recipient = %request.recipient, reference = ?request.reference)
    )]
    pub async fn initiate(
        &self,
        request: &InitiateTransferRequest,
    ) -> Result<Response<Transfer>, Error> {
        ensure_not_empty("recipient", &request.recipient)?;

        self.inner.post("/transfer", request).await
    }

    #[tracing::instrument(name = "Finalize Transfer", skip(self, otp))]
    pub async fn finalize(
        &self,
        transfer_code: &str,
        otp: &str,
    ) -> Result<Response<Transfer>, Error> {
        ensure_not_empty("transfer_code", transfer_code)?;
        ensure_not_empty("otp", otp)?;

        self.inner
            .post(
                "/transfer/finalize_transfer",
                &FinalizeTransferRequest {
                    transfer_code: transfer_code.to_string(),
                    otp: otp.to_string(),
                },
            )
            .await
    }

    /// Queues several transfers in one call. Requires OTP to be disabled.
    #[tracing::instrument(
        name = "Bulk Transfer",
        skip(self, request),
        fields(size = request.transfers.len())
    )]
    pub async fn bulk(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<Response<Vec<BulkTransferResult>>, Error> {
        ensure_not_empty_list("transfers", &request.transfers)?;

        self.inner.post("/transfer/bulk", request).await
    }

    #[tracing::instrument(name = "List Transfers", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListTransfersRequest,
    ) -> Result<Response<Vec<Transfer>>, Error> {
        self.inner.get_with_query("/transfer", request).await
    }

    #[tracing::instrument(name = "Fetch Transfer", skip(self))]
    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Transfer>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get(&format!("/transfer/{}", encode(id_or_code)))
            .await
    }

    #[tracing::instrument(name = "Verify Transfer", skip(self))]
    pub async fn verify(&self, reference: &str) -> Result<Response<Transfer>, Error> {
        ensure_not_empty("reference", reference)?;

        self.inner
            .get(&format!("/transfer/verify/{}", encode(reference)))
            .await
    }
}
