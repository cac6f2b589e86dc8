use crate::{
    apis::{
        common::ExportFile,
        transactions::{
            ChargeAuthorizationRequest, ExportTransactionsRequest, InitializeTransactionRequest,
            InitializeTransactionResponse, ListTransactionsRequest, PartialDebitRequest,
            Transaction, TransactionTimeline, TransactionTotals, TransactionTotalsRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Transactions APIs client.
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    inner: Arc<PaystackClientInner>,
}

impl TransactionsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Initializes a transaction and returns the checkout URL to redirect the customer to.
    #[tracing::instrument(
        name = "Initialize Transaction",
        skip(self, request),
        fields(amount = request.amount, reference = ?request.reference)
    )]
    pub async fn initialize(
        &self,
        request: &InitializeTransactionRequest,
    ) -> Result<Response<InitializeTransactionResponse>, Error> {
        ensure_not_empty("email", &request.email)?;

        self.inner.post("/transaction/initialize", request).await
    }

    /// Confirms the status of a transaction.
    #[tracing::instrument(name = "Verify Transaction", skip(self))]
    pub async fn verify(&self, reference: &str) -> Result<Response<Transaction>, Error> {
        ensure_not_empty("reference", reference)?;

        self.inner
            .get(&format!("/transaction/verify/{}", encode(reference)))
            .await
    }

    /// Lists transactions carried out on your integration.
    #[tracing::instrument(name = "List Transactions", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListTransactionsRequest,
    ) -> Result<Response<Vec<Transaction>>, Error> {
        self.inner.get_with_query("/transaction", request).await
    }

    /// Gets the details of a transaction carried out on your integration.
    #[tracing::instrument(name = "Fetch Transaction", skip(self))]
    pub async fn fetch(&self, id: u64) -> Result<Response<Transaction>, Error> {
        self.inner.get(&format!("/transaction/{}", id)).await
    }

    /// Charges a reusable authorization.
    #[tracing::instrument(
        name = "Charge Authorization",
        skip(self, request),
        fields(amount = request.amount, reference = ?request.reference)
    )]
    pub async fn charge_authorization(
        &self,
        request: &ChargeAuthorizationRequest,
    ) -> Result<Response<Transaction>, Error> {
        ensure_not_empty("email", &request.email)?;
        ensure_not_empty("authorization_code", &request.authorization_code)?;

        self.inner
            .post("/transaction/charge_authorization", request)
            .await
    }

    /// Views the timeline of a transaction, by ID or reference.
    #[tracing::instrument(name = "View Transaction Timeline", skip(self))]
    pub async fn view_timeline(
        &self,
        id_or_reference: &str,
    ) -> Result<Response<TransactionTimeline>, Error> {
        ensure_not_empty("id_or_reference", id_or_reference)?;

        self.inner
            .get(&format!("/transaction/timeline/{}", encode(id_or_reference)))
            .await
    }

    /// Total amount received on your account.
    #[tracing::instrument(name = "Transaction Totals", skip(self, request))]
    pub async fn totals(
        &self,
        request: &TransactionTotalsRequest,
    ) -> Result<Response<TransactionTotals>, Error> {
        self.inner
            .get_with_query("/transaction/totals", request)
            .await
    }

    /// Exports a list of transactions carried out on your integration.
    #[tracing::instrument(name = "Export Transactions", skip(self, request))]
    pub async fn export(
        &self,
        request: &ExportTransactionsRequest,
    ) -> Result<Response<ExportFile>, Error> {
        self.inner
            .get_with_query("/transaction/export", request)
            .await
    }

    /// Retrieves part of a payment from a customer.
    #[tracing::instrument(
        name = "Partial Debit",
        skip(self, request),
        fields(amount = request.amount, currency = %request.currency)
    )]
    pub async fn partial_debit(
        &self,
        request: &PartialDebitRequest,
    ) -> Result<Response<Transaction>, Error> {
        ensure_not_empty("authorization_code", &request.authorization_code)?;
        ensure_not_empty("email", &request.email)?;

        self.inner
            .post("/transaction/partial_debit", request)
            .await
    }
}
