use crate::{
    apis::{
        transaction_splits::{
            CreateSplitRequest, ListSplitsRequest, RemoveSplitSubaccountRequest, Split,
            SplitShare, UpdateSplitRequest,
        },
        PaystackClientInner,
    },
    common::{ensure_not_empty, ensure_not_empty_list},
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Transaction Splits APIs client.
///
/// Splits let you share the settlement of a payment between your main account
/// and one or more subaccounts.
#[derive(Clone, Debug)]
pub struct TransactionSplitsApi {
    inner: Arc<PaystackClientInner>,
}

impl TransactionSplitsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a split payment on your integration.
    #[tracing::instrument(
        name = "Create Split",
        skip(self, request),
        fields(name = %request.name, currency = %request.currency)
    )]
    pub async fn create(&self, request: &CreateSplitRequest) -> Result<Response<Split>, Error> {
        ensure_not_empty("name", &request.name)?;
        ensure_not_empty_list("subaccounts", &request.subaccounts)?;

        self.inner.post("/split", request).await
    }

    /// Lists the transaction splits available on your integration.
    #[tracing::instrument(name = "List Splits", skip(self, request))]
    pub async fn list(&self, request: &ListSplitsRequest) -> Result<Response<Vec<Split>>, Error> {
        self.inner.get_with_query("/split", request).await
    }

    /// Gets the details of a split on your integration.
    #[tracing::instrument(name = "Fetch Split", skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<Response<Split>, Error> {
        ensure_not_empty("id", id)?;

        self.inner.get(&format!("/split/{}", encode(id))).await
    }

    /// Updates a transaction split's details.
    #[tracing::instrument(name = "Update Split", skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateSplitRequest,
    ) -> Result<Response<Split>, Error> {
        ensure_not_empty("id", id)?;

        self.inner
            .put(&format!("/split/{}", encode(id)), request)
            .await
    }

    /// Adds a subaccount to a split, or updates the share of an existing one.
    #[tracing::instrument(
        name = "Add Split Subaccount",
        skip(self, share),
        fields(subaccount = %share.subaccount, share = share.share)
    )]
    pub async fn add_subaccount(
        &self,
        id: &str,
        share: &SplitShare,
    ) -> Result<Response<Split>, Error> {
        ensure_not_empty("id", id)?;
        ensure_not_empty("subaccount", &share.subaccount)?;

        self.inner
            .post(&format!("/split/{}/subaccount/add", encode(id)), share)
            .await
    }

    /// Removes a subaccount from a split.
    #[tracing::instrument(name = "Remove Split Subaccount", skip(self))]
    pub async fn remove_subaccount(
        &self,
        id: &str,
        subaccount: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("id", id)?;
        ensure_not_empty("subaccount", subaccount)?;

        self.inner
            .post(
                &format!("/split/{}/subaccount/remove", encode(id)),
                &RemoveSplitSubaccountRequest {
                    subaccount: subaccount.to_string(),
                },
            )
            .await
    }
}
