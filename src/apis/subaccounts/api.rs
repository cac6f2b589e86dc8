use crate::{
    apis::{
        subaccounts::{
            CreateSubaccountRequest, ListSubaccountsRequest, Subaccount, UpdateSubaccountRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Subaccounts APIs client.
#[derive(Clone, Debug)]
pub struct SubaccountsApi {
    inner: Arc<PaystackClientInner>,
}

impl SubaccountsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(
        name = "Create Subaccount",
        skip(self, request),
        fields(business_name = %request.business_name)
    )]
    pub async fn create(
        &self,
        request: &CreateSubaccountRequest,
    ) -> Result<Response<Subaccount>, Error> {
        ensure_not_empty("business_name", &request.business_name)?;
        ensure_not_empty("settlement_bank", &request.settlement_bank)?;
        ensure_not_empty("account_number", &request.account_number)?;

        self.inner.post("/subaccount", request).await
    }

    #[tracing::instrument(name = "List Subaccounts", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListSubaccountsRequest,
    ) -> Result<Response<Vec<Subaccount>>, Error> {
        self.inner.get_with_query("/subaccount", request).await
    }

    #[tracing::instrument(name = "Fetch Subaccount", skip(self))]
    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Subaccount>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get(&format!("/subaccount/{}", encode(id_or_code)))
            .await
    }

    #[tracing::instrument(name = "Update Subaccount", skip(self, request))]
    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdateSubaccountRequest,
    ) -> Result<Response<Subaccount>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .put(&format!("/subaccount/{}", encode(id_or_code)), request)
            .await
    }
}
