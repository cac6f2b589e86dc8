use crate::{
    apis::{
        miscellaneous::{Bank, Country, ListBanksRequest, ListStatesRequest, State},
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;

/// Paystack Miscellaneous APIs client.
///
/// Reference data used by other APIs: banks, countries and states.
#[derive(Clone, Debug)]
pub struct MiscellaneousApi {
    inner: Arc<PaystackClientInner>,
}

impl MiscellaneousApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "List Banks", skip(self, request))]
    pub async fn list_banks(&self, request: &ListBanksRequest) -> Result<Response<Vec<Bank>>, Error> {
        self.inner.get_with_query("/bank", request).await
    }

    /// Lists the countries Paystack currently supports.
    #[tracing::instrument(name = "List Countries", skip(self))]
    pub async fn list_countries(&self) -> Result<Response<Vec<Country>>, Error> {
        self.inner.get("/country").await
    }

    /// Lists the states of a country, for address verification.
    #[tracing::instrument(name = "List States", skip(self))]
    pub async fn list_states(&self, country: &str) -> Result<Response<Vec<State>>, Error> {
        ensure_not_empty("country", country)?;

        self.inner
            .get_with_query(
                "/address_verification/states",
                &ListStatesRequest {
                    country: country.to_string(),
                },
            )
            .await
    }
}
