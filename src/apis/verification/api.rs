use crate::{
    apis::{
        verification::{
            AccountValidation, CardBin, ResolveAccountRequest, ResolvedAccount,
            ValidateAccountRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Verification APIs client.
#[derive(Clone, Debug)]
pub struct VerificationApi {
    inner: Arc<PaystackClientInner>,
}

impl VerificationApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Looks up the name on a bank account.
    #[tracing::instrument(name = "Resolve Account", skip(self))]
    pub async fn resolve_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<Response<ResolvedAccount>, Error> {
        ensure_not_empty("account_number", account_number)?;
        ensure_not_empty("bank_code", bank_code)?;

        self.inner
            .get_with_query(
                "/bank/resolve",
                &ResolveAccountRequest {
                    account_number: account_number.to_string(),
                    bank_code: bank_code.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(
        name = "Validate Account",
        skip(self, request),
        fields(country_code = %request.country_code, account_type = ?request.account_type)
    )]
    pub async fn validate_account(
        &self,
        request: &ValidateAccountRequest,
    ) -> Result<Response<AccountValidation>, Error> {
        ensure_not_empty("account_name", &request.account_name)?;
        ensure_not_empty("account_number", &request.account_number)?;
        ensure_not_empty("bank_code", &request.bank_code)?;
        ensure_not_empty("country_code", &request.country_code)?;

        self.inner.post("/bank/validate", request).await
    }

    /// Gets details about a card from its first six digits.
    #[tracing::instrument(name = "Resolve Card BIN", skip(self))]
    pub async fn resolve_card_bin(&self, bin: &str) -> Result<Response<CardBin>, Error> {
        ensure_not_empty("bin", bin)?;

        self.inner
            .get(&format!("/decision/bin/{}", encode(bin)))
            .await
    }
}
