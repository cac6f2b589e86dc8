use crate::{
    apis::{
        transfer_control::{
            Balance, BalanceLedgerRequest, FinalizeDisableOtpRequest, LedgerEntry,
            ResendOtpReason, ResendOtpRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use serde_json::json;
use std::sync::Arc;

/// Paystack Transfers Control APIs client.
///
/// Balance lookups and management of the OTP that guards transfers.
#[derive(Clone, Debug)]
pub struct TransferControlApi {
    inner: Arc<PaystackClientInner>,
}

impl TransferControlApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Available balance, one entry per currency.
    #[tracing::instrument(name = "Check Balance", skip(self))]
    pub async fn check_balance(&self) -> Result<Response<Vec<Balance>>, Error> {
        self.inner.get("/balance").await
    }

    #[tracing::instrument(name = "Balance Ledger", skip(self, request))]
    pub async fn balance_ledger(
        &self,
        request: &BalanceLedgerRequest,
    ) -> Result<Response<Vec<LedgerEntry>>, Error> {
        self.inner.get_with_query("/balance/ledger", request).await
    }

    #[tracing::instrument(name = "Resend Transfer OTP", skip(self))]
    pub async fn resend_otp(
        &self,
        transfer_code: &str,
        reason: ResendOtpReason,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("transfer_code", transfer_code)?;

        self.inner
            .post(
                "/transfer/resend_otp",
                &ResendOtpRequest {
                    transfer_code: transfer_code.to_string(),
                    reason,
                },
            )
            .await
    }

    /// Starts disabling OTP for transfers. An OTP is sent to the business phone
    /// and must be confirmed with [`finalize_disable_otp`](Self::finalize_disable_otp).
    #[tracing::instrument(name = "Disable Transfer OTP", skip(self))]
    pub async fn disable_otp(&self) -> Result<Response<serde_json::Value>, Error> {
        self.inner.post("/transfer/disable_otp", &json!({})).await
    }

    #[tracing::instrument(name = "Finalize Disable Transfer OTP", skip(self, otp))]
    pub async fn finalize_disable_otp(
        &self,
        otp: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("otp", otp)?;

        self.inner
            .post(
                "/transfer/disable_otp_finalize",
                &FinalizeDisableOtpRequest {
                    otp: otp.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(name = "Enable Transfer OTP", skip(self))]
    pub async fn enable_otp(&self) -> Result<Response<serde_json::Value>, Error> {
        self.inner.post("/transfer/enable_otp", &json!({})).await
    }
}
