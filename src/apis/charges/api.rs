use crate::{
    apis::{
        charges::{
            Charge, CreateChargeRequest, SubmitAddressRequest, SubmitBirthdayRequest,
            SubmitOtpRequest, SubmitPhoneRequest, SubmitPinRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Charge APIs client.
///
/// A charge may need several steps. Each call returns the [`ChargeStatus`](crate::apis::charges::ChargeStatus)
/// telling which `submit_*` call comes next.
#[derive(Clone, Debug)]
pub struct ChargesApi {
    inner: Arc<PaystackClientInner>,
}

impl ChargesApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(
        name = "Create Charge",
        skip(self, request),
        fields(amount = request.amount, reference = ?request.reference)
    )]
    pub async fn create(&self, request: &CreateChargeRequest) -> Result<Response<Charge>, Error> {
        ensure_not_empty("email", &request.email)?;

        self.inner.post("/charge", request).await
    }

    #[tracing::instrument(name = "Submit PIN", skip(self, pin))]
    pub async fn submit_pin(&self, reference: &str, pin: &str) -> Result<Response<Charge>, Error> {
        ensure_not_empty("reference", reference)?;
        ensure_not_empty("pin", pin)?;

        self.inner
            .post(
                "/charge/submit_pin",
                &SubmitPinRequest {
                    pin: pin.to_string(),
                    reference: reference.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(name = "Submit OTP", skip(self, otp))]
    pub async fn submit_otp(&self, reference: &str, otp: &str) -> Result<Response<Charge>, Error> {
        ensure_not_empty("reference", reference)?;
        ensure_not_empty("otp", otp)?;

        self.inner
            .post(
                "/charge/submit_otp",
                &SubmitOtpRequest {
                    otp: otp.to_string(),
                    reference: reference.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(name = "Submit Phone", skip(self, phone))]
    pub async fn submit_phone(
        &self,
        reference: &str,
        phone: &str,
    ) -> Result<Response<Charge>, Error> {
        ensure_not_empty("reference", reference)?;
        ensure_not_empty("phone", phone)?;

        self.inner
            .post(
                "/charge/submit_phone",
                &SubmitPhoneRequest {
                    phone: phone.to_string(),
                    reference: reference.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(name = "Submit Birthday", skip(self, birthday))]
    pub async fn submit_birthday(
        &self,
        reference: &str,
        birthday: &str,
    ) -> Result<Response<Charge>, Error> {
        ensure_not_empty("reference", reference)?;
        ensure_not_empty("birthday", birthday)?;

        self.inner
            .post(
                "/charge/submit_birthday",
                &SubmitBirthdayRequest {
                    birthday: birthday.to_string(),
                    reference: reference.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(
        name = "Submit Address",
        skip(self, request),
        fields(reference = %request.reference)
    )]
    pub async fn submit_address(
        &self,
        request: &SubmitAddressRequest,
    ) -> Result<Response<Charge>, Error> {
        ensure_not_empty("reference", &request.reference)?;
        ensure_not_empty("address", &request.address)?;

        self.inner.post("/charge/submit_address", request).await
    }

    /// Checks a charge that timed out or was left `pending`.
    #[tracing::instrument(name = "Check Pending Charge", skip(self))]
    pub async fn check_pending(&self, reference: &str) -> Result<Response<Charge>, Error> {
        ensure_not_empty("reference", reference)?;

        self.inner
            .get(&format!("/charge/{}", encode(reference)))
            .await
    }
}
