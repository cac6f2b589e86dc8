use crate::{
    apis::{
        terminals::{
            ListTerminalsRequest, SendTerminalEventRequest, Terminal, TerminalDeviceRequest,
            TerminalEvent, TerminalEventStatus, TerminalPresence, UpdateTerminalRequest,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Terminal APIs client.
#[derive(Clone, Debug)]
pub struct TerminalsApi {
    inner: Arc<PaystackClientInner>,
}

impl TerminalsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Sends an event from your application to a Paystack Terminal.
    #[tracing::instrument(
        name = "Send Terminal Event",
        skip(self, request),
        fields(event_type = ?request.event_type, action = ?request.action)
    )]
    pub async fn send_event(
        &self,
        terminal_id: &str,
        request: &SendTerminalEventRequest,
    ) -> Result<Response<TerminalEvent>, Error> {
        ensure_not_empty("terminal_id", terminal_id)?;
        ensure_not_empty("data.id", &request.data.id)?;

        self.inner
            .post(&format!("/terminal/{}/event", encode(terminal_id)), request)
            .await
    }

    /// Checks whether an event was delivered to the terminal.
    #[tracing::instrument(name = "Fetch Terminal Event Status", skip(self))]
    pub async fn fetch_event_status(
        &self,
        terminal_id: &str,
        event_id: &str,
    ) -> Result<Response<TerminalEventStatus>, Error> {
        ensure_not_empty("terminal_id", terminal_id)?;
        ensure_not_empty("event_id", event_id)?;

        self.inner
            .get(&format!(
                "/terminal/{}/event/{}",
                encode(terminal_id),
                encode(event_id)
            ))
            .await
    }

    /// Checks whether a terminal is online and available to receive events.
    #[tracing::instrument(name = "Fetch Terminal Status", skip(self))]
    pub async fn fetch_terminal_status(
        &self,
        terminal_id: &str,
    ) -> Result<Response<TerminalPresence>, Error> {
        ensure_not_empty("terminal_id", terminal_id)?;

        self.inner
            .get(&format!("/terminal/{}/presence", encode(terminal_id)))
            .await
    }

    /// Lists the terminals available on your integration. Pagination is cursor based.
    #[tracing::instrument(name = "List Terminals", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListTerminalsRequest,
    ) -> Result<Response<Vec<Terminal>>, Error> {
        self.inner.get_with_query("/terminal", request).await
    }

    #[tracing::instrument(name = "Fetch Terminal", skip(self))]
    pub async fn fetch(&self, terminal_id: &str) -> Result<Response<Terminal>, Error> {
        ensure_not_empty("terminal_id", terminal_id)?;

        self.inner
            .get(&format!("/terminal/{}", encode(terminal_id)))
            .await
    }

    #[tracing::instrument(name = "Update Terminal", skip(self, request))]
    pub async fn update(
        &self,
        terminal_id: &str,
        request: &UpdateTerminalRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("terminal_id", terminal_id)?;

        self.inner
            .put(&format!("/terminal/{}", encode(terminal_id)), request)
            .await
    }

    /// Activates a debug device by linking it to your integration.
    #[tracing::instrument(name = "Commission Terminal", skip(self))]
    pub async fn commission(
        &self,
        serial_number: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("serial_number", serial_number)?;

        self.inner
            .post(
                "/terminal/commission_device",
                &TerminalDeviceRequest {
                    serial_number: serial_number.to_string(),
                },
            )
            .await
    }

    /// Unlinks a debug device from your integration.
    #[tracing::instrument(name = "Decommission Terminal", skip(self))]
    pub async fn decommission(
        &self,
        serial_number: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("serial_number", serial_number)?;

        self.inner
            .post(
                "/terminal/decommission_device",
                &TerminalDeviceRequest {
                    serial_number: serial_number.to_string(),
                },
            )
            .await
    }
}
