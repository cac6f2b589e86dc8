use crate::{
    apis::{
        virtual_terminals::{
            AssignDestinationRequest, AssignedDestination, CreateVirtualTerminalRequest,
            Destination, ListVirtualTerminalsRequest, UnassignDestinationRequest,
            UpdateVirtualTerminalRequest, VirtualTerminal, VirtualTerminalSplitCodeRequest,
        },
        PaystackClientInner,
    },
    common::{ensure_not_empty, ensure_not_empty_list},
    Error, Response,
};
use serde_json::json;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Virtual Terminal APIs client.
///
/// A virtual terminal lets a business accept in-person payments without a
/// physical device, with notifications sent to its WhatsApp destinations.
#[derive(Clone, Debug)]
pub struct VirtualTerminalsApi {
    inner: Arc<PaystackClientInner>,
}

impl VirtualTerminalsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(
        name = "Create Virtual Terminal",
        skip(self, request),
        fields(name = %request.name)
    )]
    pub async fn create(
        &self,
        request: &CreateVirtualTerminalRequest,
    ) -> Result<Response<VirtualTerminal>, Error> {
        ensure_not_empty("name", &request.name)?;
        ensure_not_empty_list("destinations", &request.destinations)?;

        self.inner.post("/virtual_terminal", request).await
    }

    #[tracing::instrument(name = "List Virtual Terminals", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListVirtualTerminalsRequest,
    ) -> Result<Response<Vec<VirtualTerminal>>, Error> {
        self.inner.get_with_query("/virtual_terminal", request).await
    }

    #[tracing::instrument(name = "Fetch Virtual Terminal", skip(self))]
    pub async fn fetch(&self, code: &str) -> Result<Response<VirtualTerminal>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .get(&format!("/virtual_terminal/{}", encode(code)))
            .await
    }

    #[tracing::instrument(name = "Update Virtual Terminal", skip(self))]
    pub async fn update(&self, code: &str, name: &str) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;
        ensure_not_empty("name", name)?;

        self.inner
            .put(
                &format!("/virtual_terminal/{}", encode(code)),
                &UpdateVirtualTerminalRequest {
                    name: name.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(name = "Deactivate Virtual Terminal", skip(self))]
    pub async fn deactivate(&self, code: &str) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .put(
                &format!("/virtual_terminal/{}/deactivate", encode(code)),
                &json!({}),
            )
            .await
    }

    /// Adds WhatsApp destinations to a virtual terminal.
    #[tracing::instrument(name = "Assign Virtual Terminal Destination", skip(self, destinations))]
    pub async fn assign_destination(
        &self,
        code: &str,
        destinations: Vec<Destination>,
    ) -> Result<Response<Vec<AssignedDestination>>, Error> {
        ensure_not_empty("code", code)?;
        ensure_not_empty_list("destinations", &destinations)?;

        self.inner
            .post(
                &format!("/virtual_terminal/{}/destination/assign", encode(code)),
                &AssignDestinationRequest { destinations },
            )
            .await
    }

    #[tracing::instrument(name = "Unassign Virtual Terminal Destination", skip(self, targets))]
    pub async fn unassign_destination(
        &self,
        code: &str,
        targets: Vec<String>,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;
        ensure_not_empty_list("targets", &targets)?;

        self.inner
            .post(
                &format!("/virtual_terminal/{}/destination/unassign", encode(code)),
                &UnassignDestinationRequest { targets },
            )
            .await
    }

    /// Attaches a split code so payments on the terminal are shared.
    #[tracing::instrument(name = "Add Virtual Terminal Split Code", skip(self))]
    pub async fn add_split_code(
        &self,
        code: &str,
        split_code: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;
        ensure_not_empty("split_code", split_code)?;

        self.inner
            .put(
                &format!("/virtual_terminal/{}/split_code", encode(code)),
                &VirtualTerminalSplitCodeRequest {
                    split_code: split_code.to_string(),
                },
            )
            .await
    }

    #[tracing::instrument(name = "Remove Virtual Terminal Split Code", skip(self))]
    pub async fn remove_split_code(
        &self,
        code: &str,
        split_code: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;
        ensure_not_empty("split_code", split_code)?;

        self.inner
            .delete_with_body(
                &format!("/virtual_terminal/{}/split_code", encode(code)),
                &VirtualTerminalSplitCodeRequest {
                    split_code: split_code.to_string(),
                },
            )
            .await
    }
}
