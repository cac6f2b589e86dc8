//! The response envelope shared by every Paystack endpoint.

use crate::Error;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Uniform wrapper returned by every Paystack API call.
///
/// `data` is only meaningful when `status` is `true`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Response<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Self {
            status: false,
            message: String::new(),
            data: None,
            meta: None,
        }
    }
}

impl<T> Response<T> {
    /// Consumes the envelope and returns its payload.
    ///
    /// Fails if Paystack reported an unsuccessful status or sent no data.
    pub fn into_data(self) -> Result<T, Error> {
        if !self.status {
            return Err(Error::Other(anyhow!(
                "Paystack reported an unsuccessful call: {}",
                self.message
            )));
        }

        self.data
            .ok_or_else(|| Error::Other(anyhow!("Paystack response carried no data")))
    }
}

/// Pagination details attached to list responses.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
}

/// Decodes a raw successful response body. Empty bodies produce an empty envelope.
pub(crate) fn decode_envelope<T>(body: &[u8]) -> Result<Response<T>, Error>
where
    T: serde::de::DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Response::default());
    }

    Ok(serde_json::from_slice(body)?)
}
