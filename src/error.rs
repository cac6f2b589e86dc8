//! Standard errors used by all functions in the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error collecting all possible failures of the Paystack client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Paystack API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// A required field was missing or empty. Raised before any request is sent.
    #[error("validation error: `{field}` {message}")]
    ValidationError {
        field: &'static str,
        message: String,
    },
    /// The response body could not be decoded into the expected envelope.
    #[error("Error decoding Paystack response: {0}")]
    DecodeError(#[from] serde_json::Error),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Coarse category of this error.
    ///
    /// Client-side validation failures are reported as [`ErrorKind::Validation`],
    /// transport and decoding failures as [`ErrorKind::Other`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ApiError(api_error) => api_error.kind(),
            Error::ValidationError { .. } => ErrorKind::Validation,
            _ => ErrorKind::Other,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_authentication_error(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }

    pub fn is_not_found_error(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_server_error(&self) -> bool {
        self.kind() == ErrorKind::Server
    }

    /// Returns the underlying [`ApiError`], if this error came from the Paystack API.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::ApiError(api_error) => Some(api_error),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Coarse classification of a failed call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed parameters (HTTP 400 and 422, or a client-side check).
    Validation,
    /// Missing or invalid secret key.
    Authentication,
    /// The requested resource does not exist (HTTP 404).
    NotFound,
    /// Something went wrong on Paystack's side (HTTP 5xx).
    Server,
    /// Anything else.
    Other,
}

/// The `meta` block of a Paystack error payload.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMeta {
    /// Suggested remediation for the error.
    pub next_step: Option<String>,
}

/// Body of an error response from Paystack APIs.
#[derive(Deserialize, Debug)]
struct ErrorPayload {
    #[serde(default)]
    message: String,
    code: Option<String>,
    r#type: Option<String>,
    meta: Option<ErrorMeta>,
}

/// Paystack HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status_code: u16,
    /// Human readable description of the error.
    pub message: String,
    /// Machine readable error code, e.g. `invalid_Key`.
    pub code: Option<String>,
    /// Error family, e.g. `validation_error`.
    pub r#type: Option<String>,
    /// Optional remediation hints.
    pub meta: Option<ErrorMeta>,
}

impl ApiError {
    /// Builds an error from an HTTP status and the raw response body.
    ///
    /// Absent or non-conforming bodies fall back to a generic message for the status code.
    pub fn from_response_body(status_code: u16, body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<ErrorPayload>(body).ok();

        match payload {
            Some(payload) => ApiError {
                status_code,
                message: if payload.message.trim().is_empty() {
                    default_message(status_code).to_string()
                } else {
                    payload.message
                },
                code: payload.code,
                r#type: payload.r#type,
                meta: payload.meta,
            },
            None => ApiError {
                status_code,
                message: default_message(status_code).to_string(),
                code: None,
                r#type: None,
                meta: None,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        if self.status_code == 401 || self.mentions_invalid_key() {
            return ErrorKind::Authentication;
        }

        match self.status_code {
            400 | 422 => ErrorKind::Validation,
            404 => ErrorKind::NotFound,
            500.. => ErrorKind::Server,
            _ => ErrorKind::Other,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_authentication_error(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }

    pub fn is_not_found_error(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_server_error(&self) -> bool {
        self.kind() == ErrorKind::Server
    }

    /// Returns the suggested next step sent by Paystack, or an empty string if there is none.
    pub fn next_step(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|meta| meta.next_step.as_deref())
            .unwrap_or_default()
    }

    fn mentions_invalid_key(&self) -> bool {
        [Some(self.message.as_str()), self.code.as_deref(), self.r#type.as_deref()]
            .into_iter()
            .flatten()
            .map(str::to_ascii_lowercase)
            .any(|s| s.contains("invalid_key") || s.contains("invalid key"))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "paystack api error (status {}): {}",
            self.status_code, self.message
        )?;

        if let Some(ref code) = self.code {
            write!(f, " [code: {}]", code)?;
        }

        if let Some(ref r#type) = self.r#type {
            write!(f, " [type: {}]", r#type)?;
        }

        let next_step = self.next_step();
        if !next_step.is_empty() {
            write!(f, " [next step: {}]", next_step)?;
        }

        Ok(())
    }
}

fn default_message(status_code: u16) -> &'static str {
    match status_code {
        400 => "Bad request: a validation or client side error occurred",
        401 => "Unauthorized: the request was not authorized, check your secret key",
        403 => "Forbidden: the secret key is not allowed to perform this request",
        404 => "Not found: the requested resource does not exist",
        422 => "Unprocessable entity: the request was rejected by validation",
        429 => "Too many requests: the rate limit was exceeded",
        500..=599 => "Server error: the request could not be fulfilled by Paystack",
        _ => "Unexpected response from Paystack",
    }
}
