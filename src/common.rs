use crate::Error;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// Rejects empty required values before a request is sent.
pub(crate) fn ensure_not_empty(field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError {
            field,
            message: "must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Rejects empty required lists before a request is sent.
pub(crate) fn ensure_not_empty_list<T>(field: &'static str, values: &[T]) -> Result<(), Error> {
    if values.is_empty() {
        return Err(Error::ValidationError {
            field,
            message: "must contain at least one item".to_string(),
        });
    }

    Ok(())
}

pub(crate) fn serialize_optional_timestamp<S>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(timestamp) => {
            serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        None => serializer.serialize_none(),
    }
}
