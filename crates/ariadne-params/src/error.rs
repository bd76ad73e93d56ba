//! Query decoding errors.

use thiserror::Error;

/// Error returned when a query string cannot be decoded into [`Parameters`](crate::Parameters).
#[derive(Debug, Error)]
#[error("failed to decode query string: {0}")]
pub struct QueryParseError(#[from] serde_urlencoded::de::Error);
