pub mod client;
pub mod operation;
pub mod options;
pub mod transport;

pub use client::{ClientConfig, SearchClient};
pub use operation::Operation;
pub use options::QueryOptions;
pub use transport::{HttpTransport, RefererSource, StaticReferer, Transport};

use serde::Deserialize;

/// Status code the remote API reports inside the envelope on success
pub const SUCCESS_STATUS: i64 = 200;

/// Response envelope returned by every AJAX Search endpoint
///
/// The HTTP status line is always 200; failures are reported through
/// `responseStatus` and `responseDetails` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "responseStatus")]
    pub response_status: i64,

    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<String>,

    /// Result payload, shape varies per operation
    #[serde(rename = "responseData", default)]
    pub response_data: Option<serde_json::Value>,
}

impl ApiResponse {
    /// Unwrap the payload, or turn a non-success status into an error
    pub fn into_result(self) -> Result<serde_json::Value, SearchError> {
        if self.response_status != SUCCESS_STATUS {
            return Err(SearchError::RemoteApi {
                status: self.response_status,
                details: self.response_details.unwrap_or_default(),
            });
        }
        Ok(self.response_data.unwrap_or(serde_json::Value::Null))
    }
}

/// Search-related errors
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("\"{0}\" is not a valid Google API function.")]
    InvalidOperation(String),

    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Malformed response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Google API Error ({status}): {details}")]
    RemoteApi { status: i64, details: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}
