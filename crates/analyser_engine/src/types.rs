use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// Fallback when the service answered but did not report success.
pub const FAILED_TO_ANALYZE: &str = "Failed to analyze the URL";
/// Fallback when no response was received at all.
pub const GENERIC_FAILURE: &str = "An error occurred while analyzing the URL";

/// Body of `POST {base}/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Body returned by the analysis service, for both outcomes.
///
/// Every field is optional on the wire; FastAPI error responses carry `detail`
/// instead of `error`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl AnalyzeResponse {
    /// The message the server chose to show, if any.
    pub fn server_message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return Some(error.to_string());
        }
        match self.detail.as_ref()? {
            serde_json::Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            // Validation failures: [{"loc": [...], "msg": "...", ...}, ...]
            serde_json::Value::Array(items) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(|msg| msg.as_str())
                .filter(|msg| !msg.is_empty())
                .map(ToOwned::to_owned),
            _ => None,
        }
    }
}

/// Body returned by `GET {base}/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The request left the client.
    RequestSent { request_id: RequestId },
    RequestCompleted {
        request_id: RequestId,
        result: Result<String, RequestError>,
    },
}

/// A failed request. `message` is what the user sees; `detail` is for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
    pub detail: Option<String>,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 2xx with `success: false`.
    ServerReported,
    /// Non-2xx status.
    HttpStatus(u16),
    /// 2xx whose body could not be understood.
    InvalidResponse,
    /// No response received.
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::ServerReported => write!(f, "server reported failure"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
