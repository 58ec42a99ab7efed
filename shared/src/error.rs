use serde::Deserialize;

/// Shown whenever the server gives us nothing better to display.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {}", .message.as_deref().unwrap_or("<no error field>"))]
    Status { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Error payload the prediction API attaches to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    /// Builds a `Status` error from a non-2xx response body. Bodies that are
    /// not JSON, or carry no string `error` field, yield no message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        ApiError::Status { status, message }
    }

    /// The single line a module displays for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
