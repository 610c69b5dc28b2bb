use std::fmt;

/// A request to the API failed.
///
/// Callers treat every variant the same way; the split only exists so the
/// log line says what went wrong.
#[derive(Debug)]
pub enum ApiClientError {
    Transport(String),
    Status { status: u16, url: String },
    Decode(String),
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiClientError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiClientError::Status { status, url } => {
                write!(f, "Request to {} failed with status {}", url, status)
            }
            ApiClientError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiClientError {}

impl From<reqwest::Error> for ApiClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return ApiClientError::Decode(error.to_string());
        }
        match error.status() {
            Some(status) => ApiClientError::Status {
                status: status.as_u16(),
                url: error
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_default(),
            },
            None => ApiClientError::Transport(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Decode(error.to_string())
    }
}
