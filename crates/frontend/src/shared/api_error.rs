use thiserror::Error;

/// Failure of a call to the client API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 404. For list endpoints this means "nothing saved yet".
    #[error("Nothing found")]
    NotFound,

    #[error("Your session has expired, please sign in again")]
    Unauthorized,

    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Unexpected server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a response status; `None` for success codes.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(ApiError::Unauthorized),
            404 => Some(ApiError::NotFound),
            _ => Some(ApiError::Http { status }),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
