use thiserror::Error;

/// Normalized error surfaced by [`crate::MicrocopyClient::generate`].
///
/// Every internal failure collapses into one of these variants; raw
/// transport or parse errors never reach the caller in any other shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure before any HTTP response was obtained.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP response with a non-success status. The body is not consulted.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body missing, not valid JSON, or without a string-array `alternatives`.
    #[error("Invalid response format from server")]
    InvalidFormat,
}

impl ApiError {
    /// The HTTP status code, when the failure came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Every clipboard mechanism failed. Underlying causes are logged, not carried.
#[derive(Debug, Error)]
#[error("Failed to copy text to clipboard")]
pub struct ClipboardError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accessor_only_on_status_variant() {
        assert_eq!(ApiError::Status(503).status(), Some(503));
        assert_eq!(ApiError::InvalidFormat.status(), None);
    }

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error! status: 500");
        assert_eq!(
            ApiError::InvalidFormat.to_string(),
            "Invalid response format from server"
        );
        assert_eq!(ClipboardError.to_string(), "Failed to copy text to clipboard");
    }
}
