//! Error types for the ad submission core.
//!
//! - [`ApiError`] - remote ad management API errors
//! - [`CodecError`] - image re-encoding errors
//!
//! Remote errors are caught at the call site and turned into one
//! user-visible status string; nothing here crosses the UI boundary as a
//! structured value.

use thiserror::Error;

// =============================================================================
// Remote API Errors
// =============================================================================

/// Errors from the remote ad management API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status and an `error` body.
    ///
    /// Displays as the bare server message so it can be surfaced to the
    /// operator verbatim.
    #[error("{0}")]
    Remote(String),

    /// The request never produced a usable response (network, DNS, timeout,
    /// unparsable body).
    #[error("request failed: {0}")]
    Transport(String),
}

// =============================================================================
// Codec Errors
// =============================================================================

/// Errors from the image codec collaborator.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// Re-encoding to the target format failed.
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for remote API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_displays_server_message_verbatim() {
        let err = ApiError::Remote("bad date".into());
        assert_eq!(err.to_string(), "bad date");
    }

    #[test]
    fn transport_error_names_the_cause() {
        let err = ApiError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
