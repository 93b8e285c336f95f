//! Protocol error types.

use thiserror::Error;

/// Errors that can occur while decoding channel messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base64 in codec header: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("audio data message too short: {len} bytes (need at least 9)")]
    TruncatedAudioData { len: usize },

    #[error("codec header too short: {len} bytes (need 4)")]
    TruncatedCodecHeader { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::TruncatedAudioData { len: 3 };
        assert!(err.to_string().contains("3 bytes"));

        let err = ProtocolError::TruncatedCodecHeader { len: 2 };
        assert!(err.to_string().contains("2 bytes"));

        let err = ProtocolError::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(err.to_string().contains("JSON"));
    }
}
