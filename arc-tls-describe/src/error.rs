#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Error Types for TLS Session Description
//!
//! Unknown identifiers are not errors: they resolve to placeholder
//! descriptions. The variants here cover malformed registry data, sessions
//! whose handshake has not produced parameters yet, and structured output
//! that could not be serialized.

use std::fmt;

use thiserror::Error;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Operation failed but the caller can continue
    Error,
    /// Internal data is inconsistent
    Critical,
}

/// Error codes, grouped the same way as the other `arc-*` TLS errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Handshake errors (2000-2099)
    /// The connection has not negotiated a version or cipher suite yet.
    HandshakeIncomplete = 2007,

    // Crypto provider / encoding errors (5000-5099)
    /// Structured output could not be serialized.
    SerializationFailed = 5007,

    // Configuration errors (7000-7099)
    /// A cipher suite slug does not have the `TLS_<kex>_WITH_<cipher>` shape.
    InvalidCipherSlug = 7004,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::HandshakeIncomplete => write!(f, "HANDSHAKE_INCOMPLETE"),
            ErrorCode::SerializationFailed => write!(f, "SERIALIZATION_FAILED"),
            ErrorCode::InvalidCipherSlug => write!(f, "INVALID_CIPHER_SLUG"),
        }
    }
}

/// Errors produced while describing a TLS session
#[derive(Error, Debug)]
pub enum DescribeError {
    /// Cipher suite slug cannot be split into key exchange and cipher
    #[error("Malformed cipher suite slug {slug:?}: {reason}")]
    MalformedCipherSlug {
        /// The offending slug.
        slug: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The handshake has not negotiated the named parameter yet
    #[error("TLS handshake incomplete: no negotiated {missing}")]
    HandshakeIncomplete {
        /// Which parameter is missing ("protocol version" or "cipher suite").
        missing: &'static str,
    },

    /// Structured output serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message.
        message: String,
        /// Underlying source error.
        #[source]
        source: serde_json::Error,
    },
}

impl DescribeError {
    /// Get error code
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            DescribeError::MalformedCipherSlug { .. } => ErrorCode::InvalidCipherSlug,
            DescribeError::HandshakeIncomplete { .. } => ErrorCode::HandshakeIncomplete,
            DescribeError::Serialization { .. } => ErrorCode::SerializationFailed,
        }
    }

    /// Get error severity
    ///
    /// A malformed slug can only come from the static tables, so it is
    /// reported as critical.
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DescribeError::MalformedCipherSlug { .. } => ErrorSeverity::Critical,
            DescribeError::HandshakeIncomplete { .. } | DescribeError::Serialization { .. } => {
                ErrorSeverity::Error
            }
        }
    }
}

impl From<serde_json::Error> for DescribeError {
    fn from(err: serde_json::Error) -> Self {
        DescribeError::Serialization { message: err.to_string(), source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::InvalidCipherSlug.to_string(), "INVALID_CIPHER_SLUG");
        assert_eq!(ErrorCode::HandshakeIncomplete.to_string(), "HANDSHAKE_INCOMPLETE");
        assert_eq!(ErrorCode::InvalidCipherSlug as u16, 7004);
    }

    #[test]
    fn test_malformed_slug_is_critical() {
        let err = DescribeError::MalformedCipherSlug {
            slug: "UNKNOWN_1301".to_string(),
            reason: "missing TLS_ prefix",
        };
        assert_eq!(err.code(), ErrorCode::InvalidCipherSlug);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("UNKNOWN_1301"));
    }

    #[test]
    fn test_handshake_incomplete_message() {
        let err = DescribeError::HandshakeIncomplete { missing: "cipher suite" };
        assert_eq!(err.to_string(), "TLS handshake incomplete: no negotiated cipher suite");
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }
}
