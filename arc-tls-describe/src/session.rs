#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Negotiated session parameters, taken from a rustls connection or given
//! directly as IANA identifiers.

use rustls::CommonState;

use crate::description::Description;
use crate::encoder::{self, EncoderConfig, TlsDescription};
use crate::error::DescribeError;
use crate::resolver;

/// The (protocol version, cipher suite) pair a handshake settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegotiatedSession {
    /// Protocol version identifier
    pub version: u16,
    /// Cipher suite identifier
    pub cipher_suite: u16,
}

impl NegotiatedSession {
    /// Session from raw identifiers.
    #[must_use]
    pub const fn new(version: u16, cipher_suite: u16) -> Self {
        Self { version, cipher_suite }
    }

    /// Read the negotiated parameters from a rustls client or server
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns [`DescribeError::HandshakeIncomplete`] if the handshake has
    /// not yet fixed the protocol version or the cipher suite.
    pub fn from_common_state(state: &CommonState) -> Result<Self, DescribeError> {
        let version = state
            .protocol_version()
            .ok_or(DescribeError::HandshakeIncomplete { missing: "protocol version" })?;
        let suite = state
            .negotiated_cipher_suite()
            .ok_or(DescribeError::HandshakeIncomplete { missing: "cipher suite" })?;

        Ok(Self::new(u16::from(version), u16::from(suite.suite())))
    }

    /// Description of the protocol version
    #[must_use]
    pub fn version(&self) -> Description {
        resolver::describe_version(self.version)
    }

    /// Description of the cipher suite, with its name derived
    #[must_use]
    pub fn cipher(&self) -> Description {
        resolver::describe_cipher(self.cipher_suite)
    }

    /// See [`encoder::encode_to_object`].
    #[must_use]
    pub fn to_object(&self) -> TlsDescription {
        encoder::encode_to_object(self.version, self.cipher_suite)
    }

    /// See [`encoder::encode_to_text`].
    #[must_use]
    pub fn to_text(&self, config: &EncoderConfig) -> String {
        encoder::encode_to_text(self.version, self.cipher_suite, config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rustls::pki_types::ServerName;
    use rustls::{ClientConfig, ClientConnection, RootCertStore};

    use super::*;
    use crate::error::ErrorCode;
    use crate::quality::Quality;
    use crate::registry::{suite, version};

    fn fresh_client_connection() -> ClientConnection {
        let provider = Arc::new(rustls::crypto::aws_lc_rs::default_provider());
        let config = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()
            .unwrap()
            .with_root_certificates(RootCertStore::empty())
            .with_no_client_auth();
        let server_name = ServerName::try_from("example.com").unwrap();
        ClientConnection::new(Arc::new(config), server_name).unwrap()
    }

    #[test]
    fn test_from_common_state_before_handshake() {
        let conn = fresh_client_connection();
        let err = NegotiatedSession::from_common_state(&conn).unwrap_err();
        assert_eq!(err.code(), ErrorCode::HandshakeIncomplete);
    }

    #[test]
    fn test_session_delegates_to_resolver() {
        let session =
            NegotiatedSession::new(version::TLS_1_0, suite::TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA);
        assert_eq!(session.version().name, "TLS 1.0");
        assert_eq!(session.cipher().name, "ECDHE_RSA key exchange, 3DES_EDE_CBC_SHA cipher");
        assert_eq!(session.cipher().quality, Quality::Insecure);
        assert_eq!(session.to_object().cipher, "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA");
        assert!(session.to_text(&EncoderConfig::plain()).contains("Version: TLS 1.0"));
    }
}
