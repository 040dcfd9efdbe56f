#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # LatticeArc TLS Session Description
//!
//! Labels a negotiated TLS session (protocol version + cipher suite) with
//! human-readable names, stable slugs and a security quality tier, and
//! renders the result either as a serializable record or as a colorized
//! console block.
//!
//! This crate does not perform handshakes or judge whether a connection is
//! safe to use. It classifies the identifiers it is handed; anything it does
//! not recognize is shown as `UNKNOWN_<hex>` in the lowest tier.
//!
//! ## Quick Start
//!
//! ```
//! use arc_tls_describe::*;
//! use arc_tls_describe::registry::{suite, version};
//!
//! let session =
//!     NegotiatedSession::new(version::TLS_1_2, suite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256);
//!
//! let object = session.to_object();
//! assert_eq!(object.version, "tls_1_2");
//! assert_eq!(object.cipher, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
//!
//! let text = session.to_text(&EncoderConfig::plain());
//! assert_eq!(
//!     text,
//!     "** TLS Connection **\n\
//!      Version: TLS 1.2\n\
//!      Cipher Suite: ECDHE_RSA key exchange, AES_128_GCM_SHA256 cipher"
//! );
//! ```
//!
//! With a live rustls connection, use
//! [`NegotiatedSession::from_common_state`] once the handshake completes.
//!
//! ## Data Flow
//!
//! ```text
//! (version id, suite id) ──► resolver ──► (Description, Description) ──► encoder
//!                              │                                          ├─► TlsDescription
//!                           registry                                      └─► console text
//! ```

pub mod description;
pub mod encoder;
pub mod error;
pub mod quality;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod tracing;

pub use description::Description;
pub use encoder::{
    EncoderConfig, TLS_HEADER, TlsDescription, encode_to_object, encode_to_text,
    encode_to_text_plain,
};
pub use error::{DescribeError, ErrorCode, ErrorSeverity};
pub use quality::{Quality, color_for};
pub use resolver::{describe_cipher, describe_version, explain_cipher, lookup};
pub use session::NegotiatedSession;
pub use self::tracing::{TracingConfig, init_tracing};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
