#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Structured and Console Encodings
//!
//! Two renderings of a negotiated (version, cipher suite) pair:
//!
//! - [`encode_to_object`]: a [`TlsDescription`] carrying only the stable
//!   slugs, for JSON or any other serde format
//! - [`encode_to_text`]: a fixed console block with each name tinted by its
//!   quality tier
//!
//! ```
//! use arc_tls_describe::registry::{suite, version};
//! use arc_tls_describe::{EncoderConfig, encode_to_object, encode_to_text};
//!
//! let object = encode_to_object(version::TLS_1_2, suite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256);
//! assert_eq!(object.version, "tls_1_2");
//!
//! let text = encode_to_text(
//!     version::TLS_1_2,
//!     suite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
//!     &EncoderConfig::plain(),
//! );
//! assert!(text.starts_with("** TLS Connection **"));
//! ```

use std::fmt::{self, Write as _};

use crossterm::style::Stylize;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::description::Description;
use crate::error::DescribeError;
use crate::quality::color_for;
use crate::resolver::{describe_cipher, describe_version};

/// Header line of the console block
pub const TLS_HEADER: &str = "** TLS Connection **";

/// Machine-readable description of a TLS session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TlsDescription {
    /// Protocol version slug, e.g. `tls_1_2`
    pub version: String,
    /// Cipher suite slug, e.g. `TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256`
    pub cipher: String,
}

impl TlsDescription {
    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DescribeError::Serialization`] if serde_json fails.
    pub fn to_json(&self) -> Result<String, DescribeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DescribeError::Serialization`] if serde_json fails.
    pub fn to_json_pretty(&self) -> Result<String, DescribeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Console rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Wrap names in ANSI colors according to their quality tier
    pub colorize: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { colorize: true }
    }
}

impl EncoderConfig {
    /// Colorized output (the default)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Output without escape sequences, for terminals that cannot show color
    #[must_use]
    pub fn plain() -> Self {
        Self { colorize: false }
    }

    /// Enable or disable colors
    #[must_use]
    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }
}

/// A description's name, tinted by tier when colors are enabled.
struct Tinted<'a> {
    desc: &'a Description,
    colorize: bool,
}

impl fmt::Display for Tinted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = &self.desc.name;
        match color_for(self.desc.quality).filter(|_| self.colorize) {
            Some(color) => write!(f, "{}", name.with(color)),
            None => f.write_str(name),
        }
    }
}

/// Describe a session by its slugs.
#[must_use]
pub fn encode_to_object(version_id: u16, cipher_id: u16) -> TlsDescription {
    trace!(version_id, cipher_id, "Encoding TLS session to object");
    let version = describe_version(version_id);
    let cipher = describe_cipher(cipher_id);
    TlsDescription { version: version.slug.into_owned(), cipher: cipher.slug.into_owned() }
}

/// Describe a session as a console block:
///
/// ```text
/// ** TLS Connection **
/// Version: <version name>
/// Cipher Suite: <cipher name>
/// ```
#[must_use]
pub fn encode_to_text(version_id: u16, cipher_id: u16, config: &EncoderConfig) -> String {
    trace!(version_id, cipher_id, colorize = config.colorize, "Encoding TLS session to text");
    let version = describe_version(version_id);
    let cipher = describe_cipher(cipher_id);
    render(&version, &cipher, config.colorize)
}

/// [`encode_to_text`] without colors.
#[must_use]
pub fn encode_to_text_plain(version_id: u16, cipher_id: u16) -> String {
    encode_to_text(version_id, cipher_id, &EncoderConfig::plain())
}

fn render(version: &Description, cipher: &Description, colorize: bool) -> String {
    let mut out = String::new();
    write!(
        out,
        "{TLS_HEADER}\nVersion: {}\nCipher Suite: {}",
        Tinted { desc: version, colorize },
        Tinted { desc: cipher, colorize },
    )
    .expect("rendering the TLS layout into a String cannot fail");
    out
}
