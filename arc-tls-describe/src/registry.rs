#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Static classification tables for TLS protocol versions and cipher suites.
//!
//! Both tables are keyed by the 16-bit identifiers registered with IANA and
//! are immutable for the life of the process. Cipher suite entries carry an
//! empty name; [`crate::resolver::explain_cipher`] derives it from the slug.
//!
//! ## Tiers
//!
//! | Parameter                                   | Tier       |
//! |---------------------------------------------|------------|
//! | SSL 3.0, TLS 1.0                            | Insecure   |
//! | TLS 1.1                                     | Acceptable |
//! | TLS 1.2                                     | Good       |
//! | RC4 or 3DES bulk cipher                     | Insecure   |
//! | CBC with RSA or ECDHE key exchange          | Acceptable |
//! | GCM with static RSA key exchange            | Acceptable |
//! | GCM or ChaCha20-Poly1305 with ECDHE         | Good       |
//!
//! TLS 1.3 and its suites are not classified and resolve to placeholders.

use crate::description::Description;
use crate::quality::Quality::{Acceptable, Good, Insecure};

/// Protocol version identifiers.
pub mod version {
    #![allow(missing_docs)]

    pub const SSL_3_0: u16 = 0x0300;
    pub const TLS_1_0: u16 = 0x0301;
    pub const TLS_1_1: u16 = 0x0302;
    pub const TLS_1_2: u16 = 0x0303;
    pub const TLS_1_3: u16 = 0x0304;
}

/// Cipher suite identifiers, named after their IANA registration.
pub mod suite {
    #![allow(missing_docs)]

    pub const TLS_RSA_WITH_RC4_128_SHA: u16 = 0x0005;
    pub const TLS_RSA_WITH_3DES_EDE_CBC_SHA: u16 = 0x000a;
    pub const TLS_RSA_WITH_AES_128_CBC_SHA: u16 = 0x002f;
    pub const TLS_RSA_WITH_AES_256_CBC_SHA: u16 = 0x0035;
    pub const TLS_RSA_WITH_AES_128_CBC_SHA256: u16 = 0x003c;
    pub const TLS_RSA_WITH_AES_128_GCM_SHA256: u16 = 0x009c;
    pub const TLS_RSA_WITH_AES_256_GCM_SHA384: u16 = 0x009d;
    pub const TLS_ECDHE_ECDSA_WITH_RC4_128_SHA: u16 = 0xc007;
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA: u16 = 0xc009;
    pub const TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA: u16 = 0xc00a;
    pub const TLS_ECDHE_RSA_WITH_RC4_128_SHA: u16 = 0xc011;
    pub const TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA: u16 = 0xc012;
    pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA: u16 = 0xc013;
    pub const TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA: u16 = 0xc014;
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256: u16 = 0xc023;
    pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256: u16 = 0xc027;
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02b;
    pub const TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: u16 = 0xc02c;
    pub const TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02f;
    pub const TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: u16 = 0xc030;
    pub const TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcca8;
    pub const TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcca9;
}

/// A classification table: identifier → description.
pub type Table = [(u16, Description)];

static PROTOCOL_VERSIONS: [(u16, Description); 4] = [
    (version::SSL_3_0, Description::new("SSL 3.0", "ssl_3_0", Insecure)),
    (version::TLS_1_0, Description::new("TLS 1.0", "tls_1_0", Insecure)),
    (version::TLS_1_1, Description::new("TLS 1.1", "tls_1_1", Acceptable)),
    (version::TLS_1_2, Description::new("TLS 1.2", "tls_1_2", Good)),
];

macro_rules! cipher_slug {
    ($suite:ident) => {
        stringify!($suite)
    };
    ($suite:ident, $slug:literal) => {
        $slug
    };
}

macro_rules! cipher_entries {
    ($($suite:ident $(as $slug:literal)? => $quality:expr),+ $(,)?) => {
        [$((suite::$suite, Description::new("", cipher_slug!($suite $(, $slug)?), $quality))),+]
    };
}

static CIPHER_SUITES: [(u16, Description); 22] = cipher_entries![
    TLS_RSA_WITH_RC4_128_SHA => Insecure,
    TLS_RSA_WITH_3DES_EDE_CBC_SHA => Insecure,
    TLS_RSA_WITH_AES_128_CBC_SHA => Acceptable,
    TLS_RSA_WITH_AES_256_CBC_SHA => Acceptable,
    TLS_RSA_WITH_AES_128_CBC_SHA256 => Acceptable,
    TLS_RSA_WITH_AES_128_GCM_SHA256 => Acceptable,
    TLS_RSA_WITH_AES_256_GCM_SHA384 => Acceptable,
    TLS_ECDHE_ECDSA_WITH_RC4_128_SHA => Insecure,
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA => Acceptable,
    TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA => Acceptable,
    TLS_ECDHE_RSA_WITH_RC4_128_SHA => Insecure,
    TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA => Insecure,
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA => Acceptable,
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA => Acceptable,
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256 => Acceptable,
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256 => Acceptable,
    TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 => Good,
    TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 => Good,
    TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 => Good,
    TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 => Good,
    // ChaCha20 slugs predate the IANA `_SHA256` suffix and stay stable.
    TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256
        as "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305" => Good,
    TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256
        as "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305" => Good,
];

/// All classified protocol versions.
#[must_use]
pub fn protocol_versions() -> &'static Table {
    &PROTOCOL_VERSIONS
}

/// All classified cipher suites.
#[must_use]
pub fn cipher_suites() -> &'static Table {
    &CIPHER_SUITES
}

/// Registered description of a protocol version
#[must_use]
pub fn protocol_version(id: u16) -> Option<&'static Description> {
    find(protocol_versions(), id)
}

/// Registered description of a cipher suite
#[must_use]
pub fn cipher_suite(id: u16) -> Option<&'static Description> {
    find(cipher_suites(), id)
}

pub(crate) fn find(table: &Table, id: u16) -> Option<&Description> {
    table.iter().find(|(key, _)| *key == id).map(|(_, desc)| desc)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::quality::Quality;

    #[test]
    fn test_version_tiers() {
        assert_eq!(protocol_version(version::SSL_3_0).unwrap().quality, Quality::Insecure);
        assert_eq!(protocol_version(version::TLS_1_0).unwrap().quality, Quality::Insecure);
        assert_eq!(protocol_version(version::TLS_1_1).unwrap().quality, Quality::Acceptable);
        assert_eq!(protocol_version(version::TLS_1_2).unwrap().quality, Quality::Good);
        assert!(protocol_version(version::TLS_1_3).is_none());
    }

    #[test]
    fn test_identifiers_are_unique() {
        for table in [protocol_versions(), cipher_suites()] {
            let ids: HashSet<u16> = table.iter().map(|(id, _)| *id).collect();
            assert_eq!(ids.len(), table.len());
        }
    }

    #[test]
    fn test_cipher_names_start_empty() {
        assert!(cipher_suites().iter().all(|(_, desc)| desc.name.is_empty()));
        assert!(protocol_versions().iter().all(|(_, desc)| !desc.name.is_empty()));
    }

    #[test]
    fn test_cipher_tiers_follow_bulk_cipher() {
        for (_, desc) in cipher_suites() {
            let slug: &str = &desc.slug;
            let expected = if slug.contains("RC4") || slug.contains("3DES") {
                Quality::Insecure
            } else if slug.contains("_CBC_") || slug.starts_with("TLS_RSA_") {
                Quality::Acceptable
            } else {
                Quality::Good
            };
            assert_eq!(desc.quality, expected, "{slug}");
        }
    }

    #[test]
    fn test_chacha_slugs_omit_hash_suffix() {
        assert_eq!(
            cipher_suite(suite::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256).unwrap().slug,
            "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305"
        );
        assert_eq!(
            cipher_suite(suite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256).unwrap().slug,
            "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305"
        );
        let chacha = cipher_suites().iter().filter(|(_, desc)| desc.slug.ends_with("POLY1305"));
        assert_eq!(chacha.count(), 2);
    }

    #[test]
    fn test_ids_match_rustls_registry() {
        use rustls::{CipherSuite, ProtocolVersion};

        assert_eq!(u16::from(ProtocolVersion::SSLv3), version::SSL_3_0);
        assert_eq!(u16::from(ProtocolVersion::TLSv1_0), version::TLS_1_0);
        assert_eq!(u16::from(ProtocolVersion::TLSv1_1), version::TLS_1_1);
        assert_eq!(u16::from(ProtocolVersion::TLSv1_2), version::TLS_1_2);
        assert_eq!(u16::from(ProtocolVersion::TLSv1_3), version::TLS_1_3);

        assert_eq!(
            u16::from(CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256),
            suite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256
        );
        assert_eq!(
            u16::from(CipherSuite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256),
            suite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256
        );
    }
}
