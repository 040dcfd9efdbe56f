#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Identifier resolution and cipher suite name derivation.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::description::Description;
use crate::error::DescribeError;
use crate::registry::{self, Table};

const SUITE_PREFIX: &str = "TLS_";
const KEX_SEPARATOR: &str = "_WITH_";

/// Look up `id` in `table`.
///
/// Unregistered identifiers yield an `UNKNOWN_<hex>` placeholder in the
/// lowest tier instead of an error.
#[must_use]
pub fn lookup(table: &Table, id: u16) -> Description {
    match registry::find(table, id) {
        Some(desc) => desc.clone(),
        None => {
            debug!(id, "Unregistered TLS identifier");
            Description::unknown(id)
        }
    }
}

/// Fill in a cipher suite's name from its `TLS_<kex>_WITH_<cipher>` slug.
///
/// `TLS_RSA_WITH_AES_128_GCM_SHA256` becomes
/// `"RSA key exchange, AES_128_GCM_SHA256 cipher"`.
///
/// # Errors
///
/// Returns [`DescribeError::MalformedCipherSlug`] if the slug lacks the
/// `TLS_` prefix, does not contain exactly one `_WITH_`, or either half is
/// empty.
pub fn explain_cipher(desc: &Description) -> Result<Description, DescribeError> {
    let slug: &str = &desc.slug;
    let malformed = |reason: &'static str| DescribeError::MalformedCipherSlug {
        slug: slug.to_string(),
        reason,
    };

    let rest = slug.strip_prefix(SUITE_PREFIX).ok_or_else(|| malformed("missing TLS_ prefix"))?;
    let (kex, cipher) =
        rest.split_once(KEX_SEPARATOR).ok_or_else(|| malformed("missing _WITH_ separator"))?;
    if cipher.contains(KEX_SEPARATOR) {
        return Err(malformed("more than one _WITH_ separator"));
    }
    if kex.is_empty() || cipher.is_empty() {
        return Err(malformed("empty key exchange or cipher segment"));
    }

    Ok(Description {
        name: Cow::Owned(format!("{kex} key exchange, {cipher} cipher")),
        slug: desc.slug.clone(),
        quality: desc.quality,
    })
}

/// Description of a protocol version identifier.
#[must_use]
pub fn describe_version(id: u16) -> Description {
    lookup(registry::protocol_versions(), id)
}

/// Description of a cipher suite identifier, with its display name derived.
///
/// Unregistered suites keep their placeholder name.
#[must_use]
pub fn describe_cipher(id: u16) -> Description {
    let desc = lookup(registry::cipher_suites(), id);
    if desc.is_unknown() {
        return desc;
    }
    match explain_cipher(&desc) {
        Ok(explained) => explained,
        Err(err) => {
            warn!(error = %err, "Registered cipher suite has an unexplainable slug");
            Description { name: desc.slug.clone(), ..desc }
        }
    }
}
