#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! The description record shared by versions and cipher suites.

use std::borrow::Cow;

use crate::quality::Quality;

/// Human- and machine-readable description of a TLS parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Description {
    /// Human-friendly label; empty for cipher suites until explained
    pub name: Cow<'static, str>,
    /// Stable machine-friendly identifier, always populated
    pub slug: Cow<'static, str>,
    /// Security tier
    pub quality: Quality,
}

impl Description {
    /// Registry entry with static strings.
    #[must_use]
    pub const fn new(name: &'static str, slug: &'static str, quality: Quality) -> Self {
        Self { name: Cow::Borrowed(name), slug: Cow::Borrowed(slug), quality }
    }

    /// Placeholder for an identifier no registry knows about.
    ///
    /// Name and slug are both `UNKNOWN_<hex>` and the tier is the lowest one.
    #[must_use]
    pub fn unknown(id: u16) -> Self {
        let token = format!("UNKNOWN_{id:x}");
        Self {
            name: Cow::Owned(token.clone()),
            slug: Cow::Owned(token),
            quality: Quality::lowest(),
        }
    }

    /// Whether this is a synthesized placeholder
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.slug.starts_with("UNKNOWN_")
    }
}
