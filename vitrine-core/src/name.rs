//! Cache generation name type.
//!
//! `CacheName` is a newtype wrapper around `SmolStr` that provides type
//! safety for generation identifiers used as store namespaces and in
//! lifecycle sweeps.

use smol_str::SmolStr;
use std::fmt;

/// The name of a cache generation.
///
/// A generation is a named snapshot store of previously fetched responses,
/// superseded wholesale on version bump. Names embed the version, so
/// bumping a version string produces a new generation and marks the old
/// one for deletion at activation.
///
/// # Example
/// ```
/// use vitrine_core::CacheName;
///
/// let name = CacheName::new("static-v2");
/// assert_eq!(name.as_str(), "static-v2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheName(SmolStr);

impl CacheName {
    /// Creates a new cache generation name.
    #[inline]
    pub fn new(s: impl Into<SmolStr>) -> Self {
        Self(s.into())
    }

    /// Creates a generation name from a static string (no allocation).
    #[inline]
    pub const fn new_static(s: &'static str) -> Self {
        Self(SmolStr::new_static(s))
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheName {
    fn from(s: &str) -> Self {
        Self(SmolStr::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        let name = CacheName::new("dynamic-v1");
        assert_eq!(name.to_string(), "dynamic-v1");
    }

    #[test]
    fn equality_is_by_content() {
        assert_eq!(CacheName::new("static-v2"), CacheName::from("static-v2"));
        assert_ne!(CacheName::new("static-v2"), CacheName::new("static-v1"));
    }
}
