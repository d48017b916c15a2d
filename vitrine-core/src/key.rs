//! Resource identity used as the store key.
//!
//! A [`ResourceKey`] identifies a cached entry by request method and URL.
//! The agent only ever stores GET responses, but the method is part of the
//! identity so a non-GET request can never alias a cached entry.
//!
//! ## Format
//!
//! When rendered to string, keys follow this format: `{method} {url}`
//!
//! ```
//! use http::Method;
//! use vitrine_core::ResourceKey;
//!
//! let key = ResourceKey::new(Method::GET, "/img/logo.png");
//! assert_eq!(format!("{}", key), "GET /img/logo.png");
//! ```
//!
//! `ResourceKey` uses [`SmolStr`] for the URL, so cloning a key with a
//! short URL does not allocate.

use http::Method;
use smol_str::SmolStr;
use std::fmt;

/// Identity of a cached resource: request method plus URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    method: Method,
    url: SmolStr,
}

impl ResourceKey {
    /// Creates a key from a method and URL.
    pub fn new(method: Method, url: impl Into<SmolStr>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    /// Creates a GET key for the given URL.
    ///
    /// Shorthand for the common case; every entry the agent stores is
    /// keyed by a GET request.
    pub fn get(url: impl Into<SmolStr>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Returns the request method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URL.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_shorthand_uses_get_method() {
        let key = ResourceKey::get("/index.html");
        assert_eq!(key.method(), &Method::GET);
        assert_eq!(key.url(), "/index.html");
    }

    #[test]
    fn method_is_part_of_identity() {
        let get = ResourceKey::new(Method::GET, "/api/items");
        let head = ResourceKey::new(Method::HEAD, "/api/items");
        assert_ne!(get, head);
    }
}
