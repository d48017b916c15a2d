//! Intercepted request descriptor.

use http::{Method, Uri};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

use crate::ResourceKey;

/// The declared destination of an intercepted request.
///
/// Mirrors the host's resource-type declaration; the dispatcher keys one
/// routing rule off it (images get stale-while-revalidate) and the offline
/// fallback treats `Document` requests as navigations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// A navigable document (top-level or frame navigation).
    Document,
    /// A script resource.
    Script,
    /// A stylesheet.
    Style,
    /// An image resource.
    Image,
    /// A font resource.
    Font,
    /// Audio media.
    Audio,
    /// Video media.
    Video,
    /// Anything the host does not classify.
    #[default]
    Other,
}

impl Destination {
    /// Whether a failed request with this destination should fall back to
    /// the cached root document rather than an empty placeholder.
    #[inline]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Destination::Document)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Destination::Document => "document",
            Destination::Script => "script",
            Destination::Style => "style",
            Destination::Image => "image",
            Destination::Font => "font",
            Destination::Audio => "audio",
            Destination::Video => "video",
            Destination::Other => "other",
        };
        f.write_str(s)
    }
}

/// An outbound request intercepted by the agent.
///
/// Carries exactly what routing needs: method, URI, and the declared
/// [`Destination`]. The body is never inspected: the agent only ever
/// reasons about GET requests, and non-GET requests pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    method: Method,
    uri: Uri,
    destination: Destination,
}

impl ResourceRequest {
    /// Creates a request descriptor.
    pub fn new(method: Method, uri: Uri, destination: Destination) -> Self {
        Self {
            method,
            uri,
            destination,
        }
    }

    /// Creates a GET request with an unclassified destination.
    pub fn get(uri: Uri) -> Self {
        Self::new(Method::GET, uri, Destination::Other)
    }

    /// Creates a navigation request (GET, destination `Document`).
    pub fn navigate(uri: Uri) -> Self {
        Self::new(Method::GET, uri, Destination::Document)
    }

    /// Replaces the declared destination.
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Returns the request method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the declared destination.
    #[inline]
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Whether this is a GET request.
    #[inline]
    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }

    /// Whether the request targets an HTTP(S) resource.
    ///
    /// A scheme-less URI is a same-origin reference and counts as HTTP;
    /// anything else (extension schemes, data URIs) is not interceptable.
    pub fn is_http(&self) -> bool {
        match self.uri.scheme_str() {
            None => true,
            Some("http") | Some("https") => true,
            Some(_) => false,
        }
    }

    /// Returns the request hostname, if the URI carries one.
    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.uri.host()
    }

    /// Returns the request path.
    #[inline]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the store key identifying this request.
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(self.method.clone(), SmolStr::from(self.uri.to_string()))
    }
}
