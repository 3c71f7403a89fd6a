//! HTTP Request
use bytes::Bytes;

use crate::{
    headers::HeaderMap,
    http::{Method, Version},
};

/// HTTP Request Parts.
#[derive(Debug, Clone, Default)]
pub struct Parts {
    pub method: Method,
    pub target: Target,
    pub version: Version,
    pub headers: HeaderMap,
    /// Length declared by `Content-Length`, `0` if absent.
    pub content_length: u64,
}

/// HTTP Request.
///
/// A request is fully read, including its body, before it is handed to a service, and it is not
/// modified afterwards.
#[derive(Debug, Default)]
pub struct Request {
    parts: Parts,
    body: Bytes,
}

/// Constructor
impl Request {
    /// Create [`Request`] from [`Parts`] and body.
    #[inline]
    pub fn from_parts(parts: Parts, body: Bytes) -> Self {
        Self { parts, body }
    }
}

impl Request {
    /// Returns shared reference to [`Parts`].
    #[inline]
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Returns shared reference to [`Method`].
    #[inline]
    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    /// Returns shared reference to request [`Target`].
    #[inline]
    pub fn target(&self) -> &Target {
        &self.parts.target
    }

    /// Returns the request path, without query.
    #[inline]
    pub fn path(&self) -> &str {
        self.parts.target.path()
    }

    /// Returns shared reference to [`Version`].
    #[inline]
    pub fn version(&self) -> &Version {
        &self.parts.version
    }

    /// Returns shared reference to [`HeaderMap`].
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Returns the declared `Content-Length`.
    #[inline]
    pub fn content_length(&self) -> u64 {
        self.parts.content_length
    }

    /// Returns shared reference to the message body.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Destructor
impl Request {
    /// Destruct request into [`Parts`] and body.
    #[inline]
    pub fn into_parts(self) -> (Parts, Bytes) {
        (self.parts, self.body)
    }

    /// Destruct request into its body.
    #[inline]
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

// ===== Target =====

/// Origin-form request target, e.g: `/echo/abc?lang=en`.
///
/// The target is kept literally, no percent-decoding or dot-segment removal is performed.
#[derive(Clone, PartialEq, Eq)]
pub struct Target {
    value: Box<str>,
    path_len: usize,
}

impl Target {
    /// Create [`Target`] from origin-form string.
    pub fn new(value: impl Into<Box<str>>) -> Self {
        let value = value.into();
        let path_len = value.find('?').unwrap_or(value.len());
        Self { value, path_len }
    }

    /// Returns the path component, e.g: `/echo/abc`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.value[..self.path_len]
    }

    /// Returns the query component without the leading `?`, if any.
    #[inline]
    pub fn query(&self) -> Option<&str> {
        self.value.get(self.path_len + 1..)
    }

    /// Returns the whole target as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Default for Target {
    #[inline]
    fn default() -> Self {
        Self::new("/")
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}
