//! HTTP Response
use bytes::Bytes;

use crate::{
    headers::{HeaderMap, HeaderValue, standard::CONTENT_TYPE},
    http::{StatusCode, Version},
};

/// HTTP Response Parts.
#[derive(Debug, Default)]
pub struct Parts {
    pub version: Version,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// HTTP Response.
///
/// An absent body and an empty body are both written as zero length content, but only a
/// response with body carries `Content-Type`.
#[derive(Debug, Default)]
pub struct Response {
    parts: Parts,
    body: Option<Bytes>,
}

/// Constructor
impl Response {
    /// Create [`Response`] from [`Parts`] and optional body.
    #[inline]
    pub fn from_parts(parts: Parts, body: Option<Bytes>) -> Self {
        Self { parts, body }
    }

    /// Create [`Response`] with given status and no body.
    #[inline]
    pub fn from_status(status: StatusCode) -> Self {
        Self::from_parts(Parts { status, ..Parts::default() }, None)
    }

    /// Create [`Response`] with given status, `Content-Type` and body.
    #[inline]
    pub fn with_content(status: StatusCode, content_type: HeaderValue, body: impl Into<Bytes>) -> Self {
        let mut res = Self::from_status(status);
        res.parts.headers.insert(CONTENT_TYPE, content_type);
        res.body = Some(body.into());
        res
    }
}

impl Response {
    /// Returns shared reference to [`Parts`].
    #[inline]
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Returns the response [`StatusCode`].
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.parts.status
    }

    /// Returns shared reference to [`HeaderMap`].
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Returns mutable reference to [`HeaderMap`].
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.parts.headers
    }

    /// Returns shared reference to the body, if any.
    #[inline]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Returns the body length that will be written, `0` for absent body.
    #[inline]
    pub fn content_length(&self) -> usize {
        self.body.as_ref().map_or(0, Bytes::len)
    }
}

/// Destructor
impl Response {
    /// Destruct response into [`Parts`] and body.
    #[inline]
    pub fn into_parts(self) -> (Parts, Option<Bytes>) {
        (self.parts, self.body)
    }
}

// ===== IntoResponse =====

/// Type that can be converted into [`Response`].
pub trait IntoResponse {
    /// Create response.
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    #[inline]
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for StatusCode {
    #[inline]
    fn into_response(self) -> Response {
        Response::from_status(self)
    }
}

impl IntoResponse for std::convert::Infallible {
    fn into_response(self) -> Response {
        match self { }
    }
}

impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        }
    }
}
