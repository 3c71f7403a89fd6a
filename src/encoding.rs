//! Response content coding.
//!
//! Negotiation is a plain substring match of `gzip` in the request `Accept-Encoding`, weighted
//! codings are not interpreted.
use bytes::Bytes;
use flate2::{Compression, write::GzEncoder};
use std::io::{self, Write};

use crate::headers::standard::{ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_LENGTH};
use crate::headers::{HeaderMap, HeaderValue};
use crate::response::Response;

/// Content coding applied to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCoding {
    /// No transformation.
    Identity,
    /// [gzip](https://www.rfc-editor.org/rfc/rfc9110.html#name-gzip-coding) coding.
    Gzip,
}

impl ContentCoding {
    /// Select content coding from request headers.
    pub fn negotiate(headers: &HeaderMap) -> Self {
        match headers.get(ACCEPT_ENCODING) {
            Some(accept) if contains(accept.as_bytes(), b"gzip") => Self::Gzip,
            _ => Self::Identity,
        }
    }

    /// Returns the `Content-Encoding` token.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Gzip => "gzip",
        }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Encode the response body with given coding.
///
/// On [`ContentCoding::Gzip`], the body is replaced with its compressed form and
/// `Content-Encoding: gzip` is set. A response without body is returned unchanged.
///
/// # Errors
///
/// Returns error if compression fails, the response is consumed and no partially encoded
/// response is produced.
pub fn encode(res: Response, coding: ContentCoding) -> io::Result<Response> {
    let ContentCoding::Gzip = coding else {
        return Ok(res);
    };

    let (mut parts, body) = res.into_parts();
    let Some(body) = body else {
        return Ok(Response::from_parts(parts, None));
    };

    let compressed = gzip(&body)?;

    parts.headers.insert(CONTENT_ENCODING, HeaderValue::from_static(coding.as_str()));
    // recomputed by the writer from the compressed body
    parts.headers.remove(CONTENT_LENGTH);

    Ok(Response::from_parts(parts, Some(compressed)))
}

/// Compress bytes into gzip format.
pub fn gzip(data: &[u8]) -> io::Result<Bytes> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 32), Compression::default());
    encoder.write_all(data)?;
    encoder.finish().map(Bytes::from)
}

#[cfg(test)]
mod test {
    use flate2::read::GzDecoder;
    use std::io::Read;

    use super::*;
    use crate::headers::HeaderName;
    use crate::headers::standard::CONTENT_TYPE;
    use crate::http::StatusCode;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.append(HeaderName::from_static("Accept-Encoding"), HeaderValue::from_static(value));
        headers
    }

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_negotiate() {
        assert_eq!(ContentCoding::negotiate(&HeaderMap::new()), ContentCoding::Identity);
        assert_eq!(ContentCoding::negotiate(&accept("gzip")), ContentCoding::Gzip);
        assert_eq!(ContentCoding::negotiate(&accept("deflate, gzip;q=0.5")), ContentCoding::Gzip);
        assert_eq!(ContentCoding::negotiate(&accept("invalid-encoding")), ContentCoding::Identity);
        assert_eq!(ContentCoding::negotiate(&accept("")), ContentCoding::Identity);
    }

    #[test]
    fn test_encode_gzip() {
        let res = Response::with_content(StatusCode::OK, HeaderValue::from_static("text/plain"), "abc");
        let res = encode(res, ContentCoding::Gzip).unwrap();

        assert_eq!(res.headers().get(CONTENT_ENCODING).unwrap(), "gzip");
        assert_eq!(res.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(gunzip(res.body().unwrap()), b"abc");
    }

    #[test]
    fn test_encode_identity() {
        let res = Response::with_content(StatusCode::OK, HeaderValue::from_static("text/plain"), "abc");
        let res = encode(res, ContentCoding::Identity).unwrap();

        assert!(!res.headers().contains_key(CONTENT_ENCODING));
        assert_eq!(&res.body().unwrap()[..], b"abc");
    }

    #[test]
    fn test_encode_no_body() {
        let res = encode(Response::from_status(StatusCode::NOT_FOUND), ContentCoding::Gzip).unwrap();
        assert!(res.body().is_none());
        assert!(!res.headers().contains_key(CONTENT_ENCODING));
    }
}
