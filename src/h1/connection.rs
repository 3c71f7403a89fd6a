//! HTTP/1.1 connection handling.
//!
//! One connection carries exactly one request and one response, the connection is closed after
//! the response is written or as soon as the request is found malformed.
use bytes::BytesMut;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use super::parser::{Header, ParseError, Reqline};
use super::{MalformedRequest, body, write_response};
use crate::common::ParseResult;
use crate::headers::HeaderMap;
use crate::log::{debug, warning};
use crate::request::{Parts, Request};
use crate::response::Response;
use crate::service::Service;

const MAX_HEADERS: usize = 64;
const DEFAULT_BUFFER_CAP: usize = 1024;

/// Request size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of the request line or a single header field.
    pub max_field_size: usize,
    /// Maximum declared `Content-Length`.
    pub max_body_size: u64,
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Self {
            max_field_size: 8 * 1024,
            max_body_size: 1024 * 1024,
        }
    }
}

/// Parse buffered bytes until complete, reading more bytes from IO when pending.
///
/// Handle zero read and max line length.
macro_rules! parse {
    ($parse:path, $io:ident, $buffer:ident, $limits:ident) => {
        loop {
            let available = $buffer.len();
            match $parse(&mut $buffer) {
                ParseResult::Ok(ok) => {
                    if available - $buffer.len() > $limits.max_field_size {
                        return Err(ParseError::TooLong.into());
                    }
                    break ok;
                }
                ParseResult::Err(err) => return Err(err.into()),
                ParseResult::Pending => {
                    if $buffer.len() > $limits.max_field_size {
                        return Err(ParseError::TooLong.into());
                    }
                    if $io.read_buf(&mut $buffer).await? == 0 {
                        return Err(MalformedRequest::UnexpectedEof);
                    }
                }
            }
        }
    };
}

/// Read a complete request, including its body, from `io`.
pub async fn read_request<IO>(io: &mut IO, limits: &Limits) -> Result<Request, MalformedRequest>
where
    IO: AsyncRead + Unpin,
{
    let mut buffer = BytesMut::with_capacity(DEFAULT_BUFFER_CAP);

    let reqline = parse!(Reqline::parse_chunk, io, buffer, limits);

    let mut headers = HeaderMap::with_capacity(16);

    while let Some(Header { name, value }) = parse!(Header::parse_chunk, io, buffer, limits) {
        if headers.len() == MAX_HEADERS {
            return Err(ParseError::TooManyHeaders.into());
        }
        headers.append(name, value);
    }

    let content_length = body::content_length(&headers)?;
    let body = body::read_body(io, &mut buffer, content_length, limits.max_body_size).await?;

    let Reqline { method, target, version } = reqline;
    let parts = Parts {
        method,
        target,
        version,
        headers,
        content_length,
    };

    Ok(Request::from_parts(parts, body))
}

/// Serve a single request on `io` with given service.
///
/// Every failure is contained within this connection, `io` is dropped, thus closed, exactly once
/// when this function returns.
pub async fn serve_connection<IO, S>(mut io: IO, service: Arc<S>, limits: Limits)
where
    IO: AsyncRead + AsyncWrite + Unpin,
    S: Service<Request, Response = Response>,
    S::Error: std::fmt::Display,
{
    let request = match read_request(&mut io, &limits).await {
        Ok(ok) => ok,
        Err(err) => {
            warning!("malformed request: {err}");
            return;
        }
    };

    debug!("> {} {} {}", request.method(), request.target(), request.version());

    let response = match service.call(request).await {
        Ok(ok) => ok,
        Err(err) => {
            warning!("service failed: {err}");
            return;
        }
    };

    debug!("< {} {} bytes", response.status(), response.content_length());

    let mut write_buffer = BytesMut::with_capacity(DEFAULT_BUFFER_CAP + response.content_length());
    write_response(&response, &mut write_buffer);

    if let Err(err) = io.write_all_buf(&mut write_buffer).await {
        warning!("failed to write response: {err}");
        return;
    }

    if let Err(err) = io.shutdown().await {
        debug!("failed to shutdown connection: {err}");
    }
}
