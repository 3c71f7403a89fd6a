use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use super::MalformedRequest;
use crate::headers::HeaderMap;
use crate::headers::standard::{CONTENT_LENGTH, TRANSFER_ENCODING};

/// Returns the body length declared by the request headers.
///
/// Absent `Content-Length` means empty body. Chunked bodies are not supported.
pub fn content_length(headers: &HeaderMap) -> Result<u64, MalformedRequest> {
    if headers.contains_key(TRANSFER_ENCODING) {
        return Err(MalformedRequest::UnsupportedTransferEncoding);
    }

    let mut declared = None;
    for value in headers.get_all(CONTENT_LENGTH) {
        let Some(len) = parse_content_length(value.as_bytes()) else {
            return Err(MalformedRequest::InvalidContentLength);
        };
        match declared {
            Some(prev) if prev != len => return Err(MalformedRequest::InvalidContentLength),
            _ => declared = Some(len),
        }
    }

    Ok(declared.unwrap_or(0))
}

/// Content-Length = 1*DIGIT
fn parse_content_length(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() {
        return None;
    }
    let mut len: u64 = 0;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        len = len.checked_mul(10)?.checked_add(u64::from(byte - b'0'))?;
    }
    Some(len)
}

/// Read exactly `declared` bytes of body.
///
/// `buffer` may already contains bytes read along with the header. The declared length is
/// checked against `limit` before any read, so an oversized body is never buffered.
pub async fn read_body<IO>(
    io: &mut IO,
    buffer: &mut BytesMut,
    declared: u64,
    limit: u64,
) -> Result<Bytes, MalformedRequest>
where
    IO: AsyncRead + Unpin,
{
    let len = match usize::try_from(declared) {
        Ok(len) if declared <= limit => len,
        _ => return Err(MalformedRequest::BodyTooLarge { declared, limit }),
    };

    if buffer.len() < len {
        buffer.reserve(len - buffer.len());
    }

    while buffer.len() < len {
        if io.read_buf(buffer).await? == 0 {
            return Err(MalformedRequest::UnexpectedEof);
        }
    }

    Ok(buffer.split_to(len).freeze())
}
