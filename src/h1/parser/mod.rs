//! HTTP/1.1 Parser.
//!
//! [`Reqline::parse_chunk`] works on buffered bytes, given any length of bytes, the parser will
//! find the next line separator and split the line off the buffer. If the separator is not found,
//! the parser returns [`ParseResult::Pending`] and leave the buffer untouched, where more bytes is
//! required to complete parsing.
//!
//! [`Header::parse_chunk`] works the same way. Additionally, if the parser encounter an empty line
//! it returns `ParseResult::Ok(None)` denoting that its the end of header fields.
//!
//! Both `CRLF` and bare `LF` are accepted as line separator.
use bytes::BytesMut;

use crate::common::ParseResult;

macro_rules! ready {
    ($e:expr) => {
        match $e {
            ParseResult::Ok(ok) => ok,
            ParseResult::Err(err) => return ParseResult::Err(err),
            ParseResult::Pending => return ParseResult::Pending,
        }
    };
}

mod request;
mod header;
mod error;

pub use request::Reqline;
pub use header::Header;
pub use error::ParseError;


/// Split a line off `bytes`, excluding the separator.
fn split_line(bytes: &mut BytesMut) -> ParseResult<BytesMut, ParseError> {
    let Some(at) = bytes.iter().position(|b| matches!(b, b'\r' | b'\n')) else {
        return ParseResult::Pending;
    };

    let crlf = match bytes[at] {
        b'\r' => match bytes.get(at + 1) {
            Some(b'\n') => 2,
            Some(_) => return ParseResult::Err(ParseError::InvalidSeparator),
            None => return ParseResult::Pending,
        },
        _ => 1,
    };

    let mut line = bytes.split_to(at + crlf);
    line.truncate(at);
    ParseResult::Ok(line)
}
