use bytes::{Buf, BytesMut};

use super::{ParseError, split_line};
use crate::common::ParseResult;
use crate::headers::{HeaderName, HeaderValue};

/// Parsed header field.
#[derive(Debug)]
pub struct Header {
    pub name: HeaderName,
    pub value: HeaderValue,
}

impl Header {
    /// Parse header field.
    ///
    /// Returns `ParseResult::Ok(None)` when encounter an empty line.
    ///
    /// This function performs a chunked parsing, see [module level documentation] for more
    /// details.
    ///
    /// [module level documentation]: crate::h1::parser
    #[inline]
    pub fn parse_chunk(bytes: &mut BytesMut) -> ParseResult<Option<Header>, ParseError> {
        parse_chunk_header(bytes)
    }
}

fn parse_chunk_header(bytes: &mut BytesMut) -> ParseResult<Option<Header>, ParseError> {
    use ParseResult as Result;

    match bytes.first().copied() {
        None => return Result::Pending,
        Some(b'\r') => {
            match bytes.get(1).copied() {
                Some(b'\n') => bytes.advance(2),
                Some(_) => return Result::Err(ParseError::InvalidSeparator),
                None => return Result::Pending,
            }
            return Result::Ok(None);
        }
        Some(b'\n') => {
            bytes.advance(1);
            return Result::Ok(None);
        }
        Some(_) => {}
    }

    let mut line = ready!(split_line(bytes));

    let Some(colon) = line.iter().position(|b| *b == b':') else {
        return Result::Err(ParseError::InvalidHeader);
    };

    // whitespace between name and colon is rejected by name validation
    let name = match HeaderName::from_bytes(line.split_to(colon).freeze()) {
        Ok(ok) => ok,
        Err(_) => return Result::Err(ParseError::InvalidHeader),
    };
    line.advance(1);

    let start = line.iter().take_while(|b| matches!(b, b' ' | b'\t')).count();
    let end = line.len() - line[start..].iter().rev().take_while(|b| matches!(b, b' ' | b'\t')).count();

    let value = match HeaderValue::from_bytes(line.freeze().slice(start..end)) {
        Ok(ok) => ok,
        Err(_) => return Result::Err(ParseError::InvalidHeader),
    };

    Result::Ok(Some(Header { name, value }))
}
