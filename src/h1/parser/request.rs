use bytes::BytesMut;

use super::{ParseError, split_line};
use crate::common::ParseResult;
use crate::http::{Method, Version};
use crate::request::Target;

const VERSION_SIZE: usize = b"HTTP/1.1".len();

/// Parsed request line.
#[derive(Debug)]
pub struct Reqline {
    pub method: Method,
    pub target: Target,
    pub version: Version,
}

impl Reqline {
    /// Parse request line.
    ///
    /// This function performs a chunked parsing, see [module level documentation] for more
    /// details.
    ///
    /// [module level documentation]: crate::h1::parser
    #[inline]
    pub fn parse_chunk(bytes: &mut BytesMut) -> ParseResult<Reqline, ParseError> {
        parse_chunk_reqline(bytes)
    }
}

// ===== Request Line =====

fn parse_chunk_reqline(bytes: &mut BytesMut) -> ParseResult<Reqline, ParseError> {
    use ParseResult as Result;

    let reqline = ready!(split_line(bytes));

    let Some(sp) = reqline.iter().position(|b| *b == b' ') else {
        return Result::Err(ParseError::InvalidSeparator);
    };

    let method = match Method::from_bytes(&reqline[..sp]) {
        Ok(ok) => ok,
        Err(_) => return Result::Err(ParseError::InvalidMethod),
    };

    let Some(([target @ .., b' '], version)) = reqline[sp + 1..].split_last_chunk::<VERSION_SIZE>() else {
        return Result::Err(ParseError::InvalidSeparator);
    };

    let Some(version) = Version::from_bytes(version) else {
        return Result::Err(ParseError::UnsupportedVersion);
    };

    // origin-form only, taken literally
    if !matches!(target, [b'/', ..]) || !target.iter().all(u8::is_ascii_graphic) {
        return Result::Err(ParseError::InvalidTarget);
    }

    let target = match std::str::from_utf8(target) {
        Ok(ok) => Target::new(ok),
        Err(_) => return Result::Err(ParseError::InvalidTarget),
    };

    Result::Ok(Reqline {
        method,
        target,
        version,
    })
}
