use std::io;

use super::parser::ParseError;

/// Request could not be read off the connection.
///
/// There is no well-formed request to respond to, the connection is closed without response.
#[derive(Debug)]
pub enum MalformedRequest {
    /// Request line or header fields is malformed.
    Parse(ParseError),
    /// `Content-Length` is not a number, or repeated with different values.
    InvalidContentLength,
    /// `Transfer-Encoding` is present, only `Content-Length` framing is supported.
    UnsupportedTransferEncoding,
    /// Declared body length exceeds the limit.
    BodyTooLarge { declared: u64, limit: u64 },
    /// Connection closed before the request is complete.
    UnexpectedEof,
    /// IO error while reading the request.
    Io(io::Error),
}

impl std::error::Error for MalformedRequest {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for MalformedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::InvalidContentLength => f.write_str("invalid content-length"),
            Self::UnsupportedTransferEncoding => f.write_str("unsupported transfer-encoding"),
            Self::BodyTooLarge { declared, limit } => {
                write!(f, "body of {declared} bytes exceeds the limit of {limit} bytes")
            }
            Self::UnexpectedEof => f.write_str("connection closed before request is complete"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl From<ParseError> for MalformedRequest {
    #[inline]
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<io::Error> for MalformedRequest {
    #[inline]
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
