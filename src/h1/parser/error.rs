/// Request line or header field could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Line exceeds the maximum field size.
    TooLong,
    /// `CR` not followed by `LF`, or missing `SP` between request line components.
    InvalidSeparator,
    /// Method is not a token.
    InvalidMethod,
    /// Request target is not in origin-form.
    InvalidTarget,
    /// Version other than `HTTP/1.0` and `HTTP/1.1`.
    UnsupportedVersion,
    /// Header field without colon, or with invalid name or value.
    InvalidHeader,
    /// Header field count exceeds the maximum.
    TooManyHeaders,
}

impl ParseError {
    const fn message(&self) -> &'static str {
        match self {
            Self::TooLong => "line too long",
            Self::InvalidSeparator => "invalid line separator",
            Self::InvalidMethod => "invalid method token",
            Self::InvalidTarget => "request target is not origin-form",
            Self::UnsupportedVersion => "unsupported http version",
            Self::InvalidHeader => "invalid header field",
            Self::TooManyHeaders => "too many header fields",
        }
    }
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
