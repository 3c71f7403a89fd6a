//! Header validation errors.

/// Header name or value failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Header name is empty.
    EmptyName,
    /// Header name exceeds its maximum length.
    NameTooLong,
    /// Header name contains a byte that is not a token character.
    InvalidName,
    /// Header value exceeds its maximum length.
    ValueTooLong,
    /// Header value contains a control byte, or has surrounding whitespace.
    InvalidValue,
}

impl HeaderError {
    const fn message(self) -> &'static str {
        match self {
            Self::EmptyName => "header name is empty",
            Self::NameTooLong => "header name is too long",
            Self::InvalidName => "header name contains non token byte",
            Self::ValueTooLong => "header value is too long",
            Self::InvalidValue => "header value contains invalid byte",
        }
    }

    /// Panics with the error message, used in const constructors.
    pub(crate) const fn panic_const(self) -> ! {
        panic!("{}", self.message())
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
