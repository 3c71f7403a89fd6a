use bytes::Bytes;

use crate::headers::error::HeaderError;

/// HTTP Header Value.
///
/// Value may contains `obs-text`, use [`try_as_str`][HeaderValue::try_as_str] to get a `str`.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderValue {
    bytes: Bytes,
}

impl HeaderValue {
    /// Parse header value from static string.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header value.
    #[inline]
    pub const fn from_static(value: &'static str) -> Self {
        match validate_header_value(value.as_bytes()) {
            Ok(()) => Self {
                bytes: Bytes::from_static(value.as_bytes()),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header value from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_bytes<B: Into<Bytes>>(value: B) -> Result<Self, HeaderError> {
        let bytes = value.into();
        match validate_header_value(&bytes) {
            Ok(()) => Ok(Self { bytes }),
            Err(err) => Err(err),
        }
    }

    /// Returns header value as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns header value as `str` if its valid UTF-8.
    #[inline]
    pub fn try_as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    /// Returns the underlying [`Bytes`].
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

// ===== Parsing =====

const MAX_HEADER_VALUE_LEN: usize = 1 << 13;  // 8KB

/// field-value    = *field-content
/// field-content  = field-vchar [ 1*( SP / HTAB / field-vchar ) field-vchar ]
const fn validate_header_value(mut bytes: &[u8]) -> Result<(), HeaderError> {
    if let [b' ' | b'\t', ..] | [.., b' ' | b'\t'] = bytes {
        return Err(HeaderError::InvalidValue);
    }
    if bytes.len() > MAX_HEADER_VALUE_LEN {
        return Err(HeaderError::ValueTooLong);
    }
    while let [byte, rest @ ..] = bytes {
        if !is_header_value(*byte) {
            return Err(HeaderError::InvalidValue);
        }
        bytes = rest;
    }
    Ok(())
}

/// field-vchar, obs-text, SP and HTAB
const fn is_header_value(byte: u8) -> bool {
    matches!(byte, b'\t' | b' '..=b'~' | 0x80..=0xFF)
}

// ===== Traits =====

impl PartialEq<str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.bytes.escape_ascii())
    }
}
